use crate::render::{render_decision, render_field_errors};
use clap::Args;
use loan_eligibility::eligibility::{EligibilityEngine, RawApplication};
use loan_eligibility::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the intake validation example.
    #[arg(long)]
    pub(crate) skip_invalid: bool,
}

pub(crate) struct DemoScenario {
    pub(crate) title: &'static str,
    pub(crate) application: RawApplication,
}

pub(crate) fn demo_scenarios(include_invalid: bool) -> Vec<DemoScenario> {
    let mut scenarios = vec![
        DemoScenario {
            title: "Salaried applicant within every rule",
            application: RawApplication::new("Asha Rao", "30", "50000", "2000", "300000"),
        },
        DemoScenario {
            title: "Applicant below the minimum age",
            application: RawApplication::new("Rohan Mehta", "18", "50000", "0", "100000"),
        },
        DemoScenario {
            title: "Existing debt pushes DTI over the limit",
            application: RawApplication::new("Kavya Nair", "34", "20000", "8000", "200000"),
        },
        DemoScenario {
            title: "High-value loan on a modest salary",
            application: RawApplication::new("Vikram Singh", "41", "24000", "0", "600000"),
        },
    ];

    if include_invalid {
        scenarios.push(DemoScenario {
            title: "Incomplete form",
            application: RawApplication::new("A", "", "14999", "-500", "49999"),
        });
    }

    scenarios
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = EligibilityEngine::standard();

    println!("Loan eligibility demo");
    for (index, scenario) in demo_scenarios(!args.skip_invalid).iter().enumerate() {
        println!("\n{}. {}", index + 1, scenario.title);
        match engine.check(&scenario.application) {
            Ok(decision) => println!("{}", render_decision(&decision, engine.terms())),
            Err(errors) => println!("{}", render_field_errors(&errors)),
        }
    }

    Ok(())
}
