use crate::render::{render_decision, render_field_errors};
use clap::Args;
use loan_eligibility::eligibility::{EligibilityEngine, RawApplication};
use loan_eligibility::error::AppError;
use serde_json::json;

/// Form fields for a single application. Omitted fields are treated as blank.
#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Applicant's full name
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Applicant's age in years
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) age: Option<String>,
    /// Gross monthly salary in rupees
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) monthly_salary: Option<String>,
    /// Monthly EMI already being paid on other debts, in rupees
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) existing_emi: Option<String>,
    /// Loan amount requested, in rupees
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) loan_amount: Option<String>,
    /// Print the decision (or field errors) as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl CheckArgs {
    fn raw_application(&self) -> RawApplication {
        RawApplication::new(
            self.name.clone().unwrap_or_default(),
            self.age.clone().unwrap_or_default(),
            self.monthly_salary.clone().unwrap_or_default(),
            self.existing_emi.clone().unwrap_or_default(),
            self.loan_amount.clone().unwrap_or_default(),
        )
    }
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let engine = EligibilityEngine::standard();
    let raw = args.raw_application();

    match engine.check(&raw) {
        Ok(decision) => {
            if args.json {
                print_json(&json!(decision));
            } else {
                println!("{}", render_decision(&decision, engine.terms()));
            }
            Ok(())
        }
        Err(errors) => {
            if args.json {
                print_json(&json!({ "errors": errors }));
            } else {
                println!("{}", render_field_errors(&errors));
            }
            Err(AppError::Validation(errors))
        }
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("JSON output unavailable: {err}"),
    }
}
