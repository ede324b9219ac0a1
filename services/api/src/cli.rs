use crate::check::{run_check, CheckArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Eligibility Checker",
    about = "Check personal loan eligibility from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate and evaluate a single application
    Check(CheckArgs),
    /// Walk through reference applications that exercise each eligibility rule
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_raw_field_values() {
        let cli = Cli::try_parse_from([
            "loan-eligibility-api",
            "check",
            "--name",
            "Asha Rao",
            "--age",
            "30",
            "--monthly-salary",
            "50000",
            "--existing-emi",
            "2000",
            "--loan-amount",
            "300000",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.name.as_deref(), Some("Asha Rao"));
                assert_eq!(args.existing_emi.as_deref(), Some("2000"));
                assert!(args.json);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn omitted_check_fields_default_to_blank() {
        let cli = Cli::try_parse_from(["loan-eligibility-api", "check", "--name", "Asha Rao"])
            .expect("arguments parse");

        match cli.command {
            Some(Command::Check(args)) => {
                assert!(args.age.is_none());
                assert!(args.loan_amount.is_none());
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn negative_amounts_reach_the_validator() {
        let cli = Cli::try_parse_from([
            "loan-eligibility-api",
            "check",
            "--existing-emi",
            "-500",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.existing_emi.as_deref(), Some("-500"));
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["loan-eligibility-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
