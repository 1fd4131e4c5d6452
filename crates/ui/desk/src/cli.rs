// src/cli.rs
use clap::{Args, Parser, Subcommand, ValueEnum};
use feedback_form::Department;

use crate::config::is_valid_rate;

#[derive(Parser, Debug)]
#[command(
    name = "feedback-desk",
    version,
    about = "Company feedback form for the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Run the interactive feedback page
    Run(RunArgs),
    /// Submit one entry without the TUI (scripts)
    Submit(SubmitArgs),
    /// List department codes and labels
    Departments,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Tick rate, i.e. number of ticks per second (overrides config)
    #[arg(short, long, value_name = "FLOAT", value_parser = parse_rate)]
    pub tick_rate: Option<f64>,

    /// Frame rate, i.e. number of frames per second (overrides config)
    #[arg(short, long, value_name = "FLOAT", value_parser = parse_rate)]
    pub frame_rate: Option<f64>,

    /// Clear a field's error as soon as it is edited
    #[arg(long)]
    pub clear_errors_on_edit: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, value_enum)]
    pub department: Option<DepartmentArg>,

    #[arg(long, default_value = "")]
    pub feedback: String,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    /// Print the accepted entry (or the field errors) as JSON
    #[arg(long)]
    pub json: bool,
}

/// Department codes as accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DepartmentArg {
    #[value(name = "HR")]
    Hr,
    #[value(name = "IT")]
    It,
    #[value(name = "Marketing")]
    Marketing,
    #[value(name = "Finance")]
    Finance,
    #[value(name = "Operations")]
    Operations,
    #[value(name = "Sales")]
    Sales,
    #[value(name = "Support")]
    Support,
}

impl From<DepartmentArg> for Department {
    fn from(arg: DepartmentArg) -> Self {
        match arg {
            DepartmentArg::Hr => Department::HR,
            DepartmentArg::It => Department::IT,
            DepartmentArg::Marketing => Department::Marketing,
            DepartmentArg::Finance => Department::Finance,
            DepartmentArg::Operations => Department::Operations,
            DepartmentArg::Sales => Department::Sales,
            DepartmentArg::Support => Department::Support,
        }
    }
}

/// Events per second; must be a finite number above zero.
fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if is_valid_rate(rate) {
        Ok(rate)
    } else {
        Err(format!("`{s}` is not a positive number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submit_arguments() {
        let cli = Cli::try_parse_from([
            "feedback-desk",
            "submit",
            "--name",
            "Alice",
            "--department",
            "IT",
            "--feedback",
            "Great tools",
            "--rating",
            "5",
            "--json",
        ])
        .unwrap();
        let Cmd::Submit(args) = cli.cmd else {
            panic!("expected submit");
        };
        assert_eq!(args.name, "Alice");
        assert_eq!(args.department.map(Department::from), Some(Department::IT));
        assert_eq!(args.rating, Some(5));
        assert!(args.json);
    }

    #[test]
    fn rating_out_of_range_is_rejected_by_parser() {
        let res = Cli::try_parse_from(["feedback-desk", "submit", "--rating", "6"]);
        assert!(res.is_err());
    }

    #[test]
    fn run_overrides_are_optional() {
        let cli = Cli::try_parse_from(["feedback-desk", "run", "--tick-rate", "2"]).unwrap();
        let Cmd::Run(args) = cli.cmd else {
            panic!("expected run");
        };
        assert_eq!(args.tick_rate, Some(2.0));
        assert_eq!(args.frame_rate, None);
        assert!(!args.clear_errors_on_edit);
    }

    #[test]
    fn rates_must_be_positive_and_finite() {
        for bad in ["0", "-1", "inf", "NaN", "fast"] {
            assert!(
                Cli::try_parse_from(["feedback-desk", "run", "--tick-rate", bad]).is_err(),
                "tick rate {bad} accepted"
            );
            assert!(
                Cli::try_parse_from(["feedback-desk", "run", "--frame-rate", bad]).is_err(),
                "frame rate {bad} accepted"
            );
        }
        assert!(Cli::try_parse_from(["feedback-desk", "run", "--frame-rate", "0.5"]).is_ok());
    }
}
