pub mod report;
pub mod shell;

use crate::parsing::parse_date;
use chrono::NaiveDate;
use clap::Parser;

/// Command-line arguments for radclinic
#[derive(Parser, Debug)]
#[command(name = "radclinic")]
#[command(about = "Patient registration and procedure scheduling console for an imaging clinic")]
#[command(version)]
pub struct Cli {
    /// Treat this date (dd/MM/yyyy) as today instead of the system date
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["radclinic"]).unwrap();
        assert!(cli.as_of.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_as_of_date() {
        let cli = Cli::try_parse_from(["radclinic", "--as-of", "20/05/2024", "-v"]).unwrap();
        assert_eq!(cli.as_of, NaiveDate::from_ymd_opt(2024, 5, 20));
        assert!(cli.verbose);
    }

    #[test]
    fn test_as_of_rejects_bad_date() {
        assert!(Cli::try_parse_from(["radclinic", "--as-of", "2024-05-20"]).is_err());
    }
}
