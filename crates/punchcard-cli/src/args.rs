use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "punchcard")]
#[command(about = "Generate attendance reports from biometric punch data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the CSV file containing attendance data
    pub input: PathBuf,

    /// Start date of the report window (YYYY-MM-DD, inclusive)
    #[arg(value_parser = parse_report_date)]
    pub start_date: NaiveDate,

    /// End date of the report window (YYYY-MM-DD, inclusive)
    #[arg(value_parser = parse_report_date)]
    pub end_date: NaiveDate,

    /// Run summary rendering
    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

fn parse_report_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| String::from("Dates must be in YYYY-MM-DD format"))
}
