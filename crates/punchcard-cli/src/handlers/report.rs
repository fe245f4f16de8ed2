use crate::args::OutputFormat;
use crate::presentation::console::RunSummary;
use crate::presentation::report;
use anyhow::Result;
use chrono::NaiveDate;
use punchcard_engine::{load_and_filter, summarize};
use punchcard_types::{Error, ReportTotals};
use std::path::{Path, PathBuf};

pub fn handle(
    input: &Path,
    start: NaiveDate,
    end: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("input file '{}' does not exist", input.display());
    }

    let plain = format == OutputFormat::Plain;
    if plain {
        println!("Processing attendance data from {} to {}...", start, end);
    }

    let records = load_and_filter(input, start, end)?;
    if records.is_empty() {
        return Err(Error::EmptyResult(format!(
            "no attendance records between {} and {}",
            start, end
        ))
        .into());
    }
    if plain {
        println!(
            "Found {} attendance records in the date range.",
            records.len()
        );
    }

    let summaries = summarize(&records);
    if summaries.is_empty() {
        return Err(Error::EmptyResult("no employees left after aggregation".to_string()).into());
    }
    if plain {
        println!("Processed data for {} employees.", summaries.len());
    }

    let totals = ReportTotals::from_summaries(&summaries);
    let report_path = PathBuf::from(format!("attendance_report_{}_to_{}.txt", start, end));
    report::write_document(&report_path, &summaries, &totals, start, end)?;

    let run = RunSummary::new(&totals, report_path);
    match format {
        OutputFormat::Plain => run.print_plain(),
        OutputFormat::Json => println!("{}", serde_json::to_string(&run)?),
    }

    Ok(())
}
