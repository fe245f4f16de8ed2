use owo_colors::OwoColorize;
use punchcard_types::ReportTotals;
use serde::Serialize;
use std::path::PathBuf;

/// Final run summary printed after the report document is written. The
/// JSON shape is the `--format json` contract.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub employees: usize,
    pub late_punches: usize,
    pub early_punches: usize,
    pub report: PathBuf,
}

impl RunSummary {
    pub fn new(totals: &ReportTotals, report: PathBuf) -> Self {
        Self {
            employees: totals.employees,
            late_punches: totals.late_punches,
            early_punches: totals.early_punches,
            report,
        }
    }

    pub fn print_plain(&self) {
        println!();
        println!("{}", "REPORT SUMMARY".bold());
        println!("{}", "=".repeat(60));
        println!("Total Employees:      {}", self.employees);
        println!("Total Late Punches:   {}", self.late_punches);
        println!("Total Early Punches:  {}", self.early_punches);
        println!(
            "Report written to {}",
            self.report.display().to_string().bright_black()
        );
    }
}
