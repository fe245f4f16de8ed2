use chrono::{Local, NaiveDate};
use punchcard_engine::{early_threshold, late_threshold};
use punchcard_types::{EmployeeSummary, Error, ReportTotals, Result};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

const ID_HEADER: &str = "Employee ID";
const NAME_HEADER: &str = "First Name";
const LATE_HEADER: &str = "Total Late Punch";
const EARLY_HEADER: &str = "Total Early Punch";

/// Rendered attendance report: title, per-employee table, totals footer.
pub struct ReportDocument<'a> {
    summaries: &'a [EmployeeSummary],
    totals: &'a ReportTotals,
    start: NaiveDate,
    end: NaiveDate,
    generated_at: String,
}

impl<'a> ReportDocument<'a> {
    pub fn new(
        summaries: &'a [EmployeeSummary],
        totals: &'a ReportTotals,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            summaries,
            totals,
            start,
            end,
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

impl fmt::Display for ReportDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Attendance Report ({} to {})", self.start, self.end)?;
        writeln!(f, "Generated on: {}", self.generated_at)?;
        writeln!(f)?;

        let id_width = column_width(ID_HEADER, self.summaries.iter().map(|s| s.employee_id.as_str()));
        let name_width =
            column_width(NAME_HEADER, self.summaries.iter().map(|s| s.first_name.as_str()));
        let late_width = LATE_HEADER.chars().count();
        let early_width = EARLY_HEADER.chars().count();

        writeln!(
            f,
            "{:<id_width$}  {:<name_width$}  {:>late_width$}  {:>early_width$}",
            ID_HEADER, NAME_HEADER, LATE_HEADER, EARLY_HEADER
        )?;
        writeln!(
            f,
            "{}",
            "-".repeat(id_width + name_width + late_width + early_width + 6)
        )?;
        for summary in self.summaries {
            writeln!(
                f,
                "{:<id_width$}  {:<name_width$}  {:>late_width$}  {:>early_width$}",
                summary.employee_id, summary.first_name, summary.late_count, summary.early_count
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Summary Statistics")?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Total Employees:     {}", self.totals.employees)?;
        writeln!(f, "Total Late Punches:  {}", self.totals.late_punches)?;
        writeln!(f, "Total Early Punches: {}", self.totals.early_punches)?;
        writeln!(f)?;
        writeln!(
            f,
            "Note: Late punch is any clock-in after {}",
            late_threshold().format("%H:%M")
        )?;
        writeln!(
            f,
            "      Early punch is any clock-out before {}",
            early_threshold().format("%H:%M")
        )?;
        Ok(())
    }
}

/// Render the document and write it to `path`. A failed write may leave a
/// truncated file behind; the run aborts either way.
pub fn write_document(
    path: &Path,
    summaries: &[EmployeeSummary],
    totals: &ReportTotals,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<()> {
    let document = ReportDocument::new(summaries, totals, start, end);
    let mut file = fs::File::create(path).map_err(Error::Io)?;
    write!(file, "{}", document).map_err(Error::Io)?;
    Ok(())
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain([header.chars().count()])
        .max()
        .unwrap_or(0)
}
