use chrono::NaiveDate;
use punchcard_types::{AttendanceRecord, Error, Result};
use std::fs::File;
use std::path::Path;

/// Header columns the input table must carry. Extra columns are ignored and
/// column order is irrelevant.
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["Employee ID", "First Name", "Date", "Clock In", "Clock Out"];

/// Accepted date column formats, tried in order. Slash-ambiguous values are
/// read month-first.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

struct ColumnIndex {
    employee_id: usize,
    first_name: usize,
    date: usize,
    clock_in: usize,
    clock_out: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !headers.iter().any(|h| h == *name))
            .collect();
        if !missing.is_empty() {
            return Err(Error::Data(format!(
                "missing required columns: {}",
                missing.join(", ")
            )));
        }

        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::Data(format!("missing required column: {}", name)))
        };

        Ok(Self {
            employee_id: position("Employee ID")?,
            first_name: position("First Name")?,
            date: position("Date")?,
            clock_in: position("Clock In")?,
            clock_out: position("Clock Out")?,
        })
    }
}

/// Read the attendance table at `path` and return the rows dated within the
/// inclusive `[start, end]` window that carry at least one clock value.
///
/// Rows whose date cell is blank cannot be placed in the window and are
/// skipped; a non-blank date that matches no accepted format is a data
/// error, fatal to the run - there is no partial recovery.
pub fn load_and_filter(path: &Path, start: NaiveDate, end: NaiveDate) -> Result<Vec<AttendanceRecord>> {
    let file = File::open(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| Error::Data(format!("unreadable header row: {}", e)))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let line = row + 2; // line 1 is the header
        let raw = result.map_err(|e| Error::Data(format!("line {}: {}", line, e)))?;

        let date_cell = raw.get(columns.date).unwrap_or("");
        if date_cell.is_empty() {
            continue;
        }
        let date = parse_date(date_cell).ok_or_else(|| {
            Error::Data(format!("line {}: unparseable date '{}'", line, date_cell))
        })?;

        if date < start || date > end {
            continue;
        }

        let record = AttendanceRecord {
            employee_id: raw.get(columns.employee_id).unwrap_or("").to_string(),
            first_name: raw.get(columns.first_name).unwrap_or("").to_string(),
            date,
            clock_in: clean(raw.get(columns.clock_in)),
            clock_out: clean(raw.get(columns.clock_out)),
        };
        if !record.has_punch() {
            continue;
        }
        records.push(record);
    }

    Ok(records)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn clean(cell: Option<&str>) -> Option<String> {
    match cell {
        Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}
