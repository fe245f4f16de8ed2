use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of raw attendance input, as read from the source table.
///
/// Clock fields carry the original cell text; the loader normalizes blank
/// or whitespace-only cells to `None`. A record that survives filtering has
/// at least one clock field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub first_name: String,
    pub date: NaiveDate,
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
}

impl AttendanceRecord {
    /// True when at least one clock cell held a value.
    pub fn has_punch(&self) -> bool {
        self.clock_in.is_some() || self.clock_out.is_some()
    }
}
