use serde::{Deserialize, Serialize};

/// Per-employee aggregate of late and early punches over the filtered
/// record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub employee_id: String,
    pub first_name: String,
    pub late_count: usize,
    pub early_count: usize,
}

impl EmployeeSummary {
    pub fn new(employee_id: String, first_name: String) -> Self {
        Self {
            employee_id,
            first_name,
            late_count: 0,
            early_count: 0,
        }
    }
}

/// Column sums across a summary slice, consumed by the report footer and
/// the console run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub employees: usize,
    pub late_punches: usize,
    pub early_punches: usize,
}

impl ReportTotals {
    pub fn from_summaries(summaries: &[EmployeeSummary]) -> Self {
        Self {
            employees: summaries.len(),
            late_punches: summaries.iter().map(|s| s.late_count).sum(),
            early_punches: summaries.iter().map(|s| s.early_count).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str, late: usize, early: usize) -> EmployeeSummary {
        EmployeeSummary {
            employee_id: id.to_string(),
            first_name: name.to_string(),
            late_count: late,
            early_count: early,
        }
    }

    #[test]
    fn test_totals_sum_both_count_columns() {
        let summaries = vec![summary("E1", "Alice", 2, 1), summary("E2", "Bob", 0, 3)];

        let totals = ReportTotals::from_summaries(&summaries);

        assert_eq!(totals.employees, 2);
        assert_eq!(totals.late_punches, 2);
        assert_eq!(totals.early_punches, 4);
    }

    #[test]
    fn test_totals_of_empty_slice_are_zero() {
        let totals = ReportTotals::from_summaries(&[]);

        assert_eq!(totals.employees, 0);
        assert_eq!(totals.late_punches, 0);
        assert_eq!(totals.early_punches, 0);
    }
}
