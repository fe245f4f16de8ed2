use crate::classify::{is_early, is_late, parse_clock};
use punchcard_types::{AttendanceRecord, EmployeeSummary};
use std::collections::HashMap;

/// Group filtered records by (employee id, first name) and count late and
/// early punches per group.
///
/// Output keeps the first-appearance order of each pair, so report rows
/// follow the source file. Total given any input; malformed clock text
/// simply contributes to neither count.
pub fn summarize(records: &[AttendanceRecord]) -> Vec<EmployeeSummary> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut summaries: Vec<EmployeeSummary> = Vec::new();

    for record in records {
        let key = (record.employee_id.clone(), record.first_name.clone());
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                summaries.push(EmployeeSummary::new(
                    record.employee_id.clone(),
                    record.first_name.clone(),
                ));
                index.insert(key, summaries.len() - 1);
                summaries.len() - 1
            }
        };

        let clock_in = record.clock_in.as_deref().and_then(parse_clock);
        let clock_out = record.clock_out.as_deref().and_then(parse_clock);

        if is_late(clock_in) {
            summaries[slot].late_count += 1;
        }
        if is_early(clock_out) {
            summaries[slot].early_count += 1;
        }
    }

    summaries
}
