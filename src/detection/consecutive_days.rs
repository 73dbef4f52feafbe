//! Consecutive working days detection.
//!
//! Flags an employee the first time they appear in the threshold number of
//! sequence-adjacent records or more. Adjacency in the sequence stands in
//! for adjacency in time; the rule never consults calendar dates.

use std::collections::HashSet;

use crate::models::{Finding, RuleKind, TimecardEntry};

/// Default minimum run length that triggers a finding.
pub const DEFAULT_CONSECUTIVE_DAYS_THRESHOLD: u32 = 7;

/// Detects employees appearing in `threshold` or more adjacent records.
///
/// Walks the sequence from the second record to the second-to-last record.
/// At each position whose employee name matches the preceding record's, the
/// run ending there is measured by counting backward until the first
/// mismatch; a run of at least `threshold` emits one [`Finding`] carrying
/// the position of the record that completed the run. At most one finding
/// is emitted per employee.
///
/// The final record is never evaluated as a run terminus; a run that only
/// reaches the threshold at the last record does not fire. Records with an
/// absent employee name never match on either side of a comparison, so
/// they both fail to fire and break any surrounding run.
///
/// # Example
///
/// ```
/// use timecard_engine::detection::detect_consecutive_days;
/// use timecard_engine::models::TimecardEntry;
///
/// let records: Vec<TimecardEntry> = (0..8)
///     .map(|i| TimecardEntry {
///         position_id: Some("POS001".to_string()),
///         employee_name: Some("Alice".to_string()),
///         time_in: None,
///         time_out: None,
///         shift_duration: None,
///         sequence_index: i,
///     })
///     .collect();
///
/// let findings = detect_consecutive_days(&records, 7);
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].employee_name, "Alice");
/// ```
pub fn detect_consecutive_days(records: &[TimecardEntry], threshold: u32) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut reported: HashSet<String> = HashSet::new();

    // The last index is excluded: it is never a run terminus.
    for index in 1..records.len().saturating_sub(1) {
        let Some(name) = records[index].employee_name.as_deref() else {
            continue;
        };
        if reported.contains(name) {
            continue;
        }
        if records[index - 1].employee_name.as_deref() != Some(name) {
            continue;
        }

        // Count the run ending at `index`: the current record plus every
        // preceding adjacent record with the same name.
        let mut run_length: u32 = 1;
        for previous in records[..index].iter().rev() {
            if previous.employee_name.as_deref() == Some(name) {
                run_length += 1;
            } else {
                break;
            }
        }

        if run_length >= threshold {
            findings.push(Finding {
                employee_name: name.to_string(),
                position_id: records[index].position_id.clone().unwrap_or_default(),
                rule: RuleKind::ConsecutiveDays,
            });
            reported.insert(name.to_string());
        }
    }

    findings
}
