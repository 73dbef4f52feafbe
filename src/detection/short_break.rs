//! Short break detection.
//!
//! Flags an employee the first time the gap between their most recent
//! recorded clock-out and a later clock-in falls strictly between 1 and
//! 10 whole hours. Only gaps between strictly consecutive records for an
//! employee count: the stored clock-out is overwritten on every record,
//! so a clock-out two records back is never compared against a later
//! clock-in.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;

use crate::models::{Finding, RuleKind, TimecardEntry};

/// Exclusive lower bound on the break gap, in whole hours.
pub const SHORT_BREAK_MIN_GAP_HOURS: i64 = 1;

/// Exclusive upper bound on the break gap, in whole hours.
pub const SHORT_BREAK_MAX_GAP_HOURS: i64 = 10;

/// Detects employees returning from an unusually short break.
///
/// Performs a single forward pass, maintaining a per-employee "last seen
/// clock-out" map. For each record of an unreported employee with a stored
/// clock-out, the gap to the record's clock-in is computed in whole hours
/// (truncated toward zero); a gap strictly inside
/// ([`SHORT_BREAK_MIN_GAP_HOURS`], [`SHORT_BREAK_MAX_GAP_HOURS`]) emits one
/// [`Finding`]. At most one finding is emitted per employee.
///
/// The stored clock-out is overwritten with the current record's clock-out
/// regardless of whether a finding fired; an absent or unparseable
/// clock-out clears the stored value. Absent or unparseable timestamps
/// disable the comparison for that record without aborting the pass.
pub fn detect_short_breaks(records: &[TimecardEntry]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut reported: HashSet<String> = HashSet::new();
    let mut last_clock_out: HashMap<String, Option<NaiveDateTime>> = HashMap::new();

    for record in records {
        let Some(name) = record.employee_name.as_deref() else {
            continue;
        };

        if !reported.contains(name) {
            if let Some(Some(clock_out)) = last_clock_out.get(name) {
                if let Some(clock_in) = record.clock_in() {
                    let gap_hours = (clock_in - *clock_out).num_hours();
                    if gap_hours > SHORT_BREAK_MIN_GAP_HOURS && gap_hours < SHORT_BREAK_MAX_GAP_HOURS
                    {
                        findings.push(Finding {
                            employee_name: name.to_string(),
                            position_id: record.position_id.clone().unwrap_or_default(),
                            rule: RuleKind::ShortBreak,
                        });
                        reported.insert(name.to_string());
                    }
                }
            }
        }

        last_clock_out.insert(name.to_string(), record.clock_out());
    }

    findings
}
