//! Long shift detection.
//!
//! Flags an employee the first time their recorded shift-duration token
//! decodes to more than 840 minutes (14 hours). The token is parsed
//! independently of the clock-in/clock-out cells.

use std::collections::HashSet;

use crate::models::{Finding, RuleKind, TimecardEntry};

/// Exclusive threshold on a single shift's length, in minutes (14 hours).
pub const LONG_SHIFT_THRESHOLD_MINUTES: i64 = 840;

/// Detects employees with a single shift longer than 14 hours.
///
/// Performs a single forward pass over all records, including the first.
/// For each unreported employee, the duration token is decoded as
/// `hours:minutes` and a total strictly above
/// [`LONG_SHIFT_THRESHOLD_MINUTES`] emits one [`Finding`]. At most one
/// finding is emitted per employee.
///
/// A token that is absent, malformed, or has fewer than two components is
/// silently skipped for that record; the employee may still be flagged by
/// a later, well-formed record.
pub fn detect_long_shifts(records: &[TimecardEntry]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut reported: HashSet<String> = HashSet::new();

    for record in records {
        let Some(name) = record.employee_name.as_deref() else {
            continue;
        };
        if reported.contains(name) {
            continue;
        }

        let Some(total_minutes) = record.shift_duration.as_deref().and_then(duration_minutes)
        else {
            continue;
        };

        if total_minutes > LONG_SHIFT_THRESHOLD_MINUTES {
            findings.push(Finding {
                employee_name: name.to_string(),
                position_id: record.position_id.clone().unwrap_or_default(),
                rule: RuleKind::LongShift,
            });
            reported.insert(name.to_string());
        }
    }

    findings
}

/// Decodes an `"H:MM"`-style token to total minutes.
///
/// The first two colon-delimited components are parsed as integers; any
/// further components are ignored. Returns `None` when a component is
/// missing or non-numeric, or when the total overflows.
fn duration_minutes(token: &str) -> Option<i64> {
    let mut components = token.split(':');
    let hours: i64 = components.next()?.parse().ok()?;
    let minutes: i64 = components.next()?.parse().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}
