//! Anomaly detection rules for timecard sequences.
//!
//! Three independent rules each take one complete pass over a shared,
//! read-only record sequence: consecutive working days, short breaks
//! between shifts, and long single shifts. Each rule owns its state (an
//! "already reported" set and, for short breaks, a per-employee last
//! clock-out map), so the rules may run in any order, or concurrently,
//! without coordination. No rule depends on another rule's output.

mod consecutive_days;
mod long_shift;
mod short_break;

pub use consecutive_days::{DEFAULT_CONSECUTIVE_DAYS_THRESHOLD, detect_consecutive_days};
pub use long_shift::{LONG_SHIFT_THRESHOLD_MINUTES, detect_long_shifts};
pub use short_break::{SHORT_BREAK_MAX_GAP_HOURS, SHORT_BREAK_MIN_GAP_HOURS, detect_short_breaks};

use tracing::debug;

use crate::config::DetectionConfig;
use crate::models::{Finding, TimecardEntry};

/// Runs all three detection rules over the record sequence.
///
/// Rules run in the fixed order consecutive days, short breaks, long
/// shifts; each rule's findings appear in discovery order. Callers relying
/// on output ordering get exactly that sequence.
///
/// The sequence is assumed to be pre-sorted by employee and date; the
/// engine relies on sequence adjacency and never verifies chronology.
/// Slice order is authoritative: the rules read adjacency from position
/// in `records`, not from each entry's `sequence_index`.
pub fn detect_anomalies(records: &[TimecardEntry], config: &DetectionConfig) -> Vec<Finding> {
    let mut findings = detect_consecutive_days(records, config.consecutive_days_threshold);
    debug!(count = findings.len(), "Consecutive-days scan complete");

    let short_breaks = detect_short_breaks(records);
    debug!(count = short_breaks.len(), "Short-break scan complete");
    findings.extend(short_breaks);

    let long_shifts = detect_long_shifts(records);
    debug!(count = long_shifts.len(), "Long-shift scan complete");
    findings.extend(long_shifts);

    findings
}
