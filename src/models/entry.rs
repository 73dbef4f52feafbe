//! Timecard entry model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::cell::CellValue;

/// One row of the source timecard table, immutable once constructed.
///
/// The engine assumes entries are presented in the same relative order as
/// the source table and that adjacency in the sequence approximates
/// adjacency in time for an employee. It does not verify chronological
/// ordering or date contiguity; callers must pre-sort by employee and date.
///
/// Any field may be absent; absent fields simply fail to satisfy the rule
/// conditions that consult them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardEntry {
    /// Identifier of the role/position for the shift.
    pub position_id: Option<String>,
    /// Identifies the employee; the sole grouping key.
    pub employee_name: Option<String>,
    /// Raw clock-in cell.
    pub time_in: Option<CellValue>,
    /// Raw clock-out cell.
    pub time_out: Option<CellValue>,
    /// An `"H:MM"`-style duration token, parsed independently of the
    /// clock-in/clock-out cells.
    pub shift_duration: Option<String>,
    /// 0-based position in the supplied sequence; defines "adjacent" and
    /// "preceding" records only. The rules derive adjacency from slice
    /// position, which this field is assumed to agree with; it is carried
    /// for callers and serialization, never consulted during a scan.
    pub sequence_index: usize,
}

impl TimecardEntry {
    /// Resolves the clock-in cell to a timestamp.
    pub fn clock_in(&self) -> Option<NaiveDateTime> {
        self.time_in.as_ref().and_then(CellValue::as_timestamp)
    }

    /// Resolves the clock-out cell to a timestamp.
    pub fn clock_out(&self) -> Option<NaiveDateTime> {
        self.time_out.as_ref().and_then(CellValue::as_timestamp)
    }
}
