//! Raw cell values and the timestamp parsing policy.
//!
//! Timecard tables carry clock-in/clock-out cells either as free text or as
//! native date/time values. The engine resolves both through [`CellValue`];
//! anything that cannot be resolved becomes "no timestamp" rather than an
//! error, so one bad cell never aborts a scan.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The fixed pattern free-text timestamp cells are parsed against:
/// month/day/year 12-hour clock with an AM/PM marker.
pub const TIMESTAMP_PATTERN: &str = "%m/%d/%Y %I:%M %p";

/// A raw timestamp-bearing cell from the source table.
///
/// The untagged serde representation lets JSON clients send either an ISO
/// date-time (`"2026-01-13T09:00:00"`) or the table's free-text form
/// (`"01/13/2026 09:00 AM"`).
///
/// # Example
///
/// ```
/// use timecard_engine::models::CellValue;
///
/// let cell = CellValue::Text("01/13/2026 09:00 AM".to_string());
/// let ts = cell.as_timestamp().unwrap();
/// assert_eq!(ts.to_string(), "2026-01-13 09:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A native date/time value.
    DateTime(NaiveDateTime),
    /// Free text, parsed against [`TIMESTAMP_PATTERN`] on demand.
    Text(String),
}

impl CellValue {
    /// Resolves the cell to a timestamp, if possible.
    ///
    /// Native values pass through. Text is trimmed and parsed against
    /// [`TIMESTAMP_PATTERN`]; empty or unparseable text resolves to `None`.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(ts) => Some(*ts),
            CellValue::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_PATTERN).ok()
            }
        }
    }
}
