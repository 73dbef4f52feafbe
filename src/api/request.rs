//! Request types for the Timecard Anomaly Detection Engine API.
//!
//! This module defines the JSON request structures for the `/analyze`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{CellValue, TimecardEntry};

/// Request body for the `/analyze` endpoint.
///
/// Carries the ordered record sequence and an optional override for the
/// consecutive-days threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The ordered timecard records, pre-sorted by employee and date.
    pub records: Vec<TimecardEntryRequest>,
    /// Overrides the configured consecutive-days threshold when present.
    #[serde(default)]
    pub consecutive_days_threshold: Option<u32>,
}

/// One timecard record in an analysis request.
///
/// Every field is optional; the sequence index is assigned from the
/// record's position in the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimecardEntryRequest {
    /// Identifier of the role/position for the shift.
    #[serde(default)]
    pub position_id: Option<String>,
    /// The employee's name.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// Raw clock-in cell: an ISO date-time or free text.
    #[serde(default)]
    pub time_in: Option<CellValue>,
    /// Raw clock-out cell: an ISO date-time or free text.
    #[serde(default)]
    pub time_out: Option<CellValue>,
    /// An `"H:MM"`-style duration token.
    #[serde(default)]
    pub shift_duration: Option<String>,
}

impl TimecardEntryRequest {
    /// Converts the request record to a domain entry at the given sequence
    /// position.
    pub fn into_entry(self, sequence_index: usize) -> TimecardEntry {
        TimecardEntry {
            position_id: self.position_id,
            employee_name: self.employee_name,
            time_in: self.time_in,
            time_out: self.time_out,
            shift_duration: self.shift_duration,
            sequence_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_analysis_request() {
        let json = r#"{
            "records": [
                {
                    "position_id": "POS001",
                    "employee_name": "Alice",
                    "time_in": "2026-01-13T09:00:00",
                    "time_out": "2026-01-13T17:00:00",
                    "shift_duration": "8:00"
                }
            ]
        }"#;

        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records.len(), 1);
        assert_eq!(request.consecutive_days_threshold, None);
        assert_eq!(
            request.records[0].employee_name.as_deref(),
            Some("Alice")
        );
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let request: AnalysisRequest =
            serde_json::from_str(r#"{"records": [{}], "consecutive_days_threshold": 5}"#).unwrap();
        assert_eq!(request.consecutive_days_threshold, Some(5));
        assert!(request.records[0].employee_name.is_none());
        assert!(request.records[0].time_in.is_none());
    }

    #[test]
    fn test_into_entry_assigns_sequence_index() {
        let record = TimecardEntryRequest {
            position_id: Some("POS001".to_string()),
            employee_name: Some("Alice".to_string()),
            time_in: None,
            time_out: None,
            shift_duration: None,
        };

        let entry = record.into_entry(3);
        assert_eq!(entry.sequence_index, 3);
        assert_eq!(entry.employee_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_free_text_cells_survive_conversion() {
        let json = r#"{"records": [{"time_in": "01/13/2026 09:00 AM"}]}"#;
        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        let entry = request.records.into_iter().next().unwrap().into_entry(0);
        assert!(entry.clock_in().is_some());
    }
}
