//! Comprehensive integration tests for the Timecard Anomaly Detection Engine.
//!
//! This test suite covers:
//! - End-to-end scans through the HTTP router
//! - The worked examples from the rule contracts (consecutive days,
//!   short break, long shift)
//! - Malformed-record resilience
//! - Report rendering
//! - Property tests: at most one finding per employee per rule, and
//!   rule-order independence

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDateTime;
use serde_json::{Value, json};
use tower::ServiceExt;

use timecard_engine::api::{AnalysisResponse, AppState, create_router};
use timecard_engine::config::{ConfigLoader, DetectionConfig};
use timecard_engine::detection::{
    detect_anomalies, detect_consecutive_days, detect_long_shifts, detect_short_breaks,
};
use timecard_engine::models::{CellValue, Finding, RuleKind, TimecardEntry};
use timecard_engine::report::render_report;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(ConfigLoader::default()))
}

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn entry(name: Option<&str>, position: &str, index: usize) -> TimecardEntry {
    TimecardEntry {
        position_id: Some(position.to_string()),
        employee_name: name.map(str::to_string),
        time_in: None,
        time_out: None,
        shift_duration: None,
        sequence_index: index,
    }
}

fn reindex(records: &mut [TimecardEntry]) {
    for (index, record) in records.iter_mut().enumerate() {
        record.sequence_index = index;
    }
}

async fn post_analyze(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn finding_set(findings: &[Finding]) -> std::collections::HashSet<(String, RuleKind)> {
    findings
        .iter()
        .map(|f| (f.employee_name.clone(), f.rule))
        .collect()
}

// =============================================================================
// Worked examples from the rule contracts
// =============================================================================

#[tokio::test]
async fn test_alice_seven_consecutive_records_flagged_once() {
    let mut records: Vec<Value> = (0..7)
        .map(|i| json!({"position_id": format!("POS{:03}", i), "employee_name": "Alice"}))
        .collect();
    // Trailing record: the last row can never complete a run.
    records.push(json!({"position_id": "POS007", "employee_name": "Zoe"}));

    let (status, value) = post_analyze(create_router_for_test(), json!({ "records": records })).await;
    assert_eq!(status, StatusCode::OK);

    let result: AnalysisResponse = serde_json::from_value(value).unwrap();
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].employee_name, "Alice");
    assert_eq!(result.findings[0].rule, RuleKind::ConsecutiveDays);
    assert_eq!(result.findings[0].position_id, "POS006");
}

#[tokio::test]
async fn test_bob_six_hour_gap_flagged_as_short_break() {
    let records = json!([
        {
            "position_id": "POS001",
            "employee_name": "Bob",
            "time_out": "01/13/2026 09:00 AM"
        },
        {
            "position_id": "POS002",
            "employee_name": "Bob",
            "time_in": "01/13/2026 03:00 PM"
        }
    ]);

    let (status, value) =
        post_analyze(create_router_for_test(), json!({ "records": records })).await;
    assert_eq!(status, StatusCode::OK);

    let result: AnalysisResponse = serde_json::from_value(value).unwrap();
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].employee_name, "Bob");
    assert_eq!(result.findings[0].rule, RuleKind::ShortBreak);
}

#[tokio::test]
async fn test_fifteen_thirty_duration_flagged_as_long_shift() {
    let records = json!([
        {"position_id": "POS001", "employee_name": "Carol", "shift_duration": "15:30"}
    ]);

    let (status, value) =
        post_analyze(create_router_for_test(), json!({ "records": records })).await;
    assert_eq!(status, StatusCode::OK);

    let result: AnalysisResponse = serde_json::from_value(value).unwrap();
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].rule, RuleKind::LongShift);
}

#[tokio::test]
async fn test_boundary_durations_through_api() {
    let records = json!([
        {"position_id": "POS001", "employee_name": "Alice", "shift_duration": "14:00"},
        {"position_id": "POS002", "employee_name": "Bob", "shift_duration": "14:01"}
    ]);

    let (_, value) = post_analyze(create_router_for_test(), json!({ "records": records })).await;
    let result: AnalysisResponse = serde_json::from_value(value).unwrap();

    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].employee_name, "Bob");
}

#[tokio::test]
async fn test_mixed_sequence_reports_rules_in_fixed_order() {
    let mut records: Vec<Value> = (0..7)
        .map(|i| json!({"position_id": format!("POS{:03}", i), "employee_name": "Alice"}))
        .collect();
    records.push(json!({
        "position_id": "POS007",
        "employee_name": "Bob",
        "time_out": "2026-01-13T09:00:00"
    }));
    records.push(json!({
        "position_id": "POS008",
        "employee_name": "Bob",
        "time_in": "2026-01-13T15:00:00"
    }));
    records.push(json!({
        "position_id": "POS009",
        "employee_name": "Carol",
        "shift_duration": "16:00"
    }));

    let (_, value) = post_analyze(create_router_for_test(), json!({ "records": records })).await;
    let result: AnalysisResponse = serde_json::from_value(value).unwrap();

    let rules: Vec<RuleKind> = result.findings.iter().map(|f| f.rule).collect();
    assert_eq!(
        rules,
        vec![
            RuleKind::ConsecutiveDays,
            RuleKind::ShortBreak,
            RuleKind::LongShift
        ]
    );
}

// =============================================================================
// Malformed-record resilience
// =============================================================================

#[test]
fn test_malformed_records_do_not_affect_other_employees() {
    // Well-formed part: Dave trips the long-shift rule, Erin trips the
    // short-break rule.
    let well_formed = |start: usize| -> Vec<TimecardEntry> {
        vec![
            TimecardEntry {
                shift_duration: Some("15:00".to_string()),
                ..entry(Some("Dave"), "POS010", start)
            },
            TimecardEntry {
                time_out: Some(CellValue::DateTime(ts("2026-01-13 09:00:00"))),
                ..entry(Some("Erin"), "POS011", start + 1)
            },
            TimecardEntry {
                time_in: Some(CellValue::DateTime(ts("2026-01-13 14:00:00"))),
                ..entry(Some("Erin"), "POS012", start + 2)
            },
            entry(Some("Frank"), "POS013", start + 3),
        ]
    };

    let malformed = vec![
        entry(None, "POS001", 0),
        TimecardEntry {
            time_in: Some(CellValue::Text("not a timestamp".to_string())),
            ..entry(Some("Grace"), "POS002", 1)
        },
        TimecardEntry {
            shift_duration: Some("bad".to_string()),
            ..entry(Some("Heidi"), "POS003", 2)
        },
    ];

    let mut with_malformed = malformed;
    with_malformed.extend(well_formed(3));
    reindex(&mut with_malformed);

    let clean = well_formed(0);
    let config = DetectionConfig::default();

    assert_eq!(
        finding_set(&detect_anomalies(&with_malformed, &config)),
        finding_set(&detect_anomalies(&clean, &config))
    );
}

#[tokio::test]
async fn test_sparse_records_scan_cleanly_through_api() {
    let records = json!([
        {},
        {"employee_name": "Alice", "time_in": "garbage"},
        {"employee_name": "Bob", "shift_duration": "bad"},
        {"employee_name": "Dave", "shift_duration": "9223372036854775807:00"},
        {"employee_name": "Carol", "shift_duration": "15:30"}
    ]);

    let (status, value) =
        post_analyze(create_router_for_test(), json!({ "records": records })).await;
    assert_eq!(status, StatusCode::OK);

    let result: AnalysisResponse = serde_json::from_value(value).unwrap();
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].employee_name, "Carol");
}

// =============================================================================
// Report rendering
// =============================================================================

#[test]
fn test_report_renders_findings_under_labeled_sections() {
    let mut records: Vec<TimecardEntry> =
        (0..7).map(|i| entry(Some("Alice"), "POS001", i)).collect();
    records.push(TimecardEntry {
        shift_duration: Some("15:30".to_string()),
        ..entry(Some("Carol"), "POS009", 7)
    });
    records.push(entry(Some("Zoe"), "POS010", 8));

    let findings = detect_anomalies(&records, &DetectionConfig::default());
    let report = render_report(&findings);

    assert!(report.contains("Excessive consecutive days:"));
    assert!(report.contains("Employee: Alice, Position: POS001"));
    assert!(report.contains("Long shift:"));
    assert!(report.contains("Employee: Carol, Position: POS009"));
}

// =============================================================================
// Property tests
// =============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_record() -> impl Strategy<Value = TimecardEntry> {
        let name = proptest::option::of(prop::sample::select(vec![
            "Alice", "Bob", "Carol", "Dave",
        ]));
        let clock = proptest::option::of(0i64..48);
        let duration = proptest::option::of(prop::sample::select(vec![
            "8:00", "14:00", "14:01", "15:30", "bad", "15",
        ]));

        (name, clock.clone(), clock, duration).prop_map(|(name, in_h, out_h, duration)| {
            let base = ts("2026-01-01 00:00:00");
            TimecardEntry {
                position_id: Some("POS001".to_string()),
                employee_name: name.map(str::to_string),
                time_in: in_h.map(|h| CellValue::DateTime(base + chrono::Duration::hours(h))),
                time_out: out_h.map(|h| CellValue::DateTime(base + chrono::Duration::hours(h))),
                shift_duration: duration.map(str::to_string),
                sequence_index: 0,
            }
        })
    }

    fn arb_records() -> impl Strategy<Value = Vec<TimecardEntry>> {
        prop::collection::vec(arb_record(), 0..40).prop_map(|mut records| {
            reindex(&mut records);
            records
        })
    }

    proptest! {
        #[test]
        fn prop_at_most_one_finding_per_employee_per_rule(records in arb_records()) {
            let findings = detect_anomalies(&records, &DetectionConfig::default());
            let mut seen = std::collections::HashSet::new();
            for finding in &findings {
                prop_assert!(
                    seen.insert((finding.employee_name.clone(), finding.rule)),
                    "duplicate finding for {} under {:?}",
                    finding.employee_name,
                    finding.rule
                );
            }
        }

        #[test]
        fn prop_rule_order_does_not_change_the_finding_set(records in arb_records()) {
            let config = DetectionConfig::default();
            let combined = detect_anomalies(&records, &config);

            let mut reversed = detect_long_shifts(&records);
            reversed.extend(detect_short_breaks(&records));
            reversed.extend(detect_consecutive_days(
                &records,
                config.consecutive_days_threshold,
            ));

            prop_assert_eq!(finding_set(&combined), finding_set(&reversed));
        }

        #[test]
        fn prop_nameless_records_never_produce_findings(records in arb_records()) {
            let nameless: Vec<TimecardEntry> = records
                .into_iter()
                .map(|r| TimecardEntry { employee_name: None, ..r })
                .collect();
            let findings = detect_anomalies(&nameless, &DetectionConfig::default());
            prop_assert!(findings.is_empty());
        }
    }
}
