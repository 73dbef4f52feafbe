//! Plain-text rendering of findings.
//!
//! Renders one labeled section per rule, in rule order, with one
//! `Employee: <name>, Position: <positionId>` line per finding. Sections
//! are printed even when empty so a report always has the same shape.

use crate::models::{Finding, RuleKind};

/// Renders findings as a plain-text report.
///
/// Findings keep their discovery order within each section.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{Finding, RuleKind};
/// use timecard_engine::report::render_report;
///
/// let findings = vec![Finding {
///     employee_name: "Alice".to_string(),
///     position_id: "POS001".to_string(),
///     rule: RuleKind::LongShift,
/// }];
/// let report = render_report(&findings);
/// assert!(report.contains("Employee: Alice, Position: POS001"));
/// ```
pub fn render_report(findings: &[Finding]) -> String {
    let mut out = String::new();
    for rule in [
        RuleKind::ConsecutiveDays,
        RuleKind::ShortBreak,
        RuleKind::LongShift,
    ] {
        out.push_str(rule.label());
        out.push_str(":\n");
        for finding in findings.iter().filter(|f| f.rule == rule) {
            out.push_str(&format!(
                "Employee: {}, Position: {}\n",
                finding.employee_name, finding.position_id
            ));
        }
    }
    out
}
