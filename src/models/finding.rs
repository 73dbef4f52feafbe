//! Anomaly finding model.

use serde::{Deserialize, Serialize};

/// The detection rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Employee worked the threshold number of consecutive days or more.
    ConsecutiveDays,
    /// Employee returned from a break strictly between 1 and 10 hours.
    ShortBreak,
    /// Employee worked a single shift longer than 14 hours.
    LongShift,
}

impl RuleKind {
    /// Human-readable section label used by the plain-text report.
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::ConsecutiveDays => "Excessive consecutive days",
            RuleKind::ShortBreak => "Short break between shifts",
            RuleKind::LongShift => "Long shift",
        }
    }
}

/// A single emitted anomaly for one employee under one rule.
///
/// Created the first time a rule detects a qualifying condition for an
/// employee and never mutated afterwards. No rule emits more than one
/// finding per employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The flagged employee's name.
    pub employee_name: String,
    /// The position identifier of the record that fired the rule; empty if
    /// that record carried no position.
    pub position_id: String,
    /// Which rule fired.
    pub rule: RuleKind,
}
