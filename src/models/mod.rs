//! Core data models for the Timecard Anomaly Detection Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cell;
mod entry;
mod finding;

pub use cell::{CellValue, TIMESTAMP_PATTERN};
pub use entry::TimecardEntry;
pub use finding::{Finding, RuleKind};
