//! Timecard Anomaly Detection Engine
//!
//! This crate scans an ordered sequence of employee timecard entries and
//! flags three categories of scheduling anomaly: employees working too many
//! consecutive days, employees returning from an unusually short break, and
//! employees working an excessively long single shift.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod detection;
pub mod error;
pub mod models;
pub mod report;
