//! HTTP API module for the Timecard Anomaly Detection Engine.
//!
//! This module provides the REST endpoint for scanning a timecard sequence
//! and returning the anomalies found.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalysisRequest, TimecardEntryRequest};
pub use response::{AnalysisResponse, ApiError};
pub use state::AppState;
