//! HTTP request handlers for the Timecard Anomaly Detection Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::DetectionConfig;
use crate::detection::detect_anomalies;
use crate::models::TimecardEntry;

use super::request::AnalysisRequest;
use super::response::{AnalysisResponse, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}

/// Handler for POST /analyze endpoint.
///
/// Accepts an ordered record sequence and returns the anomalies found.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the effective configuration, applying any per-request
    // threshold override.
    let mut config: DetectionConfig = state.config().config().clone();
    if let Some(threshold) = request.consecutive_days_threshold {
        config.consecutive_days_threshold = threshold;
    }
    if let Err(err) = config.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Rejected analysis configuration"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Convert request records to domain entries, assigning sequence indices
    // from their position in the request.
    let records: Vec<TimecardEntry> = request
        .records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_entry(index))
        .collect();

    // Perform the scan
    let start_time = Instant::now();
    let findings = detect_anomalies(&records, &config);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        record_count = records.len(),
        finding_count = findings.len(),
        duration_us = duration.as_micros(),
        "Analysis completed successfully"
    );

    let response = AnalysisResponse {
        analysis_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        record_count: records.len(),
        findings,
        duration_us: duration.as_micros() as u64,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
