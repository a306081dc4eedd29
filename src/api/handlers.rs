//! HTTP request handlers for the Holiday Query Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;

use super::request::PaydayQuery;
use super::response::{ApiErrorResponse, ApiResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/holidays/remaining-holiday", get(remaining_holiday_handler))
        .route("/holidays/latest-holiday", get(latest_holiday_handler))
        .route("/holidays/latest-weekend", get(latest_weekend_handler))
        .route("/holidays/latest-payday", get(latest_payday_handler))
        .with_state(state)
}

/// Handler for GET /holidays/remaining-holiday.
///
/// Returns every holiday left in the current year with the total day count.
async fn remaining_holiday_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = state.today();
    info!(correlation_id = %correlation_id, %today, "Processing remaining holiday request");

    let start_time = Instant::now();
    let result = state.service().remaining_holiday(today).await;
    respond(correlation_id, &uri, start_time, result)
}

/// Handler for GET /holidays/latest-holiday.
///
/// Returns the ongoing or next holiday window, or `null` data when the
/// override table has no future holiday.
async fn latest_holiday_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = state.today();
    info!(correlation_id = %correlation_id, %today, "Processing latest holiday request");

    let start_time = Instant::now();
    let result = state.service().nearest_holiday(today).await;
    respond(correlation_id, &uri, start_time, result)
}

/// Handler for GET /holidays/latest-weekend.
async fn latest_weekend_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = state.today();
    info!(correlation_id = %correlation_id, %today, "Processing latest weekend request");

    let start_time = Instant::now();
    let result = state.service().nearest_weekend(today).await;
    respond(correlation_id, &uri, start_time, result)
}

/// Handler for GET /holidays/latest-payday.
///
/// Accepts an optional `day` query parameter. Without it the payday is the
/// last work day of the month.
async fn latest_payday_handler(
    State(state): State<AppState>,
    Query(query): Query<PaydayQuery>,
    uri: Uri,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = state.today();
    info!(
        correlation_id = %correlation_id,
        %today,
        day = ?query.day,
        "Processing latest payday request"
    );

    let start_time = Instant::now();
    let result = match query.target_day() {
        Ok(target) => state.service().resolve_payday(today, target).await,
        Err(err) => Err(err),
    };
    respond(correlation_id, &uri, start_time, result)
}

/// Wraps a query result in the success envelope or maps its error.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    uri: &Uri,
    start_time: Instant,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(data) => {
            info!(
                correlation_id = %correlation_id,
                path = %uri.path(),
                duration_us = start_time.elapsed().as_micros(),
                "Query completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiResponse::success(data, uri.path())),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                path = %uri.path(),
                retryable = err.is_retryable(),
                error = %err,
                "Query failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
