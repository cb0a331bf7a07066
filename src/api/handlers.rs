//! HTTP request handlers for the check-in API.
//!
//! `/scan` drives the whole pipeline for one scan event: lookup,
//! authorization, classification, guidance gating, badge rendering, and
//! audit logging. `/classify` exposes the bare rule chain, including the
//! loose-flag normalization.

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

use crate::classification::{authorize, classify, shows_wristband_panel, wristband_guidance};
use crate::models::{AttendeeRecord, parse_flag};
use crate::render::render;

use super::request::{ClassifyRequest, ScanRequest};
use super::response::{ApiError, ClassifyResponse, ScanResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/scan", post(scan_handler))
        .route("/classify", post(classify_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into an error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the POST /scan endpoint.
async fn scan_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> impl IntoResponse {
    let scan_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(scan_id, rejection),
    };

    info!(scan_id = %scan_id, attendee_id = %request.attendee_id, "Processing scan");

    let Some(attendee) = state.roster().find(&request.attendee_id) else {
        warn!(scan_id = %scan_id, attendee_id = %request.attendee_id, "Attendee not found");
        // A miss is a denial, not an error; audit it under the scanned id.
        let placeholder = placeholder_record(&request.attendee_id);
        append_audit(&state, scan_id, &placeholder, false, "Attendee not found");
        return denial(scan_id, request.attendee_id, "Attendee not found", None);
    };

    let outcome = authorize(attendee.event_id, state.active_events());
    if !outcome.authorized {
        info!(
            scan_id = %scan_id,
            attendee_id = %attendee.attendee_id,
            reason = %outcome.reason,
            "Scan denied"
        );
        append_audit(&state, scan_id, &attendee, false, &outcome.reason);
        return denial(scan_id, request.attendee_id, &outcome.reason, Some(attendee));
    }

    // Authorization guarantees the event id parsed.
    let event_name = attendee
        .event_id
        .map(|id| state.catalog().event_name(id))
        .unwrap_or_default();

    let classification = classify(&event_name, &attendee.entry_type, attendee.pirata);
    let guidance = wristband_guidance(&event_name, &attendee.entry_type, attendee.pirata);
    let badge = render(&attendee, &event_name, &classification, request.mode);

    append_audit(&state, scan_id, &attendee, true, &outcome.reason);
    info!(
        scan_id = %scan_id,
        attendee_id = %attendee.attendee_id,
        event = %event_name,
        rule = %classification.rule_matched.name(),
        "Scan authorized"
    );

    (
        StatusCode::OK,
        Json(ScanResponse {
            scan_id,
            timestamp: Utc::now(),
            attendee_id: request.attendee_id,
            authorized: true,
            reason: outcome.reason,
            attendee: Some(attendee),
            event_name: Some(event_name),
            guidance,
            badge: Some(badge),
        }),
    )
        .into_response()
}

/// Handler for the POST /classify endpoint.
async fn classify_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let pirata = parse_flag(Some(&request.pirata_flag));
    let classification = classify(&request.event_name, &request.entry_type, pirata);
    let panel_visible = shows_wristband_panel(&request.event_name);

    info!(
        correlation_id = %correlation_id,
        event = %request.event_name,
        entry = %request.entry_type,
        rule = %classification.rule_matched.name(),
        "Classification computed"
    );

    (
        StatusCode::OK,
        Json(ClassifyResponse {
            classification,
            panel_visible,
            pirata_normalized: pirata,
        }),
    )
        .into_response()
}

/// Builds a denial response.
fn denial(
    scan_id: Uuid,
    attendee_id: String,
    reason: &str,
    attendee: Option<AttendeeRecord>,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(ScanResponse {
            scan_id,
            timestamp: Utc::now(),
            attendee_id,
            authorized: false,
            reason: reason.to_string(),
            attendee,
            event_name: None,
            guidance: None,
            badge: None,
        }),
    )
        .into_response()
}

/// Minimal record for auditing a lookup miss.
fn placeholder_record(attendee_id: &str) -> AttendeeRecord {
    AttendeeRecord {
        attendee_id: attendee_id.to_string(),
        full_name: String::new(),
        last_name: String::new(),
        company: String::new(),
        event_id: None,
        entry_type: String::new(),
        pirata: false,
        paid: false,
        days: String::new(),
    }
}

/// Appends to the access log when one is configured; log failures are
/// reported but never fail the scan.
fn append_audit(
    state: &AppState,
    scan_id: Uuid,
    attendee: &AttendeeRecord,
    authorized: bool,
    reason: &str,
) {
    if let Some(log) = state.access_log() {
        if let Err(err) = log.record(attendee, authorized, reason, state.active_events()) {
            warn!(scan_id = %scan_id, error = %err, "Access log append failed");
        }
    }
}
