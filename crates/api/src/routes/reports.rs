//! Handlers for the report collection.
//!
//! Every handler performs a full read-modify-write cycle on the document
//! store. Near-simultaneous writers can race (last write wins); acceptable
//! for the single-user deployments this service targets.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use nearmiss_core::Report;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /reports
///
/// The full collection, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let doc = state.store.read();
    Ok(Json(doc.reports))
}

/// POST /reports
///
/// Store a submitted record, prepending it to the collection. An id is
/// assigned server-side only if the record arrived without one; the
/// record's fields are otherwise stored as submitted.
pub async fn create(
    State(state): State<AppState>,
    Json(mut report): Json<Report>,
) -> AppResult<impl IntoResponse> {
    if report.id.is_empty() {
        report.id = Uuid::now_v7().to_string();
    }

    let mut doc = state.store.read();
    doc.reports.insert(0, report.clone());
    state.store.write(&doc)?;

    tracing::info!(id = %report.id, location = %report.location, "Report stored");

    Ok((StatusCode::CREATED, Json(report)))
}

/// DELETE /reports/{id}
///
/// Remove the record with the given id. Responds 204 whether or not the
/// id was present.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut doc = state.store.read();
    doc.reports.retain(|r| r.id != id);
    state.store.write(&doc)?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /reports/{id}/followup
///
/// Unconditionally flip the follow-up flag on the record with the given
/// id. 404 if the id is unknown.
pub async fn toggle_follow_up(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut doc = state.store.read();

    let report = doc
        .reports
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(id.clone()))?;
    report.follow_up_done = !report.follow_up_done;
    let updated = report.clone();

    state.store.write(&doc)?;

    Ok(Json(updated))
}

/// POST /reports/reset
///
/// Empty the collection and acknowledge.
pub async fn reset(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.store.write(&Default::default())?;

    tracing::info!("Report collection reset");

    Ok(Json(json!({ "ok": true })))
}
