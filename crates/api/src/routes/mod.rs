pub mod health;
pub mod reports;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::AppState;

/// Build the report route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reports                 list (GET), create (POST)
/// /reports/{id}            delete (DELETE)
/// /reports/{id}/followup   toggle follow-up flag (PUT)
/// /reports/reset           clear the collection (POST)
/// ```
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(reports::list).post(reports::create))
        .route("/reports/reset", post(reports::reset))
        .route("/reports/{id}", delete(reports::remove))
        .route("/reports/{id}/followup", put(reports::toggle_follow_up))
}
