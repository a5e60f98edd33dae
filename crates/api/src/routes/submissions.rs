//! Route definitions for the `/submissions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// GET  /                  -> list_submissions (?page, limit, sortOrder)
/// POST /                  -> create_submission
/// GET  /{submission_id}   -> get_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(submissions::list_submissions).post(submissions::create_submission),
        )
        .route("/{submission_id}", get(submissions::get_submission))
}
