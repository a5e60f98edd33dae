pub mod form_schema;
pub mod health;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /form-schema                     form schema document (GET)
///
/// /submissions                     list (?page, limit, sortOrder), create
/// /submissions/{submission_id}     get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/form-schema", form_schema::router())
        .nest("/submissions", submissions::router())
}
