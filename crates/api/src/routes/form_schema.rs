//! Route definitions for the form schema document.

use axum::routing::get;
use axum::Router;

use crate::handlers::form_schema;
use crate::state::AppState;

/// Routes mounted at `/form-schema`.
///
/// ```text
/// GET /  -> get_form_schema
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(form_schema::get_form_schema))
}
