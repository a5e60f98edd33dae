//! Handler for the form schema document.

use axum::extract::State;
use axum::Json;
use formkit_core::form_schema::FormSchema;

use crate::state::AppState;

/// GET /api/form-schema
///
/// Return the active form schema verbatim so clients can render the form and
/// mirror its rules.
pub async fn get_form_schema(State(state): State<AppState>) -> Json<FormSchema> {
    Json(state.forms.schema().clone())
}
