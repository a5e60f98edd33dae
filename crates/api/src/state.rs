use std::sync::Arc;

use formkit_core::form_schema::FormSchemaRegistry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: formkit_db::DbPool,
    /// The active form schema. Read-only after startup.
    pub forms: Arc<FormSchemaRegistry>,
}
