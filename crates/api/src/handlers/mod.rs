//! Request handlers.
//!
//! Handlers delegate validation to `formkit_core` and persistence to the
//! repositories in `formkit_db`, mapping errors via [`crate::error::AppError`].

pub mod form_schema;
pub mod submissions;
