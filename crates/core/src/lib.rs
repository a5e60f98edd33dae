//! Domain types and pure logic for the form submission service.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on top of it.

pub mod error;
pub mod form_schema;
pub mod pagination;
pub mod submission;
pub mod types;
pub mod validation;
