//! Schema-driven submission validation.
//!
//! [`evaluator::validate`] walks the form's field list in declared order and
//! produces an [`ErrorMap`] with at most one message per field. It is pure
//! logic with no database access.

pub mod error_map;
pub mod evaluator;

pub use error_map::ErrorMap;
pub use evaluator::validate;
