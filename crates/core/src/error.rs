use crate::validation::ErrorMap;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The submission broke one or more form rules.
    #[error("Submission failed validation on {} field(s)", .0.len())]
    InvalidSubmission(ErrorMap),
}
