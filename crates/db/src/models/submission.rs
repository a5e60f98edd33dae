//! Submission rows and insert DTO.

use formkit_core::submission::SubmissionRecord;
use formkit_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `submissions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Submission {
    pub id: DbId,
    /// Public identifier (UUID v4, hyphenated).
    pub submission_id: String,
    /// Stored field values, already shaped for storage.
    pub data: Json<SubmissionRecord>,
    pub created_at: Timestamp,
}

/// DTO for inserting a validated submission.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub submission_id: String,
    pub data: SubmissionRecord,
    pub created_at: Timestamp,
}
