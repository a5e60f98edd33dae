//! Repository for the `submissions` table.

use formkit_core::pagination::PageRequest;
use formkit_core::types::iso_millis;
use sqlx::types::Json;

use crate::models::submission::{CreateSubmission, Submission};
use crate::DbPool;

/// Column list for `submissions` queries.
const COLUMNS: &str = "id, submission_id, data, created_at";

/// Provides data access for form submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a validated submission, returning the stored row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (submission_id, data, created_at) \
             VALUES (?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.submission_id)
            .bind(Json(&input.data))
            .bind(iso_millis(&input.created_at))
            .fetch_one(pool)
            .await
    }

    /// Fetch one submission by its public identifier.
    pub async fn find_by_submission_id(
        pool: &DbPool,
        submission_id: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE submission_id = ?");
        sqlx::query_as::<_, Submission>(&query)
            .bind(submission_id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored submissions.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM submissions")
            .fetch_one(pool)
            .await
    }

    /// One page of submissions ordered by creation time.
    ///
    /// Rows sharing a timestamp are ordered by insertion, in the same
    /// direction as the requested sort.
    pub async fn list_page(
        pool: &DbPool,
        page: &PageRequest,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let direction = page.sort.as_sql();
        let query = format!(
            "SELECT {COLUMNS} FROM submissions \
             ORDER BY created_at {direction}, id {direction} \
             LIMIT ? OFFSET ?"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }
}
