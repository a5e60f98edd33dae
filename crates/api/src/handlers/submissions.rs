//! Handlers for the `/submissions` resource.
//!
//! Submissions are validated against the active form schema before anything
//! touches the database; rejected records never reach storage.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use formkit_core::error::CoreError;
use formkit_core::form_schema::FieldDefinition;
use formkit_core::pagination::PageInfo;
use formkit_core::submission::{prepare_for_storage, present_stored, SubmissionRecord};
use formkit_core::types::{iso_millis, now_millis};
use formkit_core::validation::validate;
use formkit_db::models::submission::{CreateSubmission, Submission};
use formkit_db::repositories::SubmissionRepo;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

/// Body of a successful `POST /api/submissions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCreated {
    pub success: bool,
    pub submission_id: String,
    pub created_at: String,
    pub message: &'static str,
}

/// POST /api/submissions
///
/// Validate the posted record against the form schema. Returns 400 with a
/// per-field error map on failure, 201 with the generated id and timestamp
/// on success.
pub async fn create_submission(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SubmissionCreated>)> {
    let Json(body) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let Value::Object(record) = body else {
        return Err(AppError::BadRequest(
            "Submission body must be a JSON object".to_string(),
        ));
    };

    let fields = state.forms.fields();
    let errors = validate(fields, &record);
    if !errors.is_empty() {
        tracing::debug!(
            fields = ?errors.fields().collect::<Vec<_>>(),
            "Submission rejected by form schema",
        );
        return Err(CoreError::InvalidSubmission(errors).into());
    }

    let input = CreateSubmission {
        submission_id: Uuid::new_v4().to_string(),
        data: prepare_for_storage(fields, &record),
        created_at: now_millis(),
    };
    let saved = SubmissionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        id = saved.id,
        submission_id = %saved.submission_id,
        "Submission saved",
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmissionCreated {
            success: true,
            submission_id: saved.submission_id,
            created_at: iso_millis(&saved.created_at),
            message: "Submission saved successfully!",
        }),
    ))
}

/// GET /api/submissions?page=&limit=&sortOrder=
///
/// List stored submissions one page at a time, newest first unless
/// `sortOrder=asc`.
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<PagedResponse<SubmissionRecord>>> {
    let page = params.to_page_request();

    let total_items = SubmissionRepo::count(&state.pool).await?;
    let rows = SubmissionRepo::list_page(&state.pool, &page).await?;

    let fields = state.forms.fields();
    let data = rows.into_iter().map(|row| listing_entry(fields, row)).collect();

    Ok(Json(PagedResponse::ok(data, PageInfo::new(&page, total_items))))
}

/// GET /api/submissions/{submission_id}
///
/// Fetch a single stored submission. Returns 404 if the id is unknown.
pub async fn get_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> AppResult<Json<DataResponse<SubmissionRecord>>> {
    let row = SubmissionRepo::find_by_submission_id(&state.pool, &submission_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Submission",
            id: submission_id,
        })?;

    Ok(Json(DataResponse::ok(listing_entry(state.forms.fields(), row))))
}

/// Flatten a stored row into `{ submissionId, ...fields, createdAt }`.
fn listing_entry(fields: &[FieldDefinition], row: Submission) -> SubmissionRecord {
    let mut entry = present_stored(fields, row.data.0);
    entry.insert("submissionId".to_string(), Value::String(row.submission_id));
    entry.insert(
        "createdAt".to_string(),
        Value::String(iso_millis(&row.created_at)),
    );
    entry
}
