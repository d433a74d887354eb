//! Axum route handlers for the Job Parsing API.

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::parsing::document::{document_text, DocumentKind};
use crate::parsing::orchestrator::{parse_job_text, ParseOutcome};
use crate::parsing::parsed_job::ParsedJob;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseJobRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseJobResponse {
    pub data: ParsedJob,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<ParseOutcome> for ParseJobResponse {
    fn from(outcome: ParseOutcome) -> Self {
        let warning = outcome.warning().map(String::from);
        Self {
            data: outcome.job,
            warning,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/parse
///
/// Turns a pasted job request into a ParsedJob for review. Nothing is stored.
pub async fn handle_parse_job(
    State(state): State<AppState>,
    payload: Result<Json<ParseJobRequest>, JsonRejection>,
) -> Result<Json<ParseJobResponse>, AppError> {
    let Json(request) = payload?;
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let outcome = parse_job_text(&request.text, state.ai.as_ref()).await;
    Ok(Json(outcome.into()))
}

/// POST /api/v1/jobs/parse-document
///
/// Multipart upload (`file` field, PDF or UTF-8 text). Same response as
/// `/api/v1/jobs/parse`.
pub async fn handle_parse_document(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ParseJobResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let kind = DocumentKind::detect(field.content_type(), field.file_name());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        upload = Some((kind, bytes));
        break;
    }

    let (kind, bytes) = upload.ok_or_else(|| {
        AppError::Validation(format!("multipart field '{UPLOAD_FIELD}' is required"))
    })?;

    let text = tokio::task::spawn_blocking(move || document_text(&bytes, kind))
        .await
        .map_err(|e| {
            tracing::warn!("Document extraction task failed: {e}");
            AppError::UnprocessableEntity("could not read the uploaded document".to_string())
        })??;

    let outcome = parse_job_text(&text, state.ai.as_ref()).await;
    Ok(Json(outcome.into()))
}
