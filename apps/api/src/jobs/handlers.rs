use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::parsing::normalize::normalize;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConfirmJobRequest {
    pub user_id: Uuid,
    /// The reviewed ParsedJob; may have been edited by the user.
    pub job: Value,
}

#[derive(Debug, Serialize)]
pub struct ConfirmJobResponse {
    pub client_id: Uuid,
    pub job_id: Uuid,
    pub status: String,
}

/// POST /api/v1/jobs/parse/confirm
pub async fn handle_confirm_job(
    State(state): State<AppState>,
    payload: Result<Json<ConfirmJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ConfirmJobResponse>), AppError> {
    let Json(request) = payload?;
    let Value::Object(fields) = &request.job else {
        return Err(AppError::Validation("job must be an object".to_string()));
    };

    let job = normalize(fields);
    let client = state.jobs.upsert_client(request.user_id, &job).await?;
    let row = state.jobs.create_job(request.user_id, client.id, &job).await?;

    tracing::info!(
        "Imported job {} for client {} ({})",
        row.id,
        client.id,
        row.job_type
    );

    Ok((
        StatusCode::CREATED,
        Json(ConfirmJobResponse {
            client_id: client.id,
            job_id: row.id,
            status: row.status,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::jobs::repository::memory::InMemoryJobRepository;
    use crate::parsing::orchestrator::test_support::FailingExtractor;
    use crate::routes::build_router;
    use crate::state::test_state_with_jobs;

    fn confirm_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/jobs/parse/confirm")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn confirm(repo: Arc<InMemoryJobRepository>, body: Value) -> (StatusCode, Value) {
        let state = test_state_with_jobs(Arc::new(FailingExtractor::new()), repo);
        let response = build_router(state)
            .oneshot(confirm_request(body))
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_confirm_creates_client_and_pending_job() {
        let repo = Arc::new(InMemoryJobRepository::default());
        let user_id = Uuid::new_v4();

        let (status, body) = confirm(
            repo.clone(),
            json!({
                "user_id": user_id,
                "job": {
                    "client_name": "Jane Doe",
                    "client_email": "jane@acme.com",
                    "type": "translation",
                    "word_count": 2000,
                    "rate_per_word": 0.12,
                    "deadline": "2024-05-01"
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "pending");

        let jobs = repo.jobs.lock().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].word_count, Some(2000));
        assert_eq!(jobs[0].user_id, user_id);
        assert_eq!(body["job_id"], jobs[0].id.to_string());
    }

    #[tokio::test]
    async fn test_confirm_reuses_client_with_same_email() {
        let repo = Arc::new(InMemoryJobRepository::default());
        let user_id = Uuid::new_v4();
        let job = json!({"client_name": "Jane Doe", "client_email": "jane@acme.com"});

        let (_, first) = confirm(repo.clone(), json!({"user_id": user_id, "job": job})).await;
        let (_, second) = confirm(
            repo.clone(),
            json!({"user_id": user_id, "job": {"client_name": "Jane", "client_email": "Jane@Acme.com"}}),
        )
        .await;

        assert_eq!(first["client_id"], second["client_id"]);
        assert_eq!(repo.clients.lock().unwrap().len(), 1);
        assert_eq!(repo.jobs.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_confirm_rejects_non_object_job() {
        let repo = Arc::new(InMemoryJobRepository::default());
        let (status, body) = confirm(
            repo.clone(),
            json!({"user_id": Uuid::new_v4(), "job": "Jane Doe"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert!(repo.jobs.lock().unwrap().is_empty());
    }
}
