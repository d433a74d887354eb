pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as job_handlers;
use crate::parsing::handlers as parse_handlers;
use crate::state::AppState;

/// Uploaded job documents (PDF briefs, purchase orders) exceed axum's 2 MB default.
const DOCUMENT_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job intake
        .route("/api/v1/jobs/parse", post(parse_handlers::handle_parse_job))
        .route(
            "/api/v1/jobs/parse-document",
            post(parse_handlers::handle_parse_document)
                .layer(DefaultBodyLimit::max(DOCUMENT_BODY_LIMIT)),
        )
        .route(
            "/api/v1/jobs/parse/confirm",
            post(job_handlers::handle_confirm_job),
        )
        .with_state(state)
}
