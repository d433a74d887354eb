use std::sync::Arc;

use crate::config::Config;
use crate::jobs::repository::JobRepository;
use crate::parsing::ai_extract::AiExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Model-backed extraction. Default: HostedModelExtractor over LlmClient.
    pub ai: Arc<dyn AiExtractor>,
    /// Client/job persistence. Default: PgJobRepository.
    pub jobs: Arc<dyn JobRepository>,
}

#[cfg(test)]
pub fn test_state(ai: Arc<dyn AiExtractor>) -> AppState {
    test_state_with_jobs(
        ai,
        Arc::new(crate::jobs::repository::memory::InMemoryJobRepository::default()),
    )
}

#[cfg(test)]
pub fn test_state_with_jobs(ai: Arc<dyn AiExtractor>, jobs: Arc<dyn JobRepository>) -> AppState {
    let config = Config::from_lookup(|key| {
        (key == "DATABASE_URL").then(|| "postgres://localhost/transdesk_test".to_string())
    })
    .expect("test config");

    AppState { config, ai, jobs }
}
