//! AI Extraction Adapter — asks the hosted model for the job fields.
//!
//! `AppState` holds an `Arc<dyn AiExtractor>`; the default backend is
//! `HostedModelExtractor`, tests swap in stubs.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::parsing::prompts::{JOB_EXTRACTION_PROMPT, PROMPT_TEXT_LIMIT};

/// Model-backed field extraction. Implementations return whatever partial
/// object they found; an empty object is a valid answer.
#[async_trait]
pub trait AiExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<Map<String, Value>, LlmError>;
}

/// Extractor backed by the hosted text-generation endpoint.
pub struct HostedModelExtractor {
    llm: LlmClient,
}

impl HostedModelExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AiExtractor for HostedModelExtractor {
    async fn extract(&self, text: &str) -> Result<Map<String, Value>, LlmError> {
        let prompt = build_prompt(text);
        self.llm.generate_json_object(&prompt).await
    }
}

/// Fills the extraction template with at most `PROMPT_TEXT_LIMIT` characters
/// of `text`.
pub fn build_prompt(text: &str) -> String {
    let excerpt: String = text.chars().take(PROMPT_TEXT_LIMIT).collect();
    JOB_EXTRACTION_PROMPT
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{text}", &excerpt)
}
