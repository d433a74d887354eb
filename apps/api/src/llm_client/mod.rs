/// LLM Client — the single point of entry for hosted text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the inference API directly.
/// All model interactions MUST go through this module.
///
/// One attempt per call. Failures are reported to the caller, which decides
/// whether to fall back; nothing here retries.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const MAX_NEW_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.1;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inference API error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Inference API returned no generated text")]
    EmptyResponse,

    #[error("No inference API key configured")]
    MissingCredential,
}

/// Connection settings for the hosted inference endpoint.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

/// One element of the inference response. Text-generation models answer with
/// `generated_text`, summarization models with `summary_text`.
#[derive(Debug, Deserialize)]
struct GeneratedItem {
    generated_text: Option<String>,
    summary_text: Option<String>,
}

impl GeneratedItem {
    fn into_text(self) -> Option<String> {
        self.generated_text.or(self.summary_text)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Many(Vec<GeneratedItem>),
    One(GeneratedItem),
}

impl GenerationResponse {
    fn into_text(self) -> Option<String> {
        match self {
            GenerationResponse::Many(items) => items.into_iter().next()?.into_text(),
            GenerationResponse::One(item) => item.into_text(),
        }
    }
}

/// Client for the hosted text-generation endpoint.
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    settings: LlmSettings,
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { client, settings })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    pub fn has_credential(&self) -> bool {
        self.settings.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Sends `prompt` to the model and returns the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential)?;

        let request_body = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerationResponse = response.json().await?;
        let text = parsed
            .into_text()
            .filter(|t| !t.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)?;

        debug!(
            "Inference call succeeded: model={}, generated_chars={}",
            self.settings.model,
            text.len()
        );

        Ok(text)
    }

    /// Calls the model and pulls a JSON object out of whatever it wrote.
    /// Text without a parseable object yields an empty map rather than an error.
    pub async fn generate_json_object(&self, prompt: &str) -> Result<Map<String, Value>, LlmError> {
        let text = self.generate(prompt).await?;
        Ok(extract_json_object(&text))
    }
}

/// Finds the JSON object in free-form model output.
///
/// Tries the fence-stripped text as a whole, then the span from the first `{`
/// to the last `}`.
pub fn extract_json_object(text: &str) -> Map<String, Value> {
    let text = strip_json_fences(text);

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        return map;
    }

    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Map::new();
    };
    if end <= start {
        return Map::new();
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
