use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::LlmSettings;

const DEFAULT_HF_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
const DEFAULT_HF_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Absent key disables AI extraction; every parse then uses pattern matching.
    pub hf_api_key: Option<String>,
    pub hf_model: String,
    pub hf_base_url: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            hf_api_key: optional("HF_API_KEY"),
            hf_model: optional("HF_MODEL").unwrap_or_else(|| DEFAULT_HF_MODEL.to_string()),
            hf_base_url: optional("HF_BASE_URL")
                .unwrap_or_else(|| DEFAULT_HF_BASE_URL.to_string()),
            llm_timeout_secs: optional("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            api_key: self.hf_api_key.clone(),
            base_url: self.hf_base_url.clone(),
            model: self.hf_model.clone(),
            timeout: Duration::from_secs(self.llm_timeout_secs),
        }
    }
}
