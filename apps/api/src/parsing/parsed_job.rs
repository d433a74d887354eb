//! ParsedJob — the normalized job candidate returned by every parse path.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CLIENT_NAME: &str = "Unknown Client";
pub const DEFAULT_NOTES: &str =
    "Imported from a job request. Review all fields before saving.";

/// Kind of work requested. Anything that is not interpreting is translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    #[default]
    Translation,
    Interpreting,
}

impl JobType {
    /// Maps a free-form label to a job type. Only `interpret*` is interpreting.
    pub fn from_label(label: &str) -> Self {
        if label.trim().to_lowercase().starts_with("interpret") {
            JobType::Interpreting
        } else {
            JobType::Translation
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Translation => "translation",
            JobType::Interpreting => "interpreting",
        }
    }
}

/// Fully populated job candidate awaiting human review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedJob {
    pub client_name: String,
    pub client_email: String,
    pub client_company: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_per_word: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_per_hour: Option<f64>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub notes: String,
}

impl Default for ParsedJob {
    fn default() -> Self {
        Self {
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            client_email: String::new(),
            client_company: String::new(),
            job_type: JobType::Translation,
            description: String::new(),
            source_language: None,
            target_language: None,
            word_count: None,
            rate_per_word: None,
            duration_hours: None,
            rate_per_hour: None,
            deadline: None,
            notes: DEFAULT_NOTES.to_string(),
        }
    }
}
