//! Parse Orchestrator — AI extraction first, pattern extraction on failure.
//!
//! One attempt at each path, no retries, no merging of partial results.

use tracing::{debug, warn};

use crate::parsing::ai_extract::AiExtractor;
use crate::parsing::field_extractor::extract_fields;
use crate::parsing::normalize::normalize;
use crate::parsing::parsed_job::ParsedJob;

pub const FALLBACK_WARNING: &str = "AI parsing was unavailable, so the job was read with \
automated pattern matching. Please review every field before saving.";

/// Which extraction path produced the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    Ai,
    Pattern,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub job: ParsedJob,
    pub source: ExtractionSource,
}

impl ParseOutcome {
    /// Caller-visible warning; only pattern fallback carries one.
    pub fn warning(&self) -> Option<&'static str> {
        match self.source {
            ExtractionSource::Ai => None,
            ExtractionSource::Pattern => Some(FALLBACK_WARNING),
        }
    }
}

/// Parses `text` into a job candidate. Never fails: any AI error switches to
/// the pattern path, which always yields a job.
pub async fn parse_job_text(text: &str, ai: &dyn AiExtractor) -> ParseOutcome {
    match ai.extract(text).await {
        Ok(fields) => {
            debug!("AI extraction returned {} fields", fields.len());
            ParseOutcome {
                job: normalize(&fields),
                source: ExtractionSource::Ai,
            }
        }
        Err(e) => {
            warn!("AI extraction failed, falling back to pattern matching: {e}");
            let fields = extract_fields(text).into_object();
            ParseOutcome {
                job: normalize(&fields),
                source: ExtractionSource::Pattern,
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::{Map, Value};

    use crate::llm_client::LlmError;
    use crate::parsing::ai_extract::AiExtractor;

    /// Always fails the way a non-200 inference response does.
    pub struct FailingExtractor {
        pub calls: AtomicUsize,
    }

    impl FailingExtractor {
        pub fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AiExtractor for FailingExtractor {
        async fn extract(&self, _text: &str) -> Result<Map<String, Value>, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LlmError::Upstream {
                status: 503,
                body: "model is loading".to_string(),
            })
        }
    }

    /// Returns a fixed object.
    pub struct CannedExtractor(pub Value);

    #[async_trait]
    impl AiExtractor for CannedExtractor {
        async fn extract(&self, _text: &str) -> Result<Map<String, Value>, LlmError> {
            match &self.0 {
                Value::Object(map) => Ok(map.clone()),
                _ => Ok(Map::new()),
            }
        }
    }
}
