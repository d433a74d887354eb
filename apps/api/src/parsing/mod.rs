// Job-request parsing: regex extraction, hosted-model extraction,
// normalization, and the AI-first / pattern-fallback orchestrator.
// All model calls go through llm_client.

pub mod ai_extract;
pub mod document;
pub mod field_extractor;
pub mod handlers;
pub mod normalize;
pub mod orchestrator;
pub mod parsed_job;
pub mod patterns;
pub mod prompts;
