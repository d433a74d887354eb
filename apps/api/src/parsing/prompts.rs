// Prompt templates for job-request extraction.
// Cross-cutting fragments come from llm_client::prompts.

/// Characters of the request text included in the prompt.
pub const PROMPT_TEXT_LIMIT: usize = 1000;

/// Job extraction prompt. Replace `{text}` and `{json_only}` before sending.
pub const JOB_EXTRACTION_PROMPT: &str = r#"Extract the job details from this request sent to a freelance translator or interpreter.

REQUEST:
{text}

Return a JSON object with these fields:
{
  "client_name": "string",
  "client_email": "string",
  "client_company": "string",
  "type": "translation" | "interpreting",
  "description": "short summary of the work",
  "source_language": "string",
  "target_language": "string",
  "word_count": number,
  "rate_per_word": number,
  "duration_hours": number,
  "rate_per_hour": number,
  "deadline": "YYYY-MM-DD",
  "notes": "string"
}

{json_only}

JSON:"#;
