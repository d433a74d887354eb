//! Normalizer — maps any partial field object onto a fully populated
//! `ParsedJob`. Pure and infallible: wrong-typed fields count as absent.

use chrono::{Datelike, NaiveDate};
use serde_json::{Map, Value};

use crate::parsing::parsed_job::{JobType, ParsedJob, DEFAULT_CLIENT_NAME, DEFAULT_NOTES};

const NUMERIC_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const WRITTEN_DATE_FORMATS: &[&str] = &["%B %d %Y", "%d %B %Y"];

pub fn normalize(fields: &Map<String, Value>) -> ParsedJob {
    ParsedJob {
        client_name: string_field(fields, "client_name")
            .unwrap_or_else(|| DEFAULT_CLIENT_NAME.to_string()),
        client_email: string_field(fields, "client_email").unwrap_or_default(),
        client_company: string_field(fields, "client_company").unwrap_or_default(),
        job_type: string_field(fields, "type")
            .map(|label| JobType::from_label(&label))
            .unwrap_or_default(),
        description: string_field(fields, "description").unwrap_or_default(),
        source_language: string_field(fields, "source_language"),
        target_language: string_field(fields, "target_language"),
        word_count: count_field(fields, "word_count"),
        rate_per_word: number_field(fields, "rate_per_word"),
        duration_hours: number_field(fields, "duration_hours"),
        rate_per_hour: number_field(fields, "rate_per_hour"),
        deadline: string_field(fields, "deadline").and_then(|d| normalize_date(&d)),
        notes: string_field(fields, "notes").unwrap_or_else(|| DEFAULT_NOTES.to_string()),
    }
}

/// Normalizes a loosely written date to `YYYY-MM-DD`.
///
/// Accepts ISO, `YYYY/MM/DD`, US `MM/DD/YYYY`, and written dates such as
/// `March 15, 2025`, `15th Mar 2025` or `Sept 3 2024`. Returns `None` for
/// anything that is not a real calendar date.
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    // Timestamps: keep the date part.
    let raw = match raw.split(['T', ' ']).next() {
        Some(head) if head.len() == 10 && head.contains('-') => head,
        _ => raw,
    };

    let numeric = NUMERIC_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok());
    if let Some(date) = numeric {
        return iso_date(date);
    }

    let cleaned = raw
        .replace([',', '.'], " ")
        .split_whitespace()
        .map(clean_date_token)
        .collect::<Vec<_>>()
        .join(" ");

    WRITTEN_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .and_then(iso_date)
}

/// Year 0 and earlier have no `DATE` counterpart in the jobs table.
fn iso_date(date: NaiveDate) -> Option<String> {
    (date.year() >= 1).then(|| date.format("%Y-%m-%d").to_string())
}

/// Drops ordinal suffixes (`15th` → `15`) and maps `Sept` to `Sep`.
fn clean_date_token(token: &str) -> String {
    let lower = token.to_lowercase();
    if lower == "sept" {
        return "Sep".to_string();
    }
    for suffix in ["st", "nd", "rd", "th"] {
        if let Some(number) = lower.strip_suffix(suffix) {
            if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
                return number.to_string();
            }
        }
    }
    token.to_string()
}

/// Looks up `key`, falling back to its camelCase spelling.
fn lookup<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).or_else(|| fields.get(&snake_to_camel(key)))
}

fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match lookup(fields, key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// Finite, non-negative number. Numeric strings are accepted.
fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match lookup(fields, key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (value.is_finite() && value >= 0.0).then_some(value)
}

fn count_field(fields: &Map<String, Value>, key: &str) -> Option<u64> {
    if let Some(Value::Number(n)) = lookup(fields, key) {
        if let Some(count) = n.as_u64() {
            return Some(count);
        }
    }
    let value = number_field(fields, key)?;
    (value.fract() == 0.0 && value <= u64::MAX as f64).then_some(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn round_trip(job: &ParsedJob) -> ParsedJob {
        normalize(&object(serde_json::to_value(job).unwrap()))
    }

    #[test]
    fn test_empty_object_is_fully_defaulted() {
        let job = normalize(&Map::new());
        assert_eq!(job, ParsedJob::default());
        assert_eq!(job.client_name, "Unknown Client");
        assert_eq!(job.job_type, JobType::Translation);
    }

    #[test]
    fn test_wrong_types_are_absent() {
        let job = normalize(&object(json!({
            "client_name": 42,
            "client_email": ["a@b.com"],
            "type": true,
            "word_count": "lots",
            "rate_per_word": {"amount": 0.1},
            "duration_hours": null,
            "deadline": 20240501,
            "notes": "   "
        })));
        assert_eq!(job, ParsedJob::default());
    }

    #[test]
    fn test_values_are_kept_and_trimmed() {
        let job = normalize(&object(json!({
            "client_name": "  Ana Silva ",
            "client_email": "ana@studio.pt",
            "client_company": "Studio Lda",
            "type": "Interpreting",
            "description": "Conference, two days",
            "source_language": "Portuguese",
            "target_language": "English",
            "word_count": 1200,
            "rate_per_word": 0.1,
            "duration_hours": "16",
            "rate_per_hour": 70,
            "deadline": "May 1, 2024",
            "notes": "Booth for two"
        })));
        assert_eq!(job.client_name, "Ana Silva");
        assert_eq!(job.job_type, JobType::Interpreting);
        assert_eq!(job.word_count, Some(1200));
        assert_eq!(job.rate_per_word, Some(0.1));
        assert_eq!(job.duration_hours, Some(16.0));
        assert_eq!(job.rate_per_hour, Some(70.0));
        assert_eq!(job.deadline.as_deref(), Some("2024-05-01"));
        assert_eq!(job.notes, "Booth for two");
    }

    #[test]
    fn test_camel_case_keys_are_accepted() {
        let job = normalize(&object(json!({
            "clientName": "Lee",
            "wordCount": 300,
            "ratePerHour": 55.5
        })));
        assert_eq!(job.client_name, "Lee");
        assert_eq!(job.word_count, Some(300));
        assert_eq!(job.rate_per_hour, Some(55.5));
    }

    #[test]
    fn test_unknown_type_label_is_translation() {
        let job = normalize(&object(json!({"type": "transcreation"})));
        assert_eq!(job.job_type, JobType::Translation);
    }

    #[test]
    fn test_negative_and_fractional_counts_are_absent() {
        let job = normalize(&object(json!({
            "word_count": 12.5,
            "rate_per_word": -0.1
        })));
        assert_eq!(job.word_count, None);
        assert_eq!(job.rate_per_word, None);

        let job = normalize(&object(json!({"word_count": 300.0})));
        assert_eq!(job.word_count, Some(300));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            json!({}),
            json!({"client_name": "X", "client_email": "x@y.io", "word_count": "2,000"}),
            json!({
                "client_name": " Jane Doe ",
                "type": "interpreter",
                "rate_per_word": 0.12,
                "duration_hours": 2.25,
                "deadline": "06/12/2024",
                "source_language": "French"
            }),
        ];
        for input in inputs {
            let once = normalize(&object(input));
            assert_eq!(round_trip(&once), once);
        }
    }

    #[test]
    fn test_normalize_date_formats() {
        assert_eq!(normalize_date("2024-05-01").as_deref(), Some("2024-05-01"));
        assert_eq!(normalize_date("2024-05-01T17:00:00Z").as_deref(), Some("2024-05-01"));
        assert_eq!(normalize_date("2024/5/1").as_deref(), Some("2024-05-01"));
        assert_eq!(normalize_date("06/12/2024").as_deref(), Some("2024-06-12"));
        assert_eq!(normalize_date("March 15, 2025").as_deref(), Some("2025-03-15"));
        assert_eq!(normalize_date("15th Mar 2025").as_deref(), Some("2025-03-15"));
        assert_eq!(normalize_date("Sept. 3, 2024").as_deref(), Some("2024-09-03"));
        assert_eq!(normalize_date("2024-13-45"), None);
        assert_eq!(normalize_date("next Friday"), None);
        assert_eq!(normalize_date(""), None);
    }

    #[test]
    fn test_normalize_date_rejects_year_zero() {
        assert_eq!(normalize_date("12/31/0000"), None);
        assert_eq!(normalize_date("0000-01-01"), None);
        assert_eq!(normalize_date("1 Jan 0000"), None);
        assert_eq!(normalize_date("12/31/0001").as_deref(), Some("0001-12-31"));
    }
}
