//! Field Extractor — pulls job fields out of unstructured text with the
//! ordered regex lists in `patterns`. First match wins; nothing is overwritten.

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::parsing::normalize::normalize_date;
use crate::parsing::parsed_job::JobType;
use crate::parsing::patterns::{
    CLIENT_COMPANY, CLIENT_NAME, DEADLINE, DESCRIPTION, DURATION_HOURS, EMAIL, INTERPRETING,
    LABEL_PREFIX, LANGUAGE_PAIR, RATE_PER_HOUR, RATE_PER_WORD, SENTENCE_BREAK, SOURCE_LANGUAGE,
    TARGET_LANGUAGE, WORD_COUNT,
};

const MIN_SENTENCE_CHARS: usize = 20;
const DESCRIPTION_FALLBACK_CHARS: usize = 200;

/// Partial field set produced by pattern matching. Unset fields are omitted
/// when serialized so the normalizer applies its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_company: Option<String>,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl ExtractedFields {
    /// JSON object view, the shape the normalizer consumes.
    pub fn into_object(self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Runs every field category over `text`. Never fails; fields without a
/// match stay `None`.
pub fn extract_fields(text: &str) -> ExtractedFields {
    let (pair_source, pair_target) = language_pair(text);

    ExtractedFields {
        client_name: first_capture(&CLIENT_NAME, text),
        client_email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        client_company: first_capture(&CLIENT_COMPANY, text),
        job_type: if INTERPRETING.is_match(text) {
            JobType::Interpreting
        } else {
            JobType::Translation
        },
        description: description(text),
        source_language: pair_source.or_else(|| first_capture(&SOURCE_LANGUAGE, text)),
        target_language: pair_target.or_else(|| first_capture(&TARGET_LANGUAGE, text)),
        word_count: first_parsed(&WORD_COUNT, text, parse_count),
        rate_per_word: first_parsed(&RATE_PER_WORD, text, parse_decimal),
        duration_hours: first_parsed(&DURATION_HOURS, text, parse_decimal),
        rate_per_hour: first_parsed(&RATE_PER_HOUR, text, parse_decimal),
        deadline: first_parsed(&DEADLINE, text, normalize_date),
    }
}

/// First non-blank capture group 1 across `patterns`, in order.
fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

/// Like `first_capture`, but only a capture that parses counts as a match.
fn first_parsed<T>(patterns: &[Regex], text: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    patterns.iter().find_map(|re| {
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|m| parse(m.as_str().trim()))
    })
}

fn language_pair(text: &str) -> (Option<String>, Option<String>) {
    LANGUAGE_PAIR
        .iter()
        .find_map(|re| {
            let caps = re.captures(text)?;
            Some((
                Some(caps.get(1)?.as_str().to_string()),
                Some(caps.get(2)?.as_str().to_string()),
            ))
        })
        .unwrap_or((None, None))
}

fn description(text: &str) -> Option<String> {
    if let Some(labelled) = first_capture(&DESCRIPTION, text) {
        return Some(labelled);
    }

    let sentence = SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .find(|s| s.chars().count() > MIN_SENTENCE_CHARS && !LABEL_PREFIX.is_match(s));
    if let Some(sentence) = sentence {
        return Some(sentence.to_string());
    }

    let head: String = text.trim().chars().take(DESCRIPTION_FALLBACK_CHARS).collect();
    (!head.is_empty()).then_some(head)
}

/// Parses a count such as `2000`, `2,000` or `12.500` (dot as thousands
/// separator). Anything with a real fractional part is rejected.
fn parse_count(raw: &str) -> Option<u64> {
    let mut groups = raw.split([',', '.']);
    let head = groups.next()?;
    let mut digits = head.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    digits.parse().ok()
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
