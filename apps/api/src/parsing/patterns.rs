//! Regex pattern library for job-request field extraction.
//!
//! Each field has an ordered list of patterns. Capture group 1 (and 2 for
//! language pairs) carries the value; earlier patterns win.

use std::sync::LazyLock;

use regex::Regex;

const LANGUAGES: &str = "English|Spanish|French|German|Italian|Portuguese|Russian|Chinese|\
Mandarin|Cantonese|Japanese|Korean|Arabic|Dutch|Polish|Swedish|Norwegian|Danish|Finnish|\
Turkish|Greek|Hebrew|Hindi|Urdu|Ukrainian|Czech|Slovak|Romanian|Hungarian|Bulgarian|Croatian|\
Serbian|Vietnamese|Thai|Indonesian|Malay|Catalan|Persian|Farsi|Tagalog";

/// ISO 639-1 codes accepted in `EN>FR` style pairs and language labels.
const LANGUAGE_CODES: &str = "AF|AR|BG|BN|CA|CS|CY|DA|DE|EL|EN|ES|ET|EU|FA|FI|FR|GA|GL|HE|HI|HR|HU|\
HY|ID|IS|IT|JA|KA|KO|LT|LV|MK|MS|MT|NB|NL|NN|NO|PL|PT|RO|RU|SK|SL|SQ|SR|SV|SW|TA|TH|TL|TR|UK|UR|VI|ZH";

const CURRENCY: &str = r"(?:\$|€|£|USD|EUR|GBP)";

/// Start of a line or of a sentence within it, so a label like `Contact:`
/// is not matched as the tail of `Company name:`.
const CLAUSE_START: &str = r"(?m)(?:^|[.!?;]\s+)[ \t]*";

const PERSON_NAME: &str = r"([A-Z][A-Za-z'\-]+(?:[ \t]+[A-Z][A-Za-z'\-]+){0,3})";

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("built-in extraction pattern must compile")
}

fn compile(patterns: &[String]) -> Vec<Regex> {
    patterns.iter().map(|p| pattern(p)).collect()
}

pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}"));

pub static INTERPRETING: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)\binterpret"));

/// A line that opens with `Word:` or `Two words:` reads as a form label.
pub static LABEL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^\s*[A-Za-z][A-Za-z ]{0,24}:"));

/// Sentence boundary: terminal punctuation followed by whitespace, or a newline.
pub static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| pattern(r"[.!?]\s+|\n+"));

pub static CLIENT_NAME: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"{CLAUSE_START}(?i:client|customer|contact(?:\s+person)?)(?i:\s+name)?[ \t]*[:\-][ \t]*{PERSON_NAME}"),
        format!(r"{CLAUSE_START}(?i:name)[ \t]*:[ \t]*{PERSON_NAME}"),
        // Mail header; only at the start of a line so `from: German` in prose is skipped.
        format!(r"(?m)^[ \t]*(?i:from)[ \t]*:[ \t]*{PERSON_NAME}"),
        r"(?i:my name is|this is)[ \t]+([A-Z][A-Za-z'\-]+(?:[ \t]+[A-Z][A-Za-z'\-]+){0,2})".to_string(),
        r"(?i:regards|best|thanks|thank you|sincerely|cheers),?[ \t]*\r?\n+[ \t]*([A-Z][A-Za-z'\-]+(?:[ \t]+[A-Z][A-Za-z'\-]+){0,2})".to_string(),
    ])
});

pub static CLIENT_COMPANY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(?i:company|organi[sz]ation|agency|firm|employer)[ \t]*[:\-][ \t]*([^\n,;]+)".to_string(),
        r"\b([A-Z][A-Za-z0-9&]*(?:[ \t]+[A-Z][A-Za-z0-9&]*)*[ \t]+(?:(?:Inc|LLC|Ltd|GmbH|Corp|SA|AG|BV|SRL)\b\.?|S\.A\.))".to_string(),
        r"(?i:on behalf of|working (?:at|for))[ \t]+([A-Z][A-Za-z0-9&]*(?:[ \t]+[A-Z][A-Za-z0-9&]*){0,3})".to_string(),
    ])
});

/// Two capture groups: source, target.
pub static LANGUAGE_PAIR: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"(?i)\bfrom\s+({LANGUAGES})\s+(?:in)?to\s+({LANGUAGES})\b"),
        format!(r"(?i)\b({LANGUAGES})\s*(?:>|->|→|<>|/|\bto\b|\binto\b)\s*({LANGUAGES})\b"),
        format!(r"\b({LANGUAGE_CODES})\s*(?:>|->|→|<>|/)\s*({LANGUAGE_CODES})\b"),
    ])
});

pub static SOURCE_LANGUAGE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[format!(
        r"(?i)source(?:\s+language)?\s*[:\-]\s*({LANGUAGES}|{LANGUAGE_CODES})\b"
    )])
});

pub static TARGET_LANGUAGE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[format!(
        r"(?i)target(?:\s+language)?\s*[:\-]\s*({LANGUAGES}|{LANGUAGE_CODES})\b"
    )])
});

pub static WORD_COUNT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)word\s*count\s*[:\-]?\s*(\d[\d,.]*\d|\d)".to_string(),
        r"(?i)(\d[\d,.]*\d|\d)\s*-?\s*(?:words?|wds)\b".to_string(),
    ])
});

pub static RATE_PER_WORD: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"(?i){CURRENCY}?\s*(\d+(?:\.\d+)?)\s*{CURRENCY}?\s*(?:per|/|a)\s*word\b"),
        format!(r"(?i)(?:per[\s-]word\s+rate|rate\s+per\s+word|word\s+rate)\s*[:\-]?\s*{CURRENCY}?\s*(\d+(?:\.\d+)?)"),
    ])
});

/// Hours only count with booking context (`duration:`, `for 3 hours`,
/// `2-hour meeting`); `within 48 hours` is a turnaround, not a duration.
pub static DURATION_HOURS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)duration\s*[:\-]?\s*(\d+(?:\.\d+)?)".to_string(),
        r"(?i)\bfor\s+(?:an?\s+|about\s+|approx(?:\.|imately)?\s+)?(\d+(?:\.\d+)?)\s*-?\s*(?:hours?|hrs?|h)\b".to_string(),
        r"(?i)\b(\d+(?:\.\d+)?)\s*-?\s*(?:hours?|hrs?)\s+(?:of\s+)?(?:[a-z]+\s+)?(?:interpreting|session|meeting|appointment|assignment|booking|call|conference|hearing|event)\b".to_string(),
    ])
});

pub static RATE_PER_HOUR: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"(?i){CURRENCY}?\s*(\d+(?:\.\d+)?)\s*{CURRENCY}?\s*(?:per|/|an|a)\s*(?:hour|hr)\b"),
        format!(r"(?i)hourly(?:\s+rate)?\s*[:\-]?\s*{CURRENCY}?\s*(\d+(?:\.\d+)?)"),
    ])
});

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|\
November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec";

pub static DEADLINE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let label = r"(?:deadline|due(?:\s+date)?|deliver(?:y|ed)?(?:\s+by)?|by|until|before)";
    compile(&[
        format!(r"(?i){label}\s*[:\-]?\s*(\d{{4}}-\d{{2}}-\d{{2}})"),
        format!(r"(?i){label}\s*[:\-]?\s*(\d{{1,2}}/\d{{1,2}}/\d{{4}})"),
        format!(r"(?i){label}\s*[:\-]?\s*((?:{MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}})"),
        format!(r"(?i){label}\s*[:\-]?\s*(\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{MONTHS})\.?,?\s+\d{{4}})"),
        r"\b(\d{4}-\d{2}-\d{2})\b".to_string(),
    ])
});

pub static DESCRIPTION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)(?:description|project|details|task|subject)[ \t]*:[ \t]*([^\n]+)".to_string(),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pattern_lists_compile() {
        for list in [
            &CLIENT_NAME,
            &CLIENT_COMPANY,
            &LANGUAGE_PAIR,
            &SOURCE_LANGUAGE,
            &TARGET_LANGUAGE,
            &WORD_COUNT,
            &RATE_PER_WORD,
            &DURATION_HOURS,
            &RATE_PER_HOUR,
            &DEADLINE,
            &DESCRIPTION,
        ] {
            assert!(!list.is_empty());
        }
        assert!(EMAIL.is_match("a@b.io"));
        assert!(INTERPRETING.is_match("Interpreter needed"));
        assert!(LABEL_PREFIX.is_match("Client: Jane"));
        assert!(SENTENCE_BREAK.is_match("One. Two"));
    }

    #[test]
    fn test_label_prefix_rejects_prose() {
        assert!(!LABEL_PREFIX.is_match("We need a certified translation of our manual."));
    }
}
