use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// Anchored at both ends: a substring hit is not a match. Intentionally
// lenient about interior dots in the domain ("user@a..b.co" passes); only
// the final label is held to two-or-more letters.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Syntactic sanity check only: says nothing about deliverability or full
/// RFC 5321/5322 grammar.
pub fn validate_email(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    EMAIL_SHAPE.is_match(candidate)
}

/// Absent candidates classify as invalid.
pub fn validate_optional(candidate: Option<&str>) -> bool {
    match candidate {
        Some(text) => validate_email(text),
        None => false,
    }
}

/// Accepts arbitrary JSON-shaped input. Anything that is not a string
/// (null, bool, number, array, object) classifies as invalid rather than
/// erroring.
pub fn validate_value(candidate: &Value) -> bool {
    match candidate.as_str() {
        Some(text) => validate_email(text),
        None => false,
    }
}
