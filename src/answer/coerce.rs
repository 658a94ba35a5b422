use super::value::{TypedValue, parse_finite};
use crate::flow::AnswerType;
use chrono::{DateTime, NaiveDate};

const AFFIRMATIVE: [&str; 3] = ["yes", "y", "true"];
const NEGATIVE: [&str; 3] = ["no", "n", "false"];

/// Date layouts accepted for `date` answers, tried in order.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

/// Converts raw answer text into a typed value for the given answer type.
///
/// Returns `None` when the text is unparsable for that type. Empty or
/// whitespace-only input is unparsable for every type.
pub fn coerce(answer_type: AnswerType, raw: &str) -> Option<TypedValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match answer_type {
        AnswerType::Boolean => coerce_bool(trimmed).map(TypedValue::Bool),
        AnswerType::Integer => coerce_integer(trimmed).map(TypedValue::Integer),
        AnswerType::Decimal => parse_finite(trimmed).map(TypedValue::Decimal),
        AnswerType::Date => {
            is_calendar_date(trimmed).then(|| TypedValue::Date(trimmed.to_string()))
        }
        AnswerType::Text | AnswerType::Select => Some(TypedValue::Text(trimmed.to_string())),
    }
}

/// Recognizes the affirmative and negative tokens, ignoring case and surrounding whitespace.
pub fn coerce_bool(raw: &str) -> Option<bool> {
    let normalized = raw.trim().to_lowercase();
    if AFFIRMATIVE.contains(&normalized.as_str()) {
        Some(true)
    } else if NEGATIVE.contains(&normalized.as_str()) {
        Some(false)
    } else {
        None
    }
}

fn coerce_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn is_calendar_date(text: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(text, format).is_ok())
        || DateTime::parse_from_rfc3339(text).is_ok()
}
