use std::fmt;

/// A raw answer after coercion against its node's declared answer type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Bool(bool),
    Integer(i64),
    Decimal(f64),
    /// Dates keep the text the user typed; they are never normalized.
    Date(String),
    Text(String),
}

impl TypedValue {
    /// The numeric reading of this value, if it has one.
    ///
    /// Booleans are never numeric. Text and dates are numeric only when their
    /// text parses as a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TypedValue::Integer(i) => Some(*i as f64),
            TypedValue::Decimal(d) => Some(*d),
            TypedValue::Date(s) | TypedValue::Text(s) => parse_finite(s),
            TypedValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Lowercased text form used by `==` and `CONTAINS`.
    pub fn folded(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Bool(b) => write!(f, "{}", b),
            TypedValue::Integer(i) => write!(f, "{}", i),
            TypedValue::Decimal(d) => write!(f, "{}", d),
            TypedValue::Date(s) | TypedValue::Text(s) => write!(f, "{}", s),
        }
    }
}

pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
