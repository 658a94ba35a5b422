use super::coerce::coerce;
use super::value::TypedValue;
use crate::flow::AnswerType;
use crate::graph::FlowNode;
use std::fmt;

/// Why the presentation layer should refuse an answer before it reaches the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRejection {
    Empty,
    NotBoolean,
    NotInteger,
    NotDecimal,
    NotDate,
    NotAnOption { options: Vec<String> },
}

impl fmt::Display for AnswerRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerRejection::Empty => write!(f, "an answer is required"),
            AnswerRejection::NotBoolean => write!(f, "please answer yes or no"),
            AnswerRejection::NotInteger => write!(f, "please enter a whole number"),
            AnswerRejection::NotDecimal => write!(f, "please enter a number"),
            AnswerRejection::NotDate => write!(f, "please enter a date such as 1985-03-14"),
            AnswerRejection::NotAnOption { options } => {
                write!(f, "please choose one of: {}", options.join(", "))
            }
        }
    }
}

/// Validates raw input for a node, returning the coerced value on success.
///
/// Select nodes that declare options only accept one of them (case-insensitive).
pub fn validate_answer(node: &FlowNode, raw: &str) -> Result<TypedValue, AnswerRejection> {
    if raw.trim().is_empty() {
        return Err(AnswerRejection::Empty);
    }

    let value = coerce(node.answer_type, raw).ok_or(match node.answer_type {
        AnswerType::Boolean => AnswerRejection::NotBoolean,
        AnswerType::Integer => AnswerRejection::NotInteger,
        AnswerType::Decimal => AnswerRejection::NotDecimal,
        AnswerType::Date => AnswerRejection::NotDate,
        AnswerType::Text | AnswerType::Select => AnswerRejection::Empty,
    })?;

    if node.answer_type == AnswerType::Select && !node.options.is_empty() {
        let folded = value.folded();
        if !node.options.iter().any(|o| o.to_lowercase() == folded) {
            return Err(AnswerRejection::NotAnOption {
                options: node.options.clone(),
            });
        }
    }

    Ok(value)
}
