use crate::answer::TypedValue;
use crate::trigger::{ClauseTrace, GroupTrace, TriggerTrace};

/// Formats trigger traces into human-readable reasons.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Explain why a trigger evaluated the way it did.
    ///
    /// For a satisfied trigger this is the first satisfied group. For an unsatisfied one,
    /// each group is reduced to the clause that failed it.
    pub fn format_trace(trace: &TriggerTrace) -> String {
        if trace.groups.is_empty() {
            return "no condition".to_string();
        }

        if let Some(group) = trace.decisive_group() {
            return Self::format_group(group);
        }

        trace
            .groups
            .iter()
            .filter_map(|group| {
                group
                    .clauses
                    .iter()
                    .find(|c| c.outcome() == Some(false))
                    .map(Self::format_clause)
            })
            .collect::<Vec<_>>()
            .join(" OR ")
    }

    fn format_group(group: &GroupTrace) -> String {
        group
            .clauses
            .iter()
            .filter(|c| c.outcome().is_some())
            .map(Self::format_clause)
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    fn format_clause(clause: &ClauseTrace) -> String {
        match clause {
            ClauseTrace::Evaluated {
                source,
                node_id: Some(_),
                left,
                ..
            } => match left {
                Some(value) => format!("{} (was {})", source, Self::format_value(value)),
                None => format!("{} (unanswered)", source),
            },
            ClauseTrace::Evaluated { source, .. } | ClauseTrace::NotEvaluated { source } => {
                source.clone()
            }
        }
    }

    /// Format a value for display.
    fn format_value(value: &TypedValue) -> String {
        match value {
            TypedValue::Bool(true) => "yes".to_string(),
            TypedValue::Bool(false) => "no".to_string(),
            other => other.to_string(),
        }
    }
}
