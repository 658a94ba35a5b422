use super::expression::{AndGroup, Clause, ClauseKind, ComparisonOp, Literal, TriggerExpression};
use super::trace::{ClauseTrace, GroupTrace, TriggerTrace};
use crate::answer::{TypedValue, coerce_bool};
use ahash::AHashMap;

/// Supplies coerced answers to the trigger engine.
///
/// `None` means the answer is absent: the node is unanswered, unknown, or its
/// raw text does not coerce under the node's declared type.
pub trait AnswerSource {
    fn typed_answer(&self, node_id: &str) -> Option<TypedValue>;
}

impl AnswerSource for AHashMap<String, TypedValue> {
    fn typed_answer(&self, node_id: &str) -> Option<TypedValue> {
        self.get(node_id).cloned()
    }
}

/// Evaluates parsed triggers against a set of answers. Holds no state of its own.
pub struct TriggerEngine<'a, S: AnswerSource + ?Sized> {
    answers: &'a S,
}

impl<'a, S: AnswerSource + ?Sized> TriggerEngine<'a, S> {
    pub fn new(answers: &'a S) -> Self {
        Self { answers }
    }

    /// True iff at least one AND-group has every clause true.
    pub fn evaluate(&self, expr: &TriggerExpression) -> bool {
        expr.groups.iter().any(|group| self.evaluate_group(group))
    }

    fn evaluate_group(&self, group: &AndGroup) -> bool {
        group
            .clauses
            .iter()
            .all(|clause| self.evaluate_clause(clause).1)
    }

    /// Evaluates the trigger and records the outcome of every clause that was visited.
    pub fn trace(&self, expr: &TriggerExpression) -> TriggerTrace {
        let groups: Vec<GroupTrace> = expr
            .groups
            .iter()
            .map(|group| {
                let mut failed = false;
                let clauses = group
                    .clauses
                    .iter()
                    .map(|clause| {
                        if failed {
                            return ClauseTrace::NotEvaluated {
                                source: clause.source.clone(),
                            };
                        }
                        let (left, outcome) = self.evaluate_clause(clause);
                        failed = !outcome;
                        ClauseTrace::Evaluated {
                            source: clause.source.clone(),
                            node_id: clause.node_id().map(str::to_string),
                            left,
                            outcome,
                        }
                    })
                    .collect();
                GroupTrace {
                    clauses,
                    outcome: !failed,
                }
            })
            .collect();

        TriggerTrace {
            source: expr.source.clone(),
            outcome: groups.iter().any(|g| g.outcome),
            groups,
        }
    }

    /// Returns the coerced left value (if any) and the clause outcome.
    fn evaluate_clause(&self, clause: &Clause) -> (Option<TypedValue>, bool) {
        match &clause.kind {
            ClauseKind::Constant(value) => (None, *value),
            ClauseKind::Invalid => (None, false),
            ClauseKind::Contains { node_id, literal } => {
                let Some(left) = self.answers.typed_answer(node_id) else {
                    return (None, false);
                };
                let outcome = left.folded().contains(&literal.folded());
                (Some(left), outcome)
            }
            ClauseKind::Compare {
                node_id,
                op,
                literal,
            } => {
                let Some(left) = self.answers.typed_answer(node_id) else {
                    return (None, false);
                };
                let outcome = compare(&left, *op, literal);
                (Some(left), outcome)
            }
        }
    }
}

fn compare(left: &TypedValue, op: ComparisonOp, literal: &Literal) -> bool {
    if op == ComparisonOp::Equal {
        return equals(left, literal);
    }
    match (left.as_number(), literal.as_number()) {
        (Some(l), Some(r)) => op.compare_numbers(l, r),
        _ => false,
    }
}

/// Case-insensitive textual equality. A boolean answer also matches any boolean
/// token on the right, so `smoker == No` holds for a `no` answer.
fn equals(left: &TypedValue, literal: &Literal) -> bool {
    if let Some(l) = left.as_bool() {
        let right = match literal {
            Literal::Bool(b) => Some(*b),
            Literal::Text(s) => coerce_bool(s),
            Literal::Number(_) => None,
        };
        if let Some(r) = right {
            return l == r;
        }
    }
    left.folded() == literal.folded()
}
