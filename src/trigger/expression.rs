use super::parsing;
use std::fmt;

/// A parsed trigger: an OR of AND-groups of clauses.
///
/// Parsing never fails. Clauses the grammar does not match are kept as
/// [`ClauseKind::Invalid`] and evaluate to false.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerExpression {
    pub source: String,
    pub groups: Vec<AndGroup>,
}

/// Clauses joined by `AND`.
#[derive(Debug, Clone, PartialEq)]
pub struct AndGroup {
    pub clauses: Vec<Clause>,
}

/// A single clause together with the trigger text it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub source: String,
    pub kind: ClauseKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClauseKind {
    /// A bare `true` or `false`.
    Constant(bool),
    Contains {
        node_id: String,
        literal: Literal,
    },
    Compare {
        node_id: String,
        op: ComparisonOp,
        literal: Literal,
    },
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Equal,
    GreaterThan,
    GreaterThanOrEqual,
    SmallerThan,
    SmallerThanOrEqual,
}

/// The right-hand side of a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl TriggerExpression {
    pub fn parse(source: &str) -> Self {
        parsing::parse_trigger(source)
    }

    /// A trigger with no groups, as produced by blank text, is never satisfied.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Node identifiers referenced anywhere in the trigger, in order of appearance.
    pub fn referenced_nodes(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for clause in self.groups.iter().flat_map(|g| g.clauses.iter()) {
            if let Some(id) = clause.node_id() {
                if !seen.contains(&id) {
                    seen.push(id);
                }
            }
        }
        seen
    }
}

impl Clause {
    pub fn node_id(&self) -> Option<&str> {
        match &self.kind {
            ClauseKind::Contains { node_id, .. } | ClauseKind::Compare { node_id, .. } => {
                Some(node_id)
            }
            ClauseKind::Constant(_) | ClauseKind::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, ClauseKind::Invalid)
    }
}

impl ComparisonOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::GreaterThan => ">",
            ComparisonOp::GreaterThanOrEqual => ">=",
            ComparisonOp::SmallerThan => "<",
            ComparisonOp::SmallerThanOrEqual => "<=",
        }
    }

    pub(crate) fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(ComparisonOp::Equal),
            ">" => Some(ComparisonOp::GreaterThan),
            ">=" => Some(ComparisonOp::GreaterThanOrEqual),
            "<" => Some(ComparisonOp::SmallerThan),
            "<=" => Some(ComparisonOp::SmallerThanOrEqual),
            _ => None,
        }
    }

    /// Applies an ordering operator to two numbers. `Equal` is textual and never reaches here.
    pub(crate) fn compare_numbers(&self, left: f64, right: f64) -> bool {
        match self {
            ComparisonOp::GreaterThan => left > right,
            ComparisonOp::GreaterThanOrEqual => left >= right,
            ComparisonOp::SmallerThan => left < right,
            ComparisonOp::SmallerThanOrEqual => left <= right,
            ComparisonOp::Equal => left == right,
        }
    }
}

impl Literal {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Text(s) => crate::answer::value::parse_finite(s),
            Literal::Bool(_) => None,
        }
    }

    pub fn folded(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Literal::Text(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for TriggerExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, "\nOR\n")?;
            }
            for (j, clause) in group.clauses.iter().enumerate() {
                if j > 0 {
                    write!(f, " AND ")?;
                }
                write!(f, "{}", clause.source)?;
            }
        }
        Ok(())
    }
}
