use crate::answer::TypedValue;

/// A record of how a trigger was evaluated, clause by clause.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerTrace {
    pub source: String,
    pub groups: Vec<GroupTrace>,
    pub outcome: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupTrace {
    pub clauses: Vec<ClauseTrace>,
    pub outcome: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClauseTrace {
    Evaluated {
        source: String,
        /// The referenced node, for clauses that read an answer.
        node_id: Option<String>,
        /// The coerced answer that was compared, if one was found.
        left: Option<TypedValue>,
        outcome: bool,
    },
    /// Skipped because an earlier clause in the group already failed.
    NotEvaluated { source: String },
}

impl ClauseTrace {
    pub fn outcome(&self) -> Option<bool> {
        match self {
            ClauseTrace::Evaluated { outcome, .. } => Some(*outcome),
            ClauseTrace::NotEvaluated { .. } => None,
        }
    }
}

impl TriggerTrace {
    /// The first group that evaluated true, if any.
    pub fn decisive_group(&self) -> Option<&GroupTrace> {
        self.groups.iter().find(|g| g.outcome)
    }
}
