use crate::{Priority, Todo};

/// Priority predicate of a [TodoFilter]. A requested value outside the
/// enumeration is kept as `Unrecognized` and matches no todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityMatch {
    Exactly(Priority),
    Unrecognized,
}

/// Conjunctive query over the todo collection. An absent predicate matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub completed: Option<bool>,
    pub priority: Option<PriorityMatch>,
}

impl TodoFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(PriorityMatch::Exactly(priority));
        self
    }

    /// Builds a filter from raw query-string values. Never fails: any
    /// `completed` value other than `"true"` selects pending todos, and an
    /// empty `priority` applies no priority predicate.
    pub fn from_query(completed: Option<&str>, priority: Option<&str>) -> Self {
        let completed = completed.map(|value| value == "true");
        let priority = priority
            .filter(|value| !value.is_empty())
            .map(|value| match value.parse::<Priority>() {
                Ok(priority) => PriorityMatch::Exactly(priority),
                Err(_) => PriorityMatch::Unrecognized,
            });

        Self {
            completed,
            priority,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.completed.is_none_or(|completed| todo.completed == completed)
            && self
                .priority
                .is_none_or(|priority| priority == PriorityMatch::Exactly(todo.priority))
    }
}
