use clap::ValueEnum;
use todo_core::{Priority, Todo, TodoId};

pub const NO_TODOS_MESSAGE: &str = "No todos yet. Add one above!";

pub const NO_MATCHING_TODOS_MESSAGE: &str = "No todos match the selected filters.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    fn matches(self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !todo.completed,
            StatusFilter::Completed => todo.completed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    fn matches(self, todo: &Todo) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => todo.priority == Priority::Low,
            PriorityFilter::Medium => todo.priority == Priority::Medium,
            PriorityFilter::High => todo.priority == Priority::High,
        }
    }
}

/// Status and priority selections, applied together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoFilters {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
}

impl TodoFilters {
    pub fn matches(&self, todo: &Todo) -> bool {
        self.status.matches(todo) && self.priority.matches(todo)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Client-side view of the todo collection. Everything shown is derived from
/// `todos`, which only changes in response to a server reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TodoState {
    pub fn visible(&self, filters: &TodoFilters) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| filters.matches(todo))
            .collect()
    }

    /// Counts over the whole collection, regardless of the active filters.
    pub fn stats(&self) -> TodoStats {
        let completed = self.todos.iter().filter(|todo| todo.completed).count();

        TodoStats {
            total: self.todos.len(),
            active: self.todos.len() - completed,
            completed,
        }
    }

    /// What to show in place of the list, or `None` when something is visible.
    pub fn empty_message(&self, filters: &TodoFilters) -> Option<&'static str> {
        if self.todos.is_empty() {
            Some(NO_TODOS_MESSAGE)
        } else if !self.todos.iter().any(|todo| filters.matches(todo)) {
            Some(NO_MATCHING_TODOS_MESSAGE)
        } else {
            None
        }
    }

    pub(crate) fn prepend(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    pub(crate) fn replace(&mut self, todo: Todo) {
        if let Some(existing) = self.todos.iter_mut().find(|existing| existing.id == todo.id) {
            *existing = todo;
        }
    }

    pub(crate) fn remove(&mut self, id: TodoId) {
        self.todos.retain(|todo| todo.id != id);
    }
}
