use crate::api::ApiResponse;
use todo_core::{Todo, TodoFilter, TodoInput, TodoPatch};

pub const TODO_DELETED_MESSAGE: &str = "Todo deleted successfully";

pub type CreateTodoRequest = TodoInput;

pub type CreateTodoResponse = ApiResponse<Todo>;

pub type UpdateTodoRequest = TodoPatch;

pub type UpdateTodoResponse = ApiResponse<Todo>;

pub type GetTodoResponse = ApiResponse<Todo>;

pub type ToggleTodoResponse = ApiResponse<Todo>;

pub type DeleteTodoResponse = ApiResponse;

pub type ListTodosResponse = ApiResponse<Vec<Todo>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTodosQuery {
    pub completed: Option<String>,
    pub priority: Option<String>,
}

impl ListTodosQuery {
    /// Picks the filter parameters out of decoded query pairs. The first
    /// occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "completed" => &mut query.completed,
                "priority" => &mut query.priority,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        query
    }

    pub fn into_filter(self) -> TodoFilter {
        TodoFilter::from_query(self.completed.as_deref(), self.priority.as_deref())
    }
}
