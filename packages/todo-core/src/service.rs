use crate::{Todo, TodoError, TodoFilter, TodoId, TodoInput, TodoPatch, TodoResult, TodoStore};

/// Todo operations on top of a [TodoStore].
///
/// The service holds no state of its own between calls; every operation
/// validates its input and then issues store calls.
#[derive(Debug, Clone)]
pub struct TodoService<S> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates the input and stores it as a pending todo.
    pub fn create(&self, input: TodoInput) -> TodoResult<Todo> {
        let new_todo = input.validate()?;

        Ok(self.store.insert(new_todo)?)
    }

    pub fn list(&self, filter: &TodoFilter) -> TodoResult<Vec<Todo>> {
        Ok(self.store.find(filter)?)
    }

    pub fn get_by_id(&self, id: &TodoId) -> TodoResult<Todo> {
        self.store.find_by_id(id)?.ok_or(TodoError::NotFound(*id))
    }

    /// Replaces only the fields present in `patch`, validating just those.
    pub fn update(&self, id: &TodoId, patch: TodoPatch) -> TodoResult<Todo> {
        let changes = patch.validate()?;

        self.store
            .update_by_id(id, &changes)?
            .ok_or(TodoError::NotFound(*id))
    }

    pub fn delete(&self, id: &TodoId) -> TodoResult {
        self.store
            .delete_by_id(id)?
            .map(|_| ())
            .ok_or(TodoError::NotFound(*id))
    }

    /// Flips the completion state of a todo in a single store call.
    pub fn toggle_complete(&self, id: &TodoId) -> TodoResult<Todo> {
        self.store
            .toggle_by_id(id)?
            .ok_or(TodoError::NotFound(*id))
    }
}
