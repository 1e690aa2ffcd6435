use todo_core::{TodoId, TodoInput};

use crate::{TodoApi, TodoFilters, TodoState};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load todos. Please try again.";

pub const ADD_FAILED_MESSAGE: &str = "Failed to add todo. Please try again.";

pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update todo. Please try again.";

pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete todo. Please try again.";

/// Applies server replies to a [`TodoState`]. A failed action only sets
/// `state.error`; the collection is left as it was.
pub struct TodoController<A> {
    api: A,
    state: TodoState,
    pub filters: TodoFilters,
}

impl<A: TodoApi> TodoController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TodoState::default(),
            filters: TodoFilters::default(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn fetch_todos(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.api.list().await {
            Ok(todos) => self.state.todos = todos,
            Err(err) => {
                tracing::warn!("[fetch_todos] {err}");
                self.state.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }

        self.state.loading = false;
    }

    pub async fn add_todo(&mut self, input: TodoInput) {
        self.state.error = None;

        match self.api.create(input).await {
            Ok(todo) => self.state.prepend(todo),
            Err(err) => {
                tracing::warn!("[add_todo] {err}");
                self.state.error = Some(
                    err.server_message()
                        .unwrap_or(ADD_FAILED_MESSAGE)
                        .to_string(),
                );
            }
        }
    }

    pub async fn toggle_todo(&mut self, id: TodoId) {
        self.state.error = None;

        match self.api.toggle(id).await {
            Ok(todo) => self.state.replace(todo),
            Err(err) => {
                tracing::warn!(%id, "[toggle_todo] {err}");
                self.state.error = Some(UPDATE_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub async fn delete_todo(&mut self, id: TodoId) {
        self.state.error = None;

        match self.api.delete(id).await {
            Ok(()) => self.state.remove(id),
            Err(err) => {
                tracing::warn!(%id, "[delete_todo] {err}");
                self.state.error = Some(DELETE_FAILED_MESSAGE.to_string());
            }
        }
    }
}
