use crate::{NewTodo, StoreError, StoreResult, Todo, TodoChanges, TodoFilter, TodoId};
use chrono::Utc;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Persistence collaborator for todo documents.
///
/// Every operation is a single atomic store call. Lookups by id report a miss
/// with `None` rather than an error.
pub trait TodoStore: Send + Sync {
    /// Stores a new document, assigning its id and timestamps.
    fn insert(&self, new_todo: NewTodo) -> StoreResult<Todo>;

    /// Returns the matching documents, most recently created first.
    fn find(&self, filter: &TodoFilter) -> StoreResult<Vec<Todo>>;

    fn find_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>>;

    fn update_by_id(&self, id: &TodoId, changes: &TodoChanges) -> StoreResult<Option<Todo>>;

    /// Flips `completed`, reading and writing the document in one call.
    fn toggle_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>>;

    fn delete_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>>;
}

impl<T: TodoStore + ?Sized> TodoStore for Arc<T> {
    fn insert(&self, new_todo: NewTodo) -> StoreResult<Todo> {
        (**self).insert(new_todo)
    }

    fn find(&self, filter: &TodoFilter) -> StoreResult<Vec<Todo>> {
        (**self).find(filter)
    }

    fn find_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>> {
        (**self).find_by_id(id)
    }

    fn update_by_id(&self, id: &TodoId, changes: &TodoChanges) -> StoreResult<Option<Todo>> {
        (**self).update_by_id(id, changes)
    }

    fn toggle_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>> {
        (**self).toggle_by_id(id)
    }

    fn delete_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>> {
        (**self).delete_by_id(id)
    }
}

/// Document store kept in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RwLock<Vec<Todo>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(documents: Vec<Todo>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// All documents in insertion order.
    pub fn snapshot(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Todo>>> {
        self.documents
            .read()
            .map_err(|_| StoreError::Unavailable("document lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Todo>>> {
        self.documents
            .write()
            .map_err(|_| StoreError::Unavailable("document lock poisoned".to_string()))
    }
}

impl TodoStore for InMemoryStore {
    fn insert(&self, new_todo: NewTodo) -> StoreResult<Todo> {
        let now = Utc::now();
        let todo = Todo {
            id: TodoId::generate(),
            title: new_todo.title,
            description: new_todo.description,
            priority: new_todo.priority,
            completed: false,
            created_at: now,
            updated_at: now,
        };

        self.write()?.push(todo.clone());

        Ok(todo)
    }

    fn find(&self, filter: &TodoFilter) -> StoreResult<Vec<Todo>> {
        let documents = self.read()?;

        // reversed insertion order so the stable sort breaks timestamp ties newest first
        let mut todos = documents
            .iter()
            .rev()
            .filter(|todo| filter.matches(todo))
            .cloned()
            .collect::<Vec<_>>();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(todos)
    }

    fn find_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>> {
        Ok(self.read()?.iter().find(|todo| todo.id == *id).cloned())
    }

    fn update_by_id(&self, id: &TodoId, changes: &TodoChanges) -> StoreResult<Option<Todo>> {
        let mut documents = self.write()?;

        let Some(todo) = documents.iter_mut().find(|todo| todo.id == *id) else {
            return Ok(None);
        };

        changes.apply_to(todo);
        todo.updated_at = Utc::now();

        Ok(Some(todo.clone()))
    }

    fn toggle_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>> {
        let mut documents = self.write()?;

        let Some(todo) = documents.iter_mut().find(|todo| todo.id == *id) else {
            return Ok(None);
        };

        todo.completed = todo.state().toggled().is_completed();
        todo.updated_at = Utc::now();

        Ok(Some(todo.clone()))
    }

    fn delete_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>> {
        let mut documents = self.write()?;

        let position = documents.iter().position(|todo| todo.id == *id);

        Ok(position.map(|index| documents.remove(index)))
    }
}
