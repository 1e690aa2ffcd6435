mod todo_routes;
mod todo_types;

pub use todo_routes::*;
pub use todo_types::*;

use std::{fs, io, path::Path};
use thiserror::Error;
use todo_core::{InMemoryStore, StoreError, Todo};

pub type SnapshotResult<T = ()> = Result<T, SnapshotError>;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error(r#"Failed to access the todo snapshot file: {0}."#)]
    Io(#[from] io::Error),

    #[error(r#"The todo snapshot file is not valid JSON: {0}."#)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Writes every stored todo to `path`, replacing the previous snapshot.
pub fn persist_snapshot(store: &InMemoryStore, path: &Path) -> SnapshotResult<usize> {
    tracing::info!(path = %path.display(), "Saving todo data to snapshot...");

    let data = store.snapshot()?;
    let bytes = serde_json::to_vec_pretty(&data)?;

    // written beside the target, then renamed over it
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, path)?;

    tracing::info!(count = data.len(), "Successfully saved todo data");

    Ok(data.len())
}

/// Loads the store saved by [persist_snapshot]. A missing file yields an empty store.
pub fn restore_snapshot(path: &Path) -> SnapshotResult<InMemoryStore> {
    tracing::info!(path = %path.display(), "Restoring todo data from snapshot...");

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::info!("No snapshot found, starting with an empty store");
            return Ok(InMemoryStore::new());
        }
        Err(err) => return Err(err.into()),
    };

    let data: Vec<Todo> = serde_json::from_slice(&bytes)?;
    tracing::info!(count = data.len(), "Successfully restored todo data");

    Ok(InMemoryStore::from_snapshot(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{NewTodo, Priority, TodoFilter, TodoStore};

    #[test]
    fn snapshot_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        let store = InMemoryStore::new();
        store
            .insert(NewTodo {
                title: "Persist me".to_string(),
                description: "across restarts".to_string(),
                priority: Priority::High,
            })
            .unwrap();

        assert_eq!(persist_snapshot(&store, &path).unwrap(), 1);
        let restored = restore_snapshot(&path).unwrap();

        assert_eq!(restored.snapshot().unwrap(), store.snapshot().unwrap());
        assert_eq!(restored.find(&TodoFilter::all()).unwrap().len(), 1);
    }

    #[test]
    fn missing_snapshot_restores_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();

        let restored = restore_snapshot(&dir.path().join("absent.json")).unwrap();

        assert!(restored.is_empty().unwrap());
    }

    #[test]
    fn corrupt_snapshot_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, b"not json").unwrap();

        assert!(matches!(restore_snapshot(&path), Err(SnapshotError::Json(_))));
    }
}
