use std::{path::PathBuf, sync::Arc, time::Duration};
use todo_app_backend::persist_snapshot;
use todo_core::InMemoryStore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Saves the store to `path` off the async runtime.
pub async fn save_snapshot(store: Arc<InMemoryStore>, path: PathBuf) -> anyhow::Result<usize> {
    let saved = tokio::task::spawn_blocking(move || persist_snapshot(&store, &path)).await??;

    Ok(saved)
}

/// Periodically saves the store until `shutdown_token` is cancelled.
pub fn spawn_snapshot_task(
    store: Arc<InMemoryStore>,
    path: PathBuf,
    every: Duration,
    shutdown_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // the first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = shutdown_token.cancelled() => break,
                _ = ticker.tick() => {
                    if let Err(err) = save_snapshot(store.clone(), path.clone()).await {
                        tracing::error!("[snapshot] Periodic snapshot failed: {err}");
                    }
                }
            }
        }
    })
}
