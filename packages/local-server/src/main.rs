mod config;
mod gateway;
mod snapshot;

use clap::Parser;
use std::sync::Arc;
use todo_app_backend::{TodoApp, restore_snapshot};
use todo_core::InMemoryStore;
use tokio_util::sync::CancellationToken;

use crate::{
    config::ServerConfig,
    gateway::{init_tracing, start_gateway},
    snapshot::{save_snapshot, spawn_snapshot_task},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(config.log_level);

    let shutdown_token = CancellationToken::new();

    let store = Arc::new(match &config.data_file {
        Some(path) => restore_snapshot(path)?,
        None => InMemoryStore::new(),
    });

    let snapshot_task = match (&config.data_file, config.snapshot_interval()) {
        (Some(path), Some(every)) => Some(spawn_snapshot_task(
            store.clone(),
            path.clone(),
            every,
            shutdown_token.clone(),
        )),
        _ => None,
    };

    let app = TodoApp::new(store.clone());
    let (router, listener) = start_gateway(&config.listen_addr(), app).await?;

    tracing::info!("Todo server running at: http://{}", listener.local_addr()?);
    println!("Press Ctrl+C to stop");

    // Setup graceful shutdown signal
    let shutdown_signal = {
        let shutdown_token = shutdown_token.clone();

        async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down...");
            shutdown_token.cancel();
        }
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    // covers the case where serve returned without the signal firing
    shutdown_token.cancel();
    if let Some(snapshot_task) = snapshot_task {
        snapshot_task.await?;
    }

    if let Some(path) = config.data_file {
        save_snapshot(store, path).await?;
    }

    Ok(())
}
