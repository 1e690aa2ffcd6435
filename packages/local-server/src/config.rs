use clap::Parser;
use std::{path::PathBuf, time::Duration};
use tracing_core::LevelFilter;

const DEFAULT_LISTEN_IP_ADDR: &str = "127.0.0.1";
const DEFAULT_LISTEN_PORT: u16 = 5000;

/// Serves the todo REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "TODO_HOST", default_value = DEFAULT_LISTEN_IP_ADDR)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_LISTEN_PORT)]
    pub port: u16,

    /// JSON file the todos are restored from at startup and saved to at shutdown.
    /// Without it, todos only live as long as the process.
    #[arg(long, env = "TODO_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Seconds between background snapshots of the data file, 0 disables them.
    #[arg(long, env = "TODO_SNAPSHOT_INTERVAL_SECS", default_value_t = 30)]
    pub snapshot_interval_secs: u64,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, env = "TODO_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn snapshot_interval(&self) -> Option<Duration> {
        (self.snapshot_interval_secs > 0).then(|| Duration::from_secs(self.snapshot_interval_secs))
    }
}
