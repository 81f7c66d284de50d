use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "TASKTRACK_LOG";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// CLI: stderr, or the configured file
    Stderr,
    /// TUI: the configured file only, never the terminal
    FileOnly,
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file: {0}")]
    Open(#[from] std::io::Error),
    #[error("could not install logger: {0}")]
    Init(String),
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global tracing subscriber.
///
/// With `LogTarget::FileOnly` and no file configured, nothing is installed
/// and log events are dropped.
pub fn init_logging(config: &LogConfig, target: LogTarget) -> Result<(), LogError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    match (&config.file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| LogError::Init(e.to_string()))
        }
        (None, LogTarget::Stderr) => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string())),
        (None, LogTarget::FileOnly) => Ok(()),
    }
}
