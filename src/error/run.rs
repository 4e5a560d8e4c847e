use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to start {role} command '{command}': {source}")]
    Spawn {
        role: &'static str,
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to locate the harness executable: {source}")]
    CurrentExe {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to prepare '{}': {source}", path.display())]
    PrepareFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to append to '{}': {source}", path.display())]
    WriteLine {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("System clock is outside the representable nanosecond range.")]
    ClockRange,
}
