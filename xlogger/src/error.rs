use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    /// A logger is already active and the request would reconfigure it.
    #[error("logger already initialized (active file: {active:?}, requested file: {requested:?})")]
    AlreadyInitialized {
        requested: Option<PathBuf>,
        active: Option<PathBuf>,
    },
    #[error("unable to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The logger was destroyed, or never created where lazy creation is not allowed.
    #[error("logger is not initialized")]
    NotInitialized,
    #[error("failed to write log record: {0}")]
    Write(#[from] io::Error),
    #[error("unable to install the log bridge: {0}")]
    Bridge(#[from] log::SetLoggerError),
}
