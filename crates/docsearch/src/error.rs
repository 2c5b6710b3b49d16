use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The session actor is gone; the handle can no longer deliver input.
    #[error("search session stopped")]
    SessionStopped,

    #[error("config error for {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("config migration from version {0} is not supported")]
    ConfigMigration(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
