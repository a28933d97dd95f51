use std::path::PathBuf;

use thiserror::Error;

use crate::backend::BackendError;

/// Failures of a workflow step, including client-side validation.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Please enter a target column name.")]
    MissingTarget,
    #[error("Public leaderboard value must be between 0 and 1.")]
    LeaderboardOutOfRange(f64),
    #[error("Please enter both a positive and a negative label.")]
    MissingBinaryLabels,
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Download folder {path} is unavailable: {source}")]
    DownloadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to save {path}: {source}")]
    SaveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Backend(#[from] BackendError),
}
