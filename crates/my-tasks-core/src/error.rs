//! Error types for loading parameters, running tasks and writing metadata.

use std::path::{Path, PathBuf};

/// Result alias used throughout the crate.
pub type TaskResult<T> = Result<T, TaskError>;

/// Task errors.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Parameter file missing or unreadable.
    #[error("failed to read parameter file {}: {source}", .path.display())]
    ParamsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parameter file is not a JSON object matching the task's parameters.
    #[error("invalid parameters for task {task} in {}: {message}", .path.display())]
    InvalidParams {
        task: String,
        path: PathBuf,
        message: String,
    },

    /// Writing an output artifact failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata could not be serialized or persisted.
    #[error("failed to write metadata to {}: {message}", .path.display())]
    Metadata { path: PathBuf, message: String },

    /// No task registered under this name.
    #[error("unknown task: {name}")]
    UnknownTask { name: String },
}

impl TaskError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Bad input from the caller
            Self::ParamsRead { .. } => 2,
            Self::InvalidParams { .. } => 2,
            Self::UnknownTask { .. } => 2,

            // The task itself failed
            Self::Io { .. } => 1,
            Self::Metadata { .. } => 1,
        }
    }
}
