//! Error types for skill groups.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with skill groups.
#[derive(Debug, Error)]
pub enum SkillError {
    /// Failed to read or write a group file.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Path of the file or directory involved.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A group file exists but does not hold a valid skill mapping.
    #[error("failed to parse skill file at {path}: {source}")]
    Parse {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize a group before writing it.
    #[error("failed to encode skill group '{group}': {source}")]
    Encode {
        /// Name of the group being written.
        group: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Skill not found in a group.
    #[error("skill '{name}' not found in group '{group}'")]
    SkillNotFound {
        /// Name of the skill that wasn't found.
        name: String,
        /// Group that was searched.
        group: String,
    },

    /// Group file does not exist.
    #[error("group '{group}' not found")]
    GroupNotFound {
        /// Name of the missing group.
        group: String,
    },

    /// Input rejected before touching storage.
    #[error("invalid skill data in {source_name}: {reason}")]
    Validation {
        /// File or prompt the data came from.
        source_name: String,
        /// Reason why it's invalid.
        reason: String,
    },

    /// Reading an answer from the user failed.
    #[error("failed to read from the terminal: {0}")]
    Prompt(#[source] std::io::Error),

    /// Argument outside what an operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SkillError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn validation(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error names something that does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SkillNotFound { .. } | Self::GroupNotFound { .. })
    }

    /// Whether this error is caused by user input rather than the environment.
    ///
    /// The command line reports these as plain failures instead of crashing.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::SkillNotFound { .. }
                | Self::GroupNotFound { .. }
                | Self::Validation { .. }
                | Self::InvalidArgument(_)
        )
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, SkillError>;
