//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Reading an answer from the prompt failed.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The user aborted the interactive flow (EOF / interrupt).
    #[error("Operation cancelled")]
    Cancelled,

    /// The formatting pass rejected the assembled source.
    ///
    /// The formatter runs before anything is written, so this failure
    /// leaves the filesystem untouched. It indicates a defect in module
    /// assembly, not bad user input.
    #[error("Source formatting failed: {reason}")]
    FormatFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PromptFailed { reason } => vec![
                format!("The prompt could not be read: {}", reason),
                "Run sprout from an interactive terminal".into(),
            ],
            Self::Cancelled => vec![
                "The run was cancelled".into(),
                "No file was written".into(),
            ],
            Self::FormatFailed { .. } => vec![
                "The generated source could not be formatted".into(),
                "This is a bug in sprout, please report it".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that the target directory exists".into(),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::FormatFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
