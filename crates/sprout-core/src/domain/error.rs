use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("`{value}` is not a valid file path")]
    InvalidDirectoryPath { value: String },

    #[error("unknown component kind: {0}")]
    UnknownComponentKind(String),

    #[error("unknown file extension: {0}")]
    UnknownExtension(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("no answer collected for '{field}'")]
    MissingAnswer { field: &'static str },

    #[error("answer for '{field}' has the wrong shape")]
    AnswerShapeMismatch { field: &'static str },

    #[error("choice index {index} out of range for '{field}'")]
    ChoiceOutOfRange { field: &'static str, index: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDirectoryPath { value } => vec![
                format!("'{}' contains characters no filesystem accepts", value),
                "Use a relative directory like src/components".into(),
                "Leave the answer empty to use the current directory".into(),
            ],
            Self::UnknownComponentKind(_) => vec![
                "Component kinds are 'Class' and 'Function'".into(),
            ],
            Self::UnknownExtension(_) => vec![
                "Supported extensions are '.js' and '.jsx'".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDirectoryPath { .. }
            | Self::UnknownComponentKind(_)
            | Self::UnknownExtension(_) => ErrorCategory::Validation,
            Self::MissingAnswer { .. }
            | Self::AnswerShapeMismatch { .. }
            | Self::ChoiceOutOfRange { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
