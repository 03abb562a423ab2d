//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprout-adapters` crate and the CLI provide implementations.

use std::path::Path;

use crate::domain::QuestionSpec;
use crate::error::SproutResult;

/// Port for asking a single question.
///
/// Implemented by:
/// - `sprout_cli::prompt::TermPrompt` (dialoguer, production)
/// - `sprout_adapters::prompt::ScriptedPrompt` (testing)
///
/// ## Design Notes
///
/// - One method per question shape; the collector owns the sequencing and
///   the re-prompt loop, so implementations stay dumb
/// - Cancellation (EOF, interrupt) is reported as an error, never as a
///   made-up answer
pub trait Prompt: Send + Sync {
    /// Ask for a free-text line.
    fn input(&self, question: &QuestionSpec) -> SproutResult<String>;

    /// Ask for a single choice; returns the selected index into `options`.
    fn choose(&self, question: &QuestionSpec, options: &[&str]) -> SproutResult<usize>;

    /// Ask a yes/no question.
    fn confirm(&self, question: &QuestionSpec, default: bool) -> SproutResult<bool>;

    /// Show a validation message before the question is asked again.
    fn invalid(&self, message: &str) -> SproutResult<()>;
}

/// Port for the deterministic formatting pass.
///
/// Implemented by:
/// - `sprout_adapters::formatter::SimpleFormatter` (fixed config)
pub trait SourceFormatter: Send + Sync {
    /// Format serialized source text.
    ///
    /// Must be deterministic and must fail (rather than guess) on
    /// malformed input.
    fn format(&self, source: &str) -> SproutResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// Deliberately a single operation: the tool writes exactly one file and
/// performs no directory creation or existence checks. A pre-existing file
/// at the path is overwritten; a missing directory is a write failure.
pub trait Filesystem: Send + Sync {
    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()>;
}
