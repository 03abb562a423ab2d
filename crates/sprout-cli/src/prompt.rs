//! Terminal prompt adapter backed by dialoguer.
//!
//! Implements the core `Prompt` port for a real TTY. The collector owns the
//! question order and the re-prompt loop; this adapter only knows how to ask
//! one question and how to tell cancellation apart from I/O failure.

use std::io;

use console::{Term, style};
use dialoguer::{
    Confirm, Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};

use sprout_core::{
    application::{ApplicationError, ports::Prompt},
    domain::QuestionSpec,
    error::{SproutError, SproutResult},
};

/// Dialoguer-backed prompt for interactive runs.
pub struct TermPrompt {
    theme: Box<dyn Theme + Send + Sync>,
    err_term: Term,
    no_color: bool,
}

impl TermPrompt {
    /// Create a prompt; `no_color` switches to the undecorated theme.
    pub fn new(no_color: bool) -> Self {
        let theme: Box<dyn Theme + Send + Sync> = if no_color {
            Box::new(SimpleTheme)
        } else {
            Box::new(ColorfulTheme::default())
        };
        Self {
            theme,
            err_term: Term::stderr(),
            no_color,
        }
    }
}

impl Prompt for TermPrompt {
    fn input(&self, question: &QuestionSpec) -> SproutResult<String> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(question.prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(map_prompt_error)
    }

    fn choose(&self, question: &QuestionSpec, options: &[&str]) -> SproutResult<usize> {
        Select::with_theme(self.theme.as_ref())
            .with_prompt(question.prompt)
            .items(options)
            .default(0)
            .interact()
            .map_err(map_prompt_error)
    }

    fn confirm(&self, question: &QuestionSpec, default: bool) -> SproutResult<bool> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(question.prompt)
            .default(default)
            .interact()
            .map_err(map_prompt_error)
    }

    fn invalid(&self, message: &str) -> SproutResult<()> {
        let line = if self.no_color {
            format!("\u{2717} {message}")
        } else {
            format!("{} {}", style("\u{2717}").red().bold(), style(message).red())
        };
        self.err_term
            .write_line(&line)
            .map_err(|e| map_prompt_error(dialoguer::Error::IO(e)))
    }
}

/// Ctrl-C / closed stdin read as cancellation; everything else is a
/// prompt failure.
fn map_prompt_error(e: dialoguer::Error) -> SproutError {
    match e {
        dialoguer::Error::IO(io_err) => match io_err.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => {
                ApplicationError::Cancelled.into()
            }
            _ => ApplicationError::PromptFailed {
                reason: io_err.to_string(),
            }
            .into(),
        },
        #[allow(unreachable_patterns)]
        other => ApplicationError::PromptFailed {
            reason: other.to_string(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_io_maps_to_cancellation() {
        let err = map_prompt_error(dialoguer::Error::IO(io::Error::new(
            io::ErrorKind::Interrupted,
            "ctrl-c",
        )));
        assert!(err.is_cancelled());
    }

    #[test]
    fn eof_maps_to_cancellation() {
        let err = map_prompt_error(dialoguer::Error::IO(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
        assert!(err.is_cancelled());
    }

    #[test]
    fn other_io_maps_to_prompt_failure() {
        let err = map_prompt_error(dialoguer::Error::IO(io::Error::other("not a terminal")));
        assert!(!err.is_cancelled());
        assert!(err.to_string().contains("not a terminal"));
    }
}
