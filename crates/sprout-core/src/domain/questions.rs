//! Ordered question specifications for the interactive flow.
//!
//! The prompt sequence is data, not control flow: each question carries its
//! id, prompt text, input kind, and (for free-text questions) an optional
//! validator and normalizer. The collector in the application layer walks
//! this list one question at a time; adapters only know how to ask a single
//! question. Adding a question means adding an entry here — the collector
//! and the prompt adapters need no change.

use crate::domain::component::{ComponentKind, Extension};
use crate::domain::normalize::{is_valid_path, normalize_directory, to_pascal_case};

/// Stable identity of a question, used to route its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionId {
    Name,
    Kind,
    Connected,
    Extension,
    Directory,
}

impl QuestionId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Kind => "kind",
            Self::Connected => "connected",
            Self::Extension => "extension",
            Self::Directory => "directory",
        }
    }
}

/// Validator for free-text answers: `Err` carries the re-prompt message.
pub type Validator = fn(&str) -> Result<(), String>;

/// Normalizer applied to an accepted free-text answer.
pub type Normalizer = fn(&str) -> String;

/// How a question is asked and what shape its answer takes.
#[derive(Debug, Clone, Copy)]
pub enum QuestionKind {
    /// Free-text line input.
    Input {
        validate: Option<Validator>,
        normalize: Option<Normalizer>,
    },
    /// Single choice from a closed set; the answer is an index into `options`.
    Choice { options: &'static [&'static str] },
    /// Yes/no confirmation.
    Confirm { default: bool },
}

/// One question in the flow.
#[derive(Debug, Clone, Copy)]
pub struct QuestionSpec {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

/// A collected answer, still keyed by position in the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(usize),
    Flag(bool),
}

/// Choice labels for the kind question, aligned with [`ComponentKind::ALL`].
pub const KIND_CHOICES: [&str; 2] = [
    ComponentKind::ALL[0].label(),
    ComponentKind::ALL[1].label(),
];

/// Choice labels for the extension question, aligned with [`Extension::ALL`].
pub const EXTENSION_CHOICES: [&str; 2] = [
    Extension::ALL[0].as_str(),
    Extension::ALL[1].as_str(),
];

fn normalize_name(value: &str) -> String {
    to_pascal_case(value)
}

fn validate_directory(value: &str) -> Result<(), String> {
    if is_valid_path(value) {
        Ok(())
    } else {
        Err(format!("Uh oh! `{value}` is not a valid file path."))
    }
}

fn normalize_directory_answer(value: &str) -> String {
    normalize_directory(value)
}

/// The component flow, in its fixed order.
///
/// `connected_default` is the pre-selected answer for the confirm question
/// (configurable; the interactive answer always wins).
pub fn component_questions(connected_default: bool) -> [QuestionSpec; 5] {
    [
        QuestionSpec {
            id: QuestionId::Name,
            prompt: "Name:",
            kind: QuestionKind::Input {
                validate: None,
                normalize: Some(normalize_name),
            },
        },
        QuestionSpec {
            id: QuestionId::Kind,
            prompt: "Type:",
            kind: QuestionKind::Choice {
                options: &KIND_CHOICES,
            },
        },
        QuestionSpec {
            id: QuestionId::Connected,
            prompt: "Connected to Redux?",
            kind: QuestionKind::Confirm {
                default: connected_default,
            },
        },
        QuestionSpec {
            id: QuestionId::Extension,
            prompt: "Extension:",
            kind: QuestionKind::Choice {
                options: &EXTENSION_CHOICES,
            },
        },
        QuestionSpec {
            id: QuestionId::Directory,
            prompt: "Directory path:",
            kind: QuestionKind::Input {
                validate: Some(validate_directory),
                normalize: Some(normalize_directory_answer),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_labels_align_with_variant_order() {
        assert_eq!(KIND_CHOICES, ["Class", "Function"]);
        assert_eq!(EXTENSION_CHOICES, [".js", ".jsx"]);
    }

    #[test]
    fn name_question_normalizes_but_never_rejects() {
        let questions = component_questions(true);
        let QuestionKind::Input {
            validate,
            normalize,
        } = questions[0].kind
        else {
            panic!("name must be an input question");
        };

        assert!(validate.is_none());
        assert_eq!(normalize.unwrap()("my button"), "MyButton");
    }

    #[test]
    fn confirm_default_is_configurable() {
        let questions = component_questions(false);
        let QuestionKind::Confirm { default } = questions[2].kind else {
            panic!("connected must be a confirm question");
        };
        assert!(!default);
    }

    #[test]
    fn directory_validator_names_offending_value() {
        let err = validate_directory("\0bad").unwrap_err();
        assert!(err.contains("\0bad"));
        assert!(err.contains("not a valid file path"));
    }
}
