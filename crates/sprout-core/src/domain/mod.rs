//! Core domain layer for Sprout.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, prompting, and formatting concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services

pub mod component;
pub mod error;
pub mod normalize;
pub mod questions;
pub mod source;

// Re-exports for convenience
pub use component::{ComponentKind, ComponentSpec, Extension};
pub use error::{DomainError, ErrorCategory};
pub use questions::{
    Answer, QuestionId, QuestionKind, QuestionSpec, component_questions,
};
pub use source::SourceModule;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn component_kind_parses_correctly() {
        assert_eq!(
            ComponentKind::from_str("class").unwrap(),
            ComponentKind::Class
        );
        assert_eq!(
            ComponentKind::from_str("Function").unwrap(),
            ComponentKind::Function
        );
        assert!(ComponentKind::from_str("hook").is_err());
    }

    #[test]
    fn extension_parses_correctly() {
        assert_eq!(Extension::from_str(".js").unwrap(), Extension::Js);
        assert_eq!(Extension::from_str("jsx").unwrap(), Extension::Jsx);
        assert!(Extension::from_str(".ts").is_err());
    }

    // ========================================================================
    // ComponentSpec Tests
    // ========================================================================

    #[test]
    fn spec_normalizes_name_and_directory() {
        let spec = ComponentSpec::new(
            "my button",
            ComponentKind::Function,
            false,
            Extension::Js,
            "",
        )
        .unwrap();

        assert_eq!(spec.name(), "MyButton");
        assert_eq!(spec.directory(), "./");
        assert_eq!(spec.file_path(), "./MyButton.js");
    }

    #[test]
    fn spec_appends_separator_to_directory() {
        let spec = ComponentSpec::new(
            "user card",
            ComponentKind::Class,
            true,
            Extension::Jsx,
            "src/components",
        )
        .unwrap();

        assert_eq!(spec.directory(), "src/components/");
        assert_eq!(spec.file_path(), "src/components/UserCard.jsx");
    }

    #[test]
    fn spec_rejects_invalid_directory() {
        let result = ComponentSpec::new(
            "thing",
            ComponentKind::Class,
            false,
            Extension::Js,
            "\0bad",
        );

        assert!(matches!(
            result,
            Err(DomainError::InvalidDirectoryPath { .. })
        ));
    }

    // ========================================================================
    // Question Pipeline Tests
    // ========================================================================

    #[test]
    fn questions_are_in_fixed_order() {
        let questions = component_questions(true);
        let ids: Vec<QuestionId> = questions.iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            vec![
                QuestionId::Name,
                QuestionId::Kind,
                QuestionId::Connected,
                QuestionId::Extension,
                QuestionId::Directory,
            ]
        );
    }

    #[test]
    fn directory_question_validates_and_normalizes() {
        let questions = component_questions(true);
        let directory = questions
            .iter()
            .find(|q| q.id == QuestionId::Directory)
            .unwrap();

        let QuestionKind::Input {
            validate: Some(validate),
            normalize: Some(normalize),
        } = directory.kind
        else {
            panic!("directory must be a validated input question");
        };

        assert!(validate("src/components").is_ok());
        assert!(validate("\0bad").is_err());
        assert_eq!(normalize(""), "./");
        assert_eq!(normalize("src"), "src/");
    }
}
