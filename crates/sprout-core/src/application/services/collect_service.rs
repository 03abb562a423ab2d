//! Answer Collector - the interactive question pipeline.
//!
//! Walks the ordered question list one question at a time through the
//! `Prompt` port, applying each question's validator and normalizer:
//! 1. Ask the question (input / choice / confirm)
//! 2. On validation failure: show the message, ask the same question again
//! 3. On success: normalize and move to the next question
//!
//! Cancellation anywhere aborts the whole collection as a single failure -
//! no partial answer record ever escapes.

use tracing::{debug, instrument};

use crate::{
    application::ports::Prompt,
    domain::{
        Answer, ComponentKind, ComponentSpec, DomainError, Extension, QuestionId, QuestionKind,
        QuestionSpec, component_questions,
    },
    error::{SproutError, SproutResult},
};

/// Collects and validates the five answers of the component flow.
pub struct AnswerCollector {
    prompt: Box<dyn Prompt>,
    connected_default: bool,
}

impl AnswerCollector {
    /// Create a collector over the given prompt adapter.
    pub fn new(prompt: Box<dyn Prompt>) -> Self {
        Self {
            prompt,
            connected_default: true,
        }
    }

    /// Override the pre-selected answer of the confirm question.
    pub fn with_connected_default(mut self, default: bool) -> Self {
        self.connected_default = default;
        self
    }

    /// Run the pipeline to completion and build the answer record.
    ///
    /// The only error paths are cancellation / prompt failure (the whole
    /// collection fails, nothing partial survives); per-field validation
    /// failures are recovered locally by re-asking.
    #[instrument(skip_all)]
    pub fn collect(&self) -> SproutResult<ComponentSpec> {
        let questions = component_questions(self.connected_default);

        let mut name = None;
        let mut kind = None;
        let mut connected = None;
        let mut extension = None;
        let mut directory = None;

        for question in &questions {
            let answer = self.ask(question)?;
            debug!(question = question.id.as_str(), "Answer accepted");

            match (question.id, answer) {
                (QuestionId::Name, Answer::Text(value)) => name = Some(value),
                (QuestionId::Kind, Answer::Choice(index)) => {
                    kind = Some(pick(&ComponentKind::ALL, index, question.id)?);
                }
                (QuestionId::Connected, Answer::Flag(value)) => connected = Some(value),
                (QuestionId::Extension, Answer::Choice(index)) => {
                    extension = Some(pick(&Extension::ALL, index, question.id)?);
                }
                (QuestionId::Directory, Answer::Text(value)) => directory = Some(value),
                (id, _) => {
                    return Err(DomainError::AnswerShapeMismatch {
                        field: id.as_str(),
                    }
                    .into());
                }
            }
        }

        let spec = ComponentSpec::new(
            take(name, QuestionId::Name)?,
            take(kind, QuestionId::Kind)?,
            take(connected, QuestionId::Connected)?,
            take(extension, QuestionId::Extension)?,
            take(directory, QuestionId::Directory)?,
        )?;

        debug!(component = %spec, "Collection complete");
        Ok(spec)
    }

    /// Ask one question, looping until its validator accepts the answer.
    fn ask(&self, question: &QuestionSpec) -> SproutResult<Answer> {
        match question.kind {
            QuestionKind::Input {
                validate,
                normalize,
            } => loop {
                let raw = self.prompt.input(question)?;
                if let Some(validate) = validate {
                    if let Err(message) = validate(&raw) {
                        self.prompt.invalid(&message)?;
                        continue;
                    }
                }
                let value = match normalize {
                    Some(normalize) => normalize(&raw),
                    None => raw,
                };
                break Ok(Answer::Text(value));
            },
            QuestionKind::Choice { options } => {
                self.prompt.choose(question, options).map(Answer::Choice)
            }
            QuestionKind::Confirm { default } => {
                self.prompt.confirm(question, default).map(Answer::Flag)
            }
        }
    }
}

fn pick<T: Copy>(options: &[T], index: usize, id: QuestionId) -> SproutResult<T> {
    options
        .get(index)
        .copied()
        .ok_or_else(|| {
            DomainError::ChoiceOutOfRange {
                field: id.as_str(),
                index,
            }
            .into()
        })
}

fn take<T>(slot: Option<T>, id: QuestionId) -> SproutResult<T> {
    slot.ok_or_else(|| {
        SproutError::Domain(DomainError::MissingAnswer {
            field: id.as_str(),
        })
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
