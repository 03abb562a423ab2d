//! Scripted prompt adapter for testing.

use std::{
    collections::VecDeque,
    sync::{Arc, RwLock},
};

use sprout_core::{
    application::{ApplicationError, ports::Prompt},
    domain::QuestionSpec,
    error::SproutResult,
};

/// One pre-recorded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Text(String),
    Choice(usize),
    Flag(bool),
}

impl ScriptedAnswer {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// Prompt that replays a canned answer script.
///
/// Clones share state, so a test can hand one clone to a collector and
/// inspect recorded rejections on the other. A question asked after the
/// script runs out behaves like end-of-input: the run is cancelled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    inner: Arc<RwLock<ScriptedPromptInner>>,
}

#[derive(Debug, Default)]
struct ScriptedPromptInner {
    script: VecDeque<ScriptedAnswer>,
    rejections: Vec<String>,
}

impl ScriptedPrompt {
    /// Create a prompt that will play back `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ScriptedPromptInner {
                script: answers.into_iter().collect(),
                rejections: Vec::new(),
            })),
        }
    }

    /// Validation messages shown so far (testing helper).
    pub fn rejections(&self) -> Vec<String> {
        self.inner.read().unwrap().rejections.clone()
    }

    fn next(&self) -> SproutResult<ScriptedAnswer> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        // Script exhausted == the user closed stdin.
        inner
            .script
            .pop_front()
            .ok_or_else(|| ApplicationError::Cancelled.into())
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&self, question: &QuestionSpec) -> SproutResult<String> {
        match self.next()? {
            ScriptedAnswer::Text(value) => Ok(value),
            other => Err(shape_error(question, &other)),
        }
    }

    fn choose(&self, question: &QuestionSpec, _options: &[&str]) -> SproutResult<usize> {
        match self.next()? {
            ScriptedAnswer::Choice(index) => Ok(index),
            other => Err(shape_error(question, &other)),
        }
    }

    fn confirm(&self, question: &QuestionSpec, _default: bool) -> SproutResult<bool> {
        match self.next()? {
            ScriptedAnswer::Flag(value) => Ok(value),
            other => Err(shape_error(question, &other)),
        }
    }

    fn invalid(&self, message: &str) -> SproutResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        inner.rejections.push(message.to_string());
        Ok(())
    }
}

fn shape_error(
    question: &QuestionSpec,
    answer: &ScriptedAnswer,
) -> sprout_core::error::SproutError {
    ApplicationError::PromptFailed {
        reason: format!(
            "scripted answer {answer:?} does not fit question '{}'",
            question.id.as_str()
        ),
    }
    .into()
}

fn lock_error() -> sprout_core::error::SproutError {
    ApplicationError::PromptFailed {
        reason: "script lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::domain::component_questions;

    #[test]
    fn plays_answers_in_order() {
        let questions = component_questions(true);
        let prompt = ScriptedPrompt::new([
            ScriptedAnswer::text("widget"),
            ScriptedAnswer::Choice(1),
        ]);

        assert_eq!(prompt.input(&questions[0]).unwrap(), "widget");
        assert_eq!(prompt.choose(&questions[1], &["a", "b"]).unwrap(), 1);
    }

    #[test]
    fn exhausted_script_cancels() {
        let questions = component_questions(true);
        let prompt = ScriptedPrompt::new([]);

        let err = prompt.input(&questions[0]).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn wrong_shape_is_a_prompt_failure() {
        let questions = component_questions(true);
        let prompt = ScriptedPrompt::new([ScriptedAnswer::Flag(true)]);

        let err = prompt.input(&questions[0]).unwrap_err();
        assert!(!err.is_cancelled());
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn rejections_are_recorded_across_clones() {
        let prompt = ScriptedPrompt::new([]);
        let clone = prompt.clone();

        clone.invalid("bad path").unwrap();
        assert_eq!(prompt.rejections(), vec!["bad path".to_string()]);
    }
}
