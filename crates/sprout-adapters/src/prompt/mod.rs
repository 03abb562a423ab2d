//! Prompt adapters.
//!
//! The production (terminal) prompt lives in the CLI crate; this module
//! holds the scripted test double.

mod scripted;

pub use scripted::{ScriptedAnswer, ScriptedPrompt};
