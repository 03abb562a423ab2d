//! Application layer: use-case orchestration over the domain.
//!
//! Services coordinate the domain through ports (traits); adapters in
//! `sprout-adapters` and the CLI provide the implementations.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{AnswerCollector, GenerateService};
