//! Application services - use case implementations.

pub mod collect_service;
pub mod generate_service;

pub use collect_service::AnswerCollector;
pub use generate_service::GenerateService;
