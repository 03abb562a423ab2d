//! Sprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprout
//! component scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           sprout-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (AnswerCollector, GenerateService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Prompt, Formatter, Files)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sprout-adapters (Infrastructure)     │
//! │ (LocalFilesystem, SimpleFormatter, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ComponentSpec, SourceModule, Quest.)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprout_core::{
//!     application::{AnswerCollector, GenerateService},
//!     domain::{ComponentKind, ComponentSpec, Extension},
//! };
//!
//! // 1. Build a spec (normally collected interactively)
//! let spec = ComponentSpec::new(
//!     "my button",
//!     ComponentKind::Function,
//!     false,
//!     Extension::Js,
//!     "",
//! )
//! .unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(formatter, filesystem);
//! let path = service.generate(&spec).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AnswerCollector, GenerateService,
        ports::{Filesystem, Prompt, SourceFormatter},
    };
    pub use crate::domain::{
        ComponentKind, ComponentSpec, Extension, QuestionId, QuestionKind, QuestionSpec,
        SourceModule, component_questions,
    };
    pub use crate::error::{SproutError, SproutResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
