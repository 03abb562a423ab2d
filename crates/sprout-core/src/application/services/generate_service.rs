//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Build the source module for the spec
//! 2. Serialize and run the formatting pass
//! 3. Write the result to the computed path
//!
//! The formatter runs before the write, so a formatting failure leaves the
//! filesystem untouched.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::ports::{Filesystem, SourceFormatter},
    domain::{ComponentSpec, SourceModule},
    error::SproutResult,
};

/// Main generation service.
///
/// Orchestrates the build, format, and write workflow.
pub struct GenerateService {
    formatter: Box<dyn SourceFormatter>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(formatter: Box<dyn SourceFormatter>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            formatter,
            filesystem,
        }
    }

    /// Generate the component file for a spec.
    ///
    /// Returns the path the file was written to. The path is computed by
    /// concatenation (`directory + name + extension`); a pre-existing file
    /// there is overwritten, and a missing directory surfaces as the write
    /// error it causes.
    #[instrument(skip_all, fields(component = %spec.name(), path = %spec.file_path()))]
    pub fn generate(&self, spec: &ComponentSpec) -> SproutResult<PathBuf> {
        info!("Generating {}", spec);

        let module = SourceModule::for_component(spec);
        let source = module.render();

        let formatted = self.formatter.format(&source)?;

        let path = PathBuf::from(spec.file_path());
        self.filesystem.write_file(&path, &formatted)?;

        info!(path = %path.display(), "Component written");
        Ok(path)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
