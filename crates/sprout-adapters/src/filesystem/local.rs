//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use sprout_core::{application::ports::Filesystem, error::SproutResult};

/// Production filesystem implementation using `std::fs`.
///
/// Writes exactly the file it is given: no parent-directory creation, no
/// existence check. A missing directory comes back as the io error it
/// causes; an existing file is truncated.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> sprout_core::error::SproutError {
    use sprout_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
