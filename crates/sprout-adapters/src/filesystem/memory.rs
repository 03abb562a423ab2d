//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sprout_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
///
/// Clones share storage, so a test can hand one clone to a service and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let files = self.files.read().ok()?;
        files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let files = self.files.read().unwrap();
        files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        self.files.write().unwrap().clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> sprout_core::error::SproutResult<()> {
        let mut files = self.files.write().map_err(|_| {
            sprout_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Storage lock poisoned".into(),
            }
        })?;

        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();

        clone
            .write_file(Path::new("./Widget.js"), "content")
            .unwrap();

        assert_eq!(
            fs.read_file(Path::new("./Widget.js")).as_deref(),
            Some("content")
        );
        assert_eq!(fs.list_files().len(), 1);
    }

    #[test]
    fn overwrites_silently() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("a.js"), "one").unwrap();
        fs.write_file(Path::new("a.js"), "two").unwrap();
        assert_eq!(fs.read_file(Path::new("a.js")).as_deref(), Some("two"));
    }
}
