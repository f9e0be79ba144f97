//! File system port
//!
//! Abstracts the whole-file reads and writes the placement engine performs,
//! so placement logic can be tested against an in-memory implementation.
//!
//! Writes are deliberately thin: no parent-directory creation, so a missing
//! `public/` or `build/` directory surfaces as an error instead of being
//! silently materialized.

use std::io::Write;
use std::path::Path;

use crate::error::{SwError, SwResult};

/// Abstract file system interface
pub trait FileSystem {
    /// Read a file's content as text
    fn read_to_string(&self, path: &Path) -> SwResult<String>;

    /// Write content as a single whole-file write
    fn write(&self, path: &Path, content: &str) -> SwResult<()>;

    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;
}

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> SwResult<String> {
        std::fs::read_to_string(path).map_err(|e| SwError::io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> SwResult<()> {
        // Tempfile + rename in the target directory keeps the write atomic
        // and still fails when the parent directory does not exist.
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| SwError::io(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| SwError::io(path, e))?;
        tmp.persist(path).map_err(|e| SwError::io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
use std::path::PathBuf;

#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<PathBuf, String>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file before exercising the code under test
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
    }

    /// Number of files currently present
    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    /// Content of a file, if present
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> SwResult<String> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            SwError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            )
        })
    }

    fn write(&self, path: &Path, content: &str) -> SwResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
