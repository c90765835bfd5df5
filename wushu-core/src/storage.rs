//! Persistence boundary for the event list.
//!
//! The store hands over one raw text blob and reads one back; where it lives is up to
//! the implementation. `FileStorage` keeps it in a JSON file, `MemoryStorage` keeps it
//! in memory for tests and throwaway sessions.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::WushuResult;

/// Well-known key the event list is stored under.
pub const STORAGE_KEY: &str = "wushuEvents";

/// Read/write access to the stored event blob.
pub trait Storage {
    /// Returns the stored blob, or None if nothing has been stored yet.
    fn read_all(&self) -> WushuResult<Option<String>>;

    /// Replace the stored blob.
    fn write_all(&mut self, raw: &str) -> WushuResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    content: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(raw: impl Into<String>) -> Self {
        MemoryStorage {
            content: Some(raw.into()),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn read_all(&self) -> WushuResult<Option<String>> {
        Ok(self.content.clone())
    }

    fn write_all(&mut self, raw: &str) -> WushuResult<()> {
        self.content = Some(raw.to_string());
        Ok(())
    }
}

/// Stores the blob at `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path, key: &str) -> Self {
        FileStorage {
            path: dir.join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for FileStorage {
    fn read_all(&self) -> WushuResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&mut self, raw: &str) -> WushuResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        // Replace atomically through a sibling temp file
        let temp = self.temp_path();
        std::fs::write(&temp, raw)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
