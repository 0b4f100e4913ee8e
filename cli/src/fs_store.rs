//! Directory-backed storage: one file per key.
//!
//! Keys are mapped to file names by replacing anything outside
//! `[A-Za-z0-9_-]` with `_`, so video ids can never escape the directory.

#[cfg(test)]
#[path = "fs_store_test.rs"]
mod fs_store_test;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vidchat::{StorageBackend, StoreError};

#[derive(Debug, Clone)]
pub struct DirBackend {
    root: PathBuf,
}

impl DirBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl StorageBackend for DirBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StoreError::Read(error.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|error| StoreError::Write(error.to_string()))?;
        fs::write(self.path_for(key), value).map_err(|error| StoreError::Write(error.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StoreError::Write(error.to_string())),
        }
    }
}
