//! JSON document persistence
//!
//! Stores are written back wholesale after every mutation. Writes go to a
//! sibling temporary file which is then renamed over the target, so a crash
//! mid-write leaves the previous document intact.

use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of one pretty-printed JSON document on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDocument {
    path: PathBuf,
}

impl JsonDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and decode the document. A missing file is an I/O error.
    pub fn read<T: DeserializeOwned>(&self) -> Result<T> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Encode and replace the document
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let mut payload = serde_json::to_vec_pretty(value)?;
        payload.push(b'\n');

        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, &payload)?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!("Wrote {} bytes to {}", payload.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let doc = JsonDocument::new(temp_dir.path().join("doc.json"));

        doc.write(&vec!["a".to_string(), "b".to_string()]).unwrap();
        let back: Vec<String> = doc.read().unwrap();
        assert_eq!(back, vec!["a", "b"]);
    }

    #[test]
    fn test_write_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let doc = JsonDocument::new(temp_dir.path().join("doc.json"));

        doc.write(&vec![1, 2]).unwrap();
        let raw = std::fs::read_to_string(doc.path()).unwrap();
        assert!(raw.contains("[\n"));
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let doc = JsonDocument::new(temp_dir.path().join("doc.json"));

        doc.write(&Vec::<String>::new()).unwrap();
        assert!(doc.exists());
        assert!(!temp_dir.path().join("doc.json.tmp").exists());
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let doc = JsonDocument::new(temp_dir.path().join("missing.json"));
        let result: Result<Vec<String>> = doc.read();
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let doc = JsonDocument::new(temp_dir.path().join("nope").join("doc.json"));
        assert!(matches!(doc.write(&vec![1]), Err(crate::Error::Io(_))));
    }
}
