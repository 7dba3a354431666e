use std::fs;
use std::path::PathBuf;

use super::{Serializer, StoreError};

/// Pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Serializer for JsonFile {
    fn read(&self) -> Result<serde_json::Value, StoreError> {
        let content = fs::read_to_string(&self.path)?;
        let value = serde_json::from_str(&content).map_err(StoreError::Decode)?;
        tracing::debug!(path = %self.path.display(), "Read catalog file");
        Ok(value)
    }

    fn write(&self, value: &serde_json::Value) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(value).map_err(StoreError::Encode)?;
        fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "Wrote catalog file");
        Ok(())
    }
}
