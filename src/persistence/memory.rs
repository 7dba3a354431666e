use std::cell::RefCell;
use std::io;

use super::{Serializer, StoreError};

/// Keeps the payload in memory. Nothing survives the process.
///
/// Reading before anything was written fails the same way a missing file does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value`, as if it had been written earlier.
    pub fn with_value(value: serde_json::Value) -> Self {
        Self {
            value: RefCell::new(Some(value)),
        }
    }
}

impl Serializer for MemoryStore {
    fn read(&self) -> Result<serde_json::Value, StoreError> {
        self.value.borrow().clone().ok_or_else(|| {
            StoreError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "nothing has been saved yet",
            ))
        })
    }

    fn write(&self, value: &serde_json::Value) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(value.clone());
        Ok(())
    }
}
