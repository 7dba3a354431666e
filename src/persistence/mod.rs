//! Durable storage for a whole catalog.
//!
//! A [`Serializer`] moves the catalog as one opaque JSON value. It knows
//! nothing about records; the catalog checks that what comes back has the
//! right shape.

mod json;
mod memory;

pub use json::JsonFile;
pub use memory::MemoryStore;

use std::rc::Rc;

use thiserror::Error;

/// Errors raised while saving or loading a catalog.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored data could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("catalog could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored id {0} leaves no room for new ids")]
    IdOverflow(u32),
}

/// Reads and writes a catalog payload.
pub trait Serializer {
    /// Returns the last written payload.
    ///
    /// Fails with [`StoreError::Io`] when the storage cannot be read and with
    /// [`StoreError::Decode`] when it does not hold valid JSON.
    fn read(&self) -> Result<serde_json::Value, StoreError>;

    /// Replaces the stored payload.
    fn write(&self, value: &serde_json::Value) -> Result<(), StoreError>;
}

impl<S: Serializer + ?Sized> Serializer for Rc<S> {
    fn read(&self) -> Result<serde_json::Value, StoreError> {
        (**self).read()
    }

    fn write(&self, value: &serde_json::Value) -> Result<(), StoreError> {
        (**self).write(value)
    }
}
