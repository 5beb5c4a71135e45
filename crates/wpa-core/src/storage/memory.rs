//! In-memory [`ConfigStore`] for tests.
//!
//! Holds the configuration as text, so loads go through the real parser and
//! saves through the real serializer, exactly as with a file.

use std::path::PathBuf;
use std::sync::Mutex;

use super::{ConfigStore, StoreError};
use crate::domain::document::ConfigDocument;
use crate::format::{parser::parse, serializer::serialize};

/// A configuration held in memory.  `None` behaves like a missing file.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    text: Mutex<Option<String>>,
    saves: Mutex<u32>,
}

impl MemoryConfigStore {
    /// Creates a store holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(Some(text.into())),
            saves: Mutex::new(0),
        }
    }

    /// Creates a store that reports the configuration as unavailable.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Current stored text.
    pub fn text(&self) -> Option<String> {
        self.text.lock().expect("lock poisoned").clone()
    }

    /// Number of successful [`ConfigStore::save`] calls.
    pub fn save_count(&self) -> u32 {
        *self.saves.lock().expect("lock poisoned")
    }

    fn unavailable() -> StoreError {
        StoreError::Unavailable {
            path: PathBuf::from("<memory>"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no configuration stored"),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<ConfigDocument, StoreError> {
        let text = self.text().ok_or_else(Self::unavailable)?;
        parse(&text).map_err(|source| StoreError::Malformed {
            path: PathBuf::from("<memory>"),
            source,
        })
    }

    fn save(&self, doc: &ConfigDocument) -> Result<(), StoreError> {
        *self.text.lock().expect("lock poisoned") = Some(serialize(doc));
        *self.saves.lock().expect("lock poisoned") += 1;
        Ok(())
    }
}
