//! Storage infrastructure: where a [`ConfigDocument`] is loaded from and saved to.
//!
//! The [`ConfigStore`] trait is the seam between the credential service and
//! the file system:
//!
//! - [`file::FileConfigStore`] reads and atomically replaces a real
//!   `wpa_supplicant.conf`.
//! - [`memory::MemoryConfigStore`] keeps the text in memory so tests can
//!   drive the service without touching the disk.
//!
//! # Concurrency
//!
//! Every operation is a full load → mutate → save cycle and nothing is
//! cached between cycles.  Stores do not lock by default, so two processes
//! updating the same file race and the last writer wins.
//! [`ConfigStore::exclusive`] wraps each cycle; a store that needs mutual
//! exclusion (for example an advisory `flock` held for the duration)
//! overrides it.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::document::ConfigDocument;
use crate::format::parser::ParseError;

pub mod file;
pub mod memory;

pub use file::FileConfigStore;
pub use memory::MemoryConfigStore;

/// Error type for loading or saving a configuration.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file is missing, unreadable, or unwritable.
    #[error("configuration at {path} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is structurally invalid.
    #[error("configuration at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Loads and saves a [`ConfigDocument`].
pub trait ConfigStore {
    /// Reads and parses the current configuration.
    fn load(&self) -> Result<ConfigDocument, StoreError>;

    /// Serializes `doc` and replaces the stored configuration with it.
    fn save(&self, doc: &ConfigDocument) -> Result<(), StoreError>;

    /// Runs one read-modify-write cycle.
    ///
    /// The default runs `cycle` directly with no lock held.
    fn exclusive<T>(&self, cycle: impl FnOnce(&Self) -> T) -> T
    where
        Self: Sized,
    {
        cycle(self)
    }
}
