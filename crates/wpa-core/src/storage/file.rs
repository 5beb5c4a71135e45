//! File-backed [`ConfigStore`].
//!
//! Saving never rewrites the target in place.  The new text goes to a
//! temporary file in the same directory, is flushed to disk, and is then
//! renamed over the target.  A crash mid-write leaves either the old file or
//! the new one, never a mix of both.  The temporary file inherits the
//! target's permissions so a `0600` configuration stays `0600`.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{ConfigStore, StoreError};
use crate::domain::document::ConfigDocument;
use crate::format::{parser::parse, serializer::serialize};

/// A `wpa_supplicant.conf` on disk.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> StoreError {
        StoreError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }

    /// Directory the temporary file is created in.  Must be on the same
    /// file system as the target for the rename to be atomic.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<ConfigDocument, StoreError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        debug!(path = %self.path.display(), bytes = text.len(), "read configuration");

        parse(&text).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, doc: &ConfigDocument) -> Result<(), StoreError> {
        let text = serialize(doc);

        let mut tmp = NamedTempFile::new_in(self.parent_dir()).map_err(|e| self.unavailable(e))?;

        // Keep the target's permissions; a new file keeps tempfile's 0600.
        if let Ok(meta) = std::fs::metadata(&self.path) {
            std::fs::set_permissions(tmp.path(), meta.permissions())
                .map_err(|e| self.unavailable(e))?;
        }

        tmp.write_all(text.as_bytes())
            .map_err(|e| self.unavailable(e))?;
        tmp.as_file().sync_all().map_err(|e| self.unavailable(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.unavailable(e.error))?;

        info!(
            path = %self.path.display(),
            networks = doc.networks.len(),
            "wrote configuration"
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
