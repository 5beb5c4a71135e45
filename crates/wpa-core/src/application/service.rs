//! CredentialService: the read-modify-write use cases.
//!
//! Each public method loads a fresh document, performs exactly one operation,
//! and (for mutations) saves the result.  Nothing survives between calls.
//! When any step fails the store is not written.
//!
//! # Error taxonomy
//!
//! | Variant             | Cause                                   | HTTP | CLI     |
//! |---------------------|-----------------------------------------|------|---------|
//! | `ConfigUnavailable` | file missing, unreadable, unwritable    | 500  | exit 1  |
//! | `MalformedConfig`   | structural parse failure                | 500  | exit 1  |
//! | `InvalidPassword`   | password outside 8–63 characters        | 400  | exit 1  |
//! | `InvalidSsid`       | empty, too long, or unwritable SSID     | 400  | exit 1  |
//! | `SsidNotFound`      | delete/lookup target absent             | 404  | exit 1  |

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::credentials::engine::{apply, CredentialError, Operation, Outcome};
use crate::domain::document::NetworkBlock;
use crate::format::parser::ParseError;
use crate::storage::{ConfigStore, StoreError};

/// Every failure a credential operation can report.
#[derive(Debug, Error)]
pub enum WpaError {
    #[error("configuration file {path} is unavailable: {source}")]
    ConfigUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration file {path} is malformed: {source}")]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("password must be between 8 and 63 characters, got {length}")]
    InvalidPassword { length: usize },

    #[error("invalid ssid: {0}")]
    InvalidSsid(String),

    #[error("no network with ssid '{0}'")]
    SsidNotFound(String),
}

impl From<StoreError> for WpaError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable { path, source } => Self::ConfigUnavailable { path, source },
            StoreError::Malformed { path, source } => Self::MalformedConfig { path, source },
        }
    }
}

impl From<CredentialError> for WpaError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::InvalidPassword { length } => Self::InvalidPassword { length },
            CredentialError::InvalidSsid(reason) => Self::InvalidSsid(reason),
            CredentialError::SsidNotFound(ssid) => Self::SsidNotFound(ssid),
        }
    }
}

/// Credential use cases over a [`ConfigStore`].
#[derive(Debug)]
pub struct CredentialService<S> {
    store: S,
}

impl<S: ConfigStore> CredentialService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Bare SSIDs of every configured network, in file order.
    pub fn list_ssids(&self) -> Result<Vec<String>, WpaError> {
        Ok(self.store.load()?.ssids())
    }

    /// The first network block configured for `ssid`.
    ///
    /// # Errors
    ///
    /// [`WpaError::SsidNotFound`] if no block matches.
    pub fn get_network(&self, ssid: &str) -> Result<NetworkBlock, WpaError> {
        self.store
            .load()?
            .find(ssid)
            .cloned()
            .ok_or_else(|| WpaError::SsidNotFound(ssid.to_string()))
    }

    /// Creates the network or replaces its PSK.
    pub fn upsert(&self, ssid: &str, password: &str) -> Result<Outcome, WpaError> {
        self.execute(Operation::Upsert {
            ssid: ssid.to_string(),
            password: password.to_string(),
        })
    }

    /// Removes every block configured for `ssid`.
    pub fn delete(&self, ssid: &str) -> Result<Outcome, WpaError> {
        self.execute(Operation::Delete {
            ssid: ssid.to_string(),
        })
    }

    /// Runs one load → apply → save cycle.
    pub fn execute(&self, op: Operation) -> Result<Outcome, WpaError> {
        self.store.exclusive(|store| -> Result<Outcome, WpaError> {
            let mut doc = store.load()?;
            let outcome = apply(&mut doc, &op)?;
            store.save(&doc)?;
            debug!(?outcome, "credential operation applied");
            Ok(outcome)
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryConfigStore;

    const SAMPLE: &str = "ctrl_interface=/var/run/wpa_supplicant\nupdate_config=1\n\
                          network={\n\tssid=\"Office\"\n\tpsk=abc\n}\n";

    fn service(text: &str) -> CredentialService<MemoryConfigStore> {
        CredentialService::new(MemoryConfigStore::new(text))
    }

    #[test]
    fn test_list_ssids_strips_quotes() {
        let svc = service(SAMPLE);
        assert_eq!(svc.list_ssids().unwrap(), ["Office"]);
    }

    #[test]
    fn test_get_network_returns_raw_block() {
        let svc = service(SAMPLE);

        let block = svc.get_network("Office").unwrap();

        assert_eq!(block.ssid(), Some("\"Office\""));
        assert_eq!(block.psk(), Some("abc"));
    }

    #[test]
    fn test_get_network_missing_is_not_found() {
        let svc = service(SAMPLE);
        assert!(matches!(
            svc.get_network("Home"),
            Err(WpaError::SsidNotFound(ssid)) if ssid == "Home"
        ));
    }

    #[test]
    fn test_upsert_saves_new_block_after_existing_ones() {
        // Arrange
        let svc = service(SAMPLE);

        // Act
        let outcome = svc.upsert("Home", "password123").unwrap();

        // Assert
        assert_eq!(outcome, Outcome::Created);
        assert_eq!(
            svc.store().text().unwrap(),
            "ctrl_interface=/var/run/wpa_supplicant\nupdate_config=1\n\
             network={\n\tssid=\"Office\"\n\tpsk=abc\n}\n\
             network={\n\tssid=\"Home\"\n\
             \tpsk=ae318f8f8078eb77fd4d4be74122a42c99ccf775b3dca860c5db254fc3dcb767\n}\n"
        );
    }

    #[test]
    fn test_invalid_password_does_not_save() {
        let svc = service(SAMPLE);

        let result = svc.upsert("Home", "short");

        assert!(matches!(result, Err(WpaError::InvalidPassword { length: 5 })));
        assert_eq!(svc.store().save_count(), 0);
        assert_eq!(svc.store().text().as_deref(), Some(SAMPLE));
    }

    #[test]
    fn test_delete_missing_ssid_does_not_save() {
        let svc = service(SAMPLE);

        let result = svc.delete("Home");

        assert!(matches!(result, Err(WpaError::SsidNotFound(_))));
        assert_eq!(svc.store().save_count(), 0);
    }

    #[test]
    fn test_delete_existing_ssid_saves() {
        let svc = service(SAMPLE);

        let outcome = svc.delete("Office").unwrap();

        assert_eq!(outcome, Outcome::Deleted { removed: 1 });
        assert_eq!(
            svc.store().text().unwrap(),
            "ctrl_interface=/var/run/wpa_supplicant\nupdate_config=1\n"
        );
    }

    #[test]
    fn test_missing_configuration_is_unavailable() {
        let svc = CredentialService::new(MemoryConfigStore::missing());
        assert!(matches!(
            svc.upsert("Home", "password123"),
            Err(WpaError::ConfigUnavailable { .. })
        ));
    }

    #[test]
    fn test_malformed_configuration_is_reported_and_not_overwritten() {
        let svc = service("network={\n\tssid=\"A\"\n");

        let result = svc.upsert("Home", "password123");

        assert!(matches!(result, Err(WpaError::MalformedConfig { .. })));
        assert_eq!(svc.store().save_count(), 0);
    }
}
