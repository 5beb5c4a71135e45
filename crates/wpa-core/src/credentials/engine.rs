//! Credential engine: create, update and delete network blocks.
//!
//! [`apply`] is the only way the tools mutate a [`ConfigDocument`].  It
//! validates its input first and touches the document only once validation
//! has passed, so a rejected operation leaves the document exactly as it was.
//!
//! # Invariants after every successful call
//!
//! - No two network blocks share an SSID.  An upsert updates the first block
//!   that matches and drops any later duplicates a hand-edited file may carry.
//! - Block order and every attribute other than `psk` are preserved.

use thiserror::Error;
use tracing::{debug, info};

use super::psk::derive_psk;
use crate::domain::document::{ConfigDocument, NetworkBlock};

/// Shortest accepted WPA passphrase, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Longest accepted WPA passphrase, in characters.
pub const MAX_PASSWORD_LEN: usize = 63;

/// Longest SSID allowed by IEEE 802.11, in bytes.
pub const MAX_SSID_BYTES: usize = 32;

/// Errors raised by [`apply`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// The passphrase is outside the 8–63 character range.
    #[error("password must be between 8 and 63 characters, got {length}")]
    InvalidPassword { length: usize },

    /// The SSID cannot be stored in the file as given.
    #[error("invalid ssid: {0}")]
    InvalidSsid(String),

    /// No network block carries the requested SSID.
    #[error("no network with ssid '{0}'")]
    SsidNotFound(String),
}

/// A single mutation requested by an adapter.  SSIDs are bare (unquoted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Create the network or replace its PSK.
    Upsert { ssid: String, password: String },
    /// Remove every block carrying the SSID.
    Delete { ssid: String },
}

/// What [`apply`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new block was appended.
    Created,
    /// An existing block's `psk` was replaced.
    Updated,
    /// `removed` blocks were dropped.
    Deleted { removed: usize },
}

/// Applies `op` to `doc`.
///
/// # Errors
///
/// - [`CredentialError::InvalidPassword`] if an upsert's password length is
///   outside 8–63 characters.
/// - [`CredentialError::InvalidSsid`] if the SSID is empty, longer than 32
///   bytes, or contains a double quote or line break.
/// - [`CredentialError::SsidNotFound`] if a delete matches no block.
///
/// The document is unchanged whenever an error is returned.
///
/// # Examples
///
/// ```rust
/// use wpa_core::{apply, ConfigDocument, Operation, Outcome};
///
/// let mut doc = ConfigDocument::new();
/// let op = Operation::Upsert { ssid: "Home".into(), password: "password123".into() };
/// assert_eq!(apply(&mut doc, &op), Ok(Outcome::Created));
/// assert_eq!(doc.networks[0].ssid(), Some("\"Home\""));
/// ```
pub fn apply(doc: &mut ConfigDocument, op: &Operation) -> Result<Outcome, CredentialError> {
    match op {
        Operation::Upsert { ssid, password } => upsert(doc, ssid, password),
        Operation::Delete { ssid } => delete(doc, ssid),
    }
}

fn upsert(doc: &mut ConfigDocument, ssid: &str, password: &str) -> Result<Outcome, CredentialError> {
    validate_ssid(ssid)?;
    validate_password(password)?;

    let psk = derive_psk(password, ssid);

    let Some(first) = doc.networks.iter().position(|n| n.matches_ssid(ssid)) else {
        doc.networks.push(NetworkBlock::new(ssid, psk));
        info!(ssid, "added network");
        return Ok(Outcome::Created);
    };

    doc.networks[first].set_psk(psk);

    // Drop later duplicates so the SSID is unique again.
    let mut idx = 0;
    doc.networks.retain(|n| {
        let keep = idx <= first || !n.matches_ssid(ssid);
        idx += 1;
        keep
    });

    info!(ssid, "updated network password");
    Ok(Outcome::Updated)
}

fn delete(doc: &mut ConfigDocument, ssid: &str) -> Result<Outcome, CredentialError> {
    let before = doc.networks.len();
    doc.networks.retain(|n| !n.matches_ssid(ssid));
    let removed = before - doc.networks.len();

    if removed == 0 {
        debug!(ssid, "delete matched no network");
        return Err(CredentialError::SsidNotFound(ssid.to_string()));
    }

    info!(ssid, removed, "deleted network");
    Ok(Outcome::Deleted { removed })
}

/// Checks the passphrase length (printable ASCII is the caller's concern).
pub fn validate_password(password: &str) -> Result<(), CredentialError> {
    let length = password.chars().count();
    if (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&length) {
        Ok(())
    } else {
        Err(CredentialError::InvalidPassword { length })
    }
}

/// Checks that `ssid` can be written as `ssid="<ssid>"` on a single line.
pub fn validate_ssid(ssid: &str) -> Result<(), CredentialError> {
    if ssid.is_empty() {
        return Err(CredentialError::InvalidSsid("ssid must not be empty".into()));
    }
    if ssid.len() > MAX_SSID_BYTES {
        return Err(CredentialError::InvalidSsid(format!(
            "ssid is {} bytes, the limit is {MAX_SSID_BYTES}",
            ssid.len()
        )));
    }
    if ssid.contains(['"', '\r', '\n']) {
        return Err(CredentialError::InvalidSsid(
            "ssid must not contain double quotes or line breaks".into(),
        ));
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
