//! # wpa-core
//!
//! Shared library for the wpa_supplicant credential tools.  It owns the
//! in-memory model of a `wpa_supplicant.conf` file, the line-oriented parser
//! and serializer for that file, and the credential engine that creates,
//! updates and deletes network blocks.
//!
//! This crate is used by both the command-line tool (`wpa-cli`) and the HTTP
//! service (`wpa-api`).  Neither adapter carries its own copy of the file
//! format code.
//!
//! # Architecture overview (for beginners)
//!
//! A `wpa_supplicant.conf` file looks like this:
//!
//! ```text
//! ctrl_interface=DIR=/var/run/wpa_supplicant GROUP=netdev
//! update_config=1
//! network={
//!         ssid="Home"
//!         psk=ae318f8f8078eb77fd4d4be74122a42c99ccf775b3dca860c5db254fc3dcb767
//! }
//! ```
//!
//! The lines before the first `network={` are the *preamble*: global
//! settings.  Each `network={ ... }` stanza describes one Wi-Fi network.
//!
//! - **`domain`** – The data model: [`ConfigDocument`], [`NetworkBlock`] and
//!   the insertion-ordered [`Attributes`] map.  Key order is preserved because
//!   the file has no other way to express it.
//!
//! - **`format`** – [`parse`] turns file text into a `ConfigDocument`;
//!   [`serialize`] turns it back into text.  The pair round-trips any
//!   well-formed, tab-indented file byte for byte.
//!
//! - **`credentials`** – PSK derivation and the [`apply`] engine that enforces
//!   SSID uniqueness and password rules.
//!
//! - **`storage`** – The [`ConfigStore`] seam and its file-backed
//!   implementation, which replaces the file atomically.
//!
//! - **`application`** – [`CredentialService`], one read-modify-write cycle per
//!   call, and the unified [`WpaError`] taxonomy the adapters report.

pub mod application;
pub mod credentials;
pub mod domain;
pub mod format;
pub mod storage;

// Re-export the most-used types at the crate root so callers can write
// `wpa_core::ConfigDocument` instead of `wpa_core::domain::document::ConfigDocument`.
pub use application::service::{CredentialService, WpaError};
pub use credentials::engine::{apply, CredentialError, Operation, Outcome};
pub use credentials::psk::derive_psk;
pub use domain::document::{quote_ssid, unquote_ssid, Attributes, ConfigDocument, NetworkBlock};
pub use format::parser::{parse, ParseError};
pub use format::serializer::serialize;
pub use storage::{ConfigStore, FileConfigStore, StoreError};
