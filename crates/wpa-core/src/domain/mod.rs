//! Domain entities for the wpa_supplicant credential tools.
//!
//! This module contains pure data types with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of the crate describes *what* a configuration file is,
//! independent of how it is read, written, or exposed over HTTP.  Domain code
//! has no file-system or network imports and can be tested in isolation.
//!
//! Code in outer layers (format, storage, application, adapters) depends on the
//! domain, but the domain never depends on them.

/// The configuration document model.
///
/// See [`document::ConfigDocument`] for the main type.
pub mod document;
