//! Application layer shared by the CLI and HTTP adapters.
//!
//! - **`service`** – [`service::CredentialService`] runs one complete
//!   load → apply → save cycle per call against a
//!   [`ConfigStore`](crate::storage::ConfigStore), and maps every lower-level
//!   failure onto the [`service::WpaError`] taxonomy the adapters report.

pub mod service;
