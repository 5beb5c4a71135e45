//! Infrastructure layer for the HTTP service.
//!
//! - **`handlers`** – one actix-web handler per route; each builds a fresh
//!   `CredentialService` and runs the file work on actix's blocking pool.
//! - **`error`** – [`error::ApiError`] and the JSON extractor error hooks.
//! - **`server`** – the route table ([`server::configure`]) and
//!   [`server::run_server`].

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{configure, run_server, ApiState};
