//! Domain types for the HTTP service.
//!
//! - **`config`** – [`ApiConfig`], the runtime settings built once at startup.
//! - **`messages`** – JSON request and response bodies.

pub mod config;
pub mod messages;

pub use config::ApiConfig;
