//! Service configuration types.
//!
//! [`ApiConfig`] is the single source of truth for runtime settings.  It is
//! built once in `main.rs` from CLI flags, `APP_*` environment variables and
//! an optional `.env` file, then handed to the server.  Nothing reads the
//! environment after startup.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./wpa_supplicant.conf";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// All runtime configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// The `wpa_supplicant.conf` every request reads and rewrites.
    pub config_path: PathBuf,
}

impl Default for ApiConfig {
    /// | Field       | Default                  |
    /// |-------------|--------------------------|
    /// | bind_addr   | `127.0.0.1:8000`         |
    /// | config_path | `./wpa_supplicant.conf`  |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
