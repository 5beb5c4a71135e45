//! wpa-api - HTTP service entry point.
//!
//! # Usage
//!
//! ```text
//! wpa-api [OPTIONS]
//!
//! Options:
//!   --bind-addr <ADDR>   Listen address [default: 127.0.0.1:8000]
//!   --file-path <PATH>   Configuration file [default: ./wpa_supplicant.conf]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                        | Default                  |
//! |---------------------------------|--------------------------|
//! | `APP_BIND_ADDR`                 | `127.0.0.1:8000`         |
//! | `APP_WPA_SUPPLICANT_FILE_PATH`  | `./wpa_supplicant.conf`  |
//!
//! Both may also be set in a `.env` file in the working directory.  Flags win
//! over the environment, and the environment wins over `.env`.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use wpa_api::domain::config::{ApiConfig, DEFAULT_BIND_ADDR, DEFAULT_CONFIG_PATH};
use wpa_api::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// HTTP service for managing networks in a wpa_supplicant configuration file.
#[derive(Debug, Parser)]
#[command(name = "wpa-api", version)]
struct Cli {
    /// Address and port to listen on.
    #[arg(long, default_value = DEFAULT_BIND_ADDR, env = "APP_BIND_ADDR")]
    bind_addr: SocketAddr,

    /// Path to the wpa_supplicant.conf file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, env = "APP_WPA_SUPPLICANT_FILE_PATH")]
    file_path: PathBuf,
}

impl Cli {
    fn into_api_config(self) -> ApiConfig {
        ApiConfig {
            bind_addr: self.bind_addr,
            config_path: self.file_path,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Also installs the `log` bridge, so actix's request Logger shows up here.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Must run before parsing so clap's `env` fallback sees .env values.
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("ignoring unreadable .env file: {e}"),
    }

    let config = Cli::parse().into_api_config();

    info!(
        "wpa-api starting: bind={}, file={}",
        config.bind_addr,
        config.config_path.display()
    );

    run_server(config).await?;

    info!("wpa-api stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
