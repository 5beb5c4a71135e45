//! wpa-update - add, update or remove a network in `wpa_supplicant.conf`.
//!
//! # Usage
//!
//! ```text
//! wpa-update [OPTIONS]
//!
//! Options:
//!   --file-path <PATH>       Configuration file [default: /etc/wpa_supplicant/wpa_supplicant.conf]
//!   --new-ssid <SSID>        Network to add or update (requires --new-password)
//!   --new-password <PASS>    Passphrase for --new-ssid, 8–63 characters
//!   --delete-ssid <SSID>     Network to remove; wins over --new-ssid
//! ```
//!
//! # Environment variable overrides
//!
//! `--file-path` falls back to `APP_WPA_SUPPLICANT_FILE_PATH`, which may also
//! be set in a `.env` file in the working directory.  An explicit flag wins
//! over the environment, and the environment wins over `.env`.
//!
//! # Exit status
//!
//! | Status | Meaning                                                        |
//! |--------|----------------------------------------------------------------|
//! | 0      | the file was updated                                           |
//! | 1      | the operation was rejected; the file was not modified          |
//! | 2      | usage error (no action given, or an incomplete SSID/password)  |

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{error::ErrorKind, CommandFactory, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use wpa_core::{CredentialService, FileConfigStore, Operation, Outcome};

/// Default configuration path on Debian-family systems.
const DEFAULT_FILE_PATH: &str = "/etc/wpa_supplicant/wpa_supplicant.conf";

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Add, update or remove Wi-Fi networks in a wpa_supplicant configuration file.
#[derive(Debug, Parser)]
#[command(name = "wpa-update", version)]
struct Cli {
    /// Path to the wpa_supplicant.conf file.
    #[arg(long, default_value = DEFAULT_FILE_PATH, env = "APP_WPA_SUPPLICANT_FILE_PATH")]
    file_path: PathBuf,

    /// New SSID to be added or updated.
    #[arg(long)]
    new_ssid: Option<String>,

    /// Password for the new SSID.
    #[arg(long)]
    new_password: Option<String>,

    /// SSID to be removed.
    #[arg(long)]
    delete_ssid: Option<String>,
}

impl Cli {
    /// Resolves the flags into a single credential operation.
    ///
    /// `--delete-ssid` takes priority when both actions are supplied.
    ///
    /// # Errors
    ///
    /// Returns a clap usage error when no action flag is given, or when only
    /// one of `--new-ssid` / `--new-password` is.
    fn operation(&self) -> Result<Operation, clap::Error> {
        if let Some(ssid) = &self.delete_ssid {
            if self.new_ssid.is_some() || self.new_password.is_some() {
                warn!("--delete-ssid given together with --new-ssid/--new-password; deleting only");
            }
            return Ok(Operation::Delete { ssid: ssid.clone() });
        }

        match (&self.new_ssid, &self.new_password) {
            (Some(ssid), Some(password)) => Ok(Operation::Upsert {
                ssid: ssid.clone(),
                password: password.clone(),
            }),
            (None, None) => Err(usage_error(
                "No arguments provided. Use --help to display the available options.",
            )),
            (Some(_), None) => Err(usage_error("--new-ssid requires --new-password")),
            (None, Some(_)) => Err(usage_error("--new-password requires --new-ssid")),
        }
    }
}

fn usage_error(message: &str) -> clap::Error {
    Cli::command().error(ErrorKind::MissingRequiredArgument, message)
}

// ── Command execution ─────────────────────────────────────────────────────────

/// Applies `op` to the file at `path` and returns the confirmation line.
fn run(path: &Path, op: Operation) -> anyhow::Result<String> {
    let ssid = match &op {
        Operation::Upsert { ssid, .. } | Operation::Delete { ssid } => ssid.clone(),
    };

    debug!(path = %path.display(), "applying credential operation");
    let service = CredentialService::new(FileConfigStore::new(path));
    let outcome = service.execute(op)?;

    Ok(match outcome {
        Outcome::Created => format!("Added network '{ssid}' to {}", path.display()),
        Outcome::Updated => format!("Updated password for network '{ssid}' in {}", path.display()),
        Outcome::Deleted { removed } => format!(
            "Removed {removed} network block(s) for '{ssid}' from {}",
            path.display()
        ),
    })
}

/// Loads `.env` into the process environment without overriding variables
/// that are already set.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("ignoring unreadable .env file: {e}"),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the confirmation line.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Must run before parsing so clap's `env` fallback sees .env values.
    load_dotenv();

    let cli = Cli::parse();
    let op = match cli.operation() {
        Ok(op) => op,
        Err(e) => e.exit(),
    };

    match run(&cli.file_path, op) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
