//! Parser for `wpa_supplicant.conf` text.
//!
//! The parser walks the input one line at a time, trimming each line and
//! tracking whether a `network={` block is currently open:
//!
//! ```text
//! ctrl_interface=/var/run/wpa_supplicant   -> preamble
//! network={                                -> open block
//!         ssid="Office"                    -> block attribute
//!         psk=abc                          -> block attribute
//! }                                        -> close block
//! ```
//!
//! Lines without `=` (blank lines, bare comments) and a stray `}` outside a
//! block are skipped, which keeps the parser tolerant of settings it does not
//! know about.  Structural damage is never skipped: a nested or unterminated
//! block, an unsupported block opener, or a block with no `ssid` fails with a
//! [`ParseError`] carrying the offending line number.

use thiserror::Error;
use tracing::debug;

use super::{BLOCK_CLOSE, BLOCK_OPEN};
use crate::domain::document::{Attributes, ConfigDocument, NetworkBlock, SSID_KEY};

/// Structural problems found while parsing.  Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// `network={` appeared while another block was still open.
    #[error("line {line}: network block opened inside the block started on line {opened_at}")]
    NestedBlock { line: usize, opened_at: usize },

    /// The input ended before the block was closed with `}`.
    #[error("network block opened on line {opened_at} is never closed")]
    UnterminatedBlock { opened_at: usize },

    /// A `network=` line that does not carry the opening brace.
    #[error("line {line}: unsupported block syntax {text:?}, expected `network={{`")]
    UnsupportedBlockSyntax { line: usize, text: String },

    /// A closed block has no `ssid` attribute.
    #[error("network block opened on line {opened_at} has no ssid")]
    MissingSsid { opened_at: usize },
}

/// Parses configuration text into a [`ConfigDocument`].
///
/// # Errors
///
/// Returns [`ParseError`] for structural anomalies; see the module docs.
///
/// # Examples
///
/// ```rust
/// let doc = wpa_core::parse("ssid=1\nnetwork={\n\tssid=\"Office\"\n\tpsk=abc\n}\n").unwrap();
/// assert_eq!(doc.preamble.get("ssid"), Some("1"));
/// assert_eq!(doc.networks[0].ssid(), Some("\"Office\""));
/// ```
pub fn parse(text: &str) -> Result<ConfigDocument, ParseError> {
    let mut doc = ConfigDocument::new();
    // The open block's attributes and the line it was opened on.
    let mut current: Option<(Attributes, usize)> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if line.starts_with(BLOCK_OPEN) {
            if let Some((_, opened_at)) = current {
                return Err(ParseError::NestedBlock {
                    line: line_no,
                    opened_at,
                });
            }
            current = Some((Attributes::new(), line_no));
        } else if line.starts_with("network=") {
            return Err(ParseError::UnsupportedBlockSyntax {
                line: line_no,
                text: line.to_string(),
            });
        } else if line.starts_with(BLOCK_CLOSE) && current.is_some() {
            if let Some((attributes, opened_at)) = current.take() {
                if !attributes.contains_key(SSID_KEY) {
                    return Err(ParseError::MissingSsid { opened_at });
                }
                doc.networks.push(NetworkBlock::from_attributes(attributes));
            }
        } else if let Some((key, value)) = line.split_once('=') {
            let target = match current.as_mut() {
                Some((attributes, _)) => attributes,
                None => &mut doc.preamble,
            };
            target.insert(key.trim(), value.trim());
        }
    }

    if let Some((_, opened_at)) = current {
        return Err(ParseError::UnterminatedBlock { opened_at });
    }

    debug!(
        preamble = doc.preamble.len(),
        networks = doc.networks.len(),
        "parsed wpa_supplicant configuration"
    );
    Ok(doc)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
