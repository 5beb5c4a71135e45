//! Serializer for [`ConfigDocument`].
//!
//! Output layout:
//!
//! ```text
//! key=value            one line per preamble entry, in stored order
//! network={
//! \tkey=value          one tab-indented line per attribute
//! }
//! ```
//!
//! The parser does not need the tab, but standard tooling that reads this file
//! expects it, so it is always emitted.

use std::fmt::Write as _;

use super::{BLOCK_CLOSE, BLOCK_OPEN};
use crate::domain::document::ConfigDocument;

/// Renders `doc` as `wpa_supplicant.conf` text.
///
/// Every line, including the last, ends with `\n`.  An empty document renders
/// as the empty string.
pub fn serialize(doc: &ConfigDocument) -> String {
    let mut out = String::new();

    for (key, value) in doc.preamble.iter() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{key}={value}");
    }

    for network in &doc.networks {
        out.push_str(BLOCK_OPEN);
        out.push('\n');
        for (key, value) in network.attributes().iter() {
            let _ = writeln!(out, "\t{key}={value}");
        }
        out.push_str(BLOCK_CLOSE);
        out.push('\n');
    }

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::NetworkBlock;
    use crate::format::parser::parse;

    #[test]
    fn test_serialize_empty_document_is_empty_string() {
        assert_eq!(serialize(&ConfigDocument::new()), "");
    }

    #[test]
    fn test_serialize_uses_tab_indentation() {
        // Arrange
        let mut doc = ConfigDocument::new();
        doc.preamble.insert("update_config", "1");
        doc.networks.push(NetworkBlock::new("Home", "abc"));

        // Act
        let text = serialize(&doc);

        // Assert
        assert_eq!(text, "update_config=1\nnetwork={\n\tssid=\"Home\"\n\tpsk=abc\n}\n");
    }

    #[test]
    fn test_serialize_normalises_space_indentation_to_tabs() {
        let doc = parse("network={\n    ssid=\"A\"\n    psk=1\n}\n").unwrap();
        assert_eq!(serialize(&doc), "network={\n\tssid=\"A\"\n\tpsk=1\n}\n");
    }

    #[test]
    fn test_display_matches_serialize() {
        let doc = parse("country=GB\nnetwork={\n\tssid=\"A\"\n}\n").unwrap();
        assert_eq!(doc.to_string(), serialize(&doc));
    }

    #[test]
    fn test_round_trip_preserves_well_formed_text() {
        let text = "ctrl_interface=DIR=/var/run/wpa_supplicant GROUP=netdev\n\
                    update_config=1\n\
                    country=GB\n\
                    network={\n\
                    \tssid=\"Office\"\n\
                    \tpsk=abc\n\
                    \tkey_mgmt=WPA-PSK\n\
                    }\n\
                    network={\n\
                    \tssid=\"Cafe\"\n\
                    \tkey_mgmt=NONE\n\
                    }\n";

        assert_eq!(serialize(&parse(text).unwrap()), text);
    }
}
