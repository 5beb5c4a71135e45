//! In-memory model of a `wpa_supplicant.conf` file.
//!
//! A [`ConfigDocument`] is built fresh from the file for every operation,
//! mutated by exactly one credential-engine call, serialized, and dropped.
//! Nothing here is cached between operations.
//!
//! # Quoting rule
//!
//! On disk the `ssid` value of a network block carries its surrounding double
//! quotes (`ssid="Home"`), and the model stores it exactly that way.  Callers
//! always pass *bare* SSIDs (`Home`).  Every comparison wraps the caller's
//! value with [`quote_ssid`] before comparing byte for byte; nothing ever
//! strips the stored value to compare.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Attribute name of a network block's SSID.
pub const SSID_KEY: &str = "ssid";

/// Attribute name of a network block's pre-shared key.
pub const PSK_KEY: &str = "psk";

/// Wraps a bare SSID in double quotes, matching the on-disk form.
///
/// ```rust
/// assert_eq!(wpa_core::quote_ssid("Home"), "\"Home\"");
/// ```
pub fn quote_ssid(bare: &str) -> String {
    format!("\"{bare}\"")
}

/// Strips the surrounding double quotes from a stored SSID value.
///
/// Values that are not quoted are returned unchanged.
///
/// ```rust
/// assert_eq!(wpa_core::unquote_ssid("\"Home\""), "Home");
/// assert_eq!(wpa_core::unquote_ssid("Home"), "Home");
/// ```
pub fn unquote_ssid(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}

// ── Attributes ────────────────────────────────────────────────────────────────

/// Insertion-ordered map from setting name to raw value.
///
/// Used for both the preamble and the body of a network block.
///
/// # Why not `HashMap`? (for beginners)
///
/// A `HashMap` iterates in an unspecified order, so writing the file back
/// would shuffle its lines.  A `Vec` of pairs keeps the order the keys were
/// first seen in.  Configuration files hold a handful of keys, so the linear
/// lookup costs nothing measurable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Inserts or overwrites `key`.
    ///
    /// An existing key keeps its position and only its value changes, so a
    /// repeated key in the file ends up with the value of its last occurrence
    /// at the position of its first.  Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over `(key, value)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// Serializes as a map whose members appear in stored order.
///
/// Written by hand because a derived impl would serialize the inner `Vec` as
/// an array of pairs, and `serde_json::Map` would sort the keys.
impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ── NetworkBlock ──────────────────────────────────────────────────────────────

/// One `network={ ... }` stanza.
///
/// The `ssid` attribute holds the quoted SSID; `psk` holds the 64-hex-digit
/// derived key when present.  Any other attribute (`key_mgmt`, `priority`,
/// ...) is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct NetworkBlock {
    attributes: Attributes,
}

impl NetworkBlock {
    /// Creates a block with attributes `ssid` then `psk`, in that order.
    pub fn new(bare_ssid: &str, psk: impl Into<String>) -> Self {
        let mut attributes = Attributes::new();
        attributes.insert(SSID_KEY, quote_ssid(bare_ssid));
        attributes.insert(PSK_KEY, psk);
        Self { attributes }
    }

    /// Wraps already-parsed attributes.
    pub fn from_attributes(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Raw (quoted) SSID value.
    pub fn ssid(&self) -> Option<&str> {
        self.attributes.get(SSID_KEY)
    }

    /// SSID with its surrounding quotes removed.
    pub fn bare_ssid(&self) -> Option<&str> {
        self.ssid().map(unquote_ssid)
    }

    pub fn psk(&self) -> Option<&str> {
        self.attributes.get(PSK_KEY)
    }

    /// Overwrites (or adds) the `psk` attribute, leaving every other
    /// attribute and its position alone.
    pub fn set_psk(&mut self, psk: impl Into<String>) {
        self.attributes.insert(PSK_KEY, psk);
    }

    /// Returns `true` if this block's stored SSID equals the quoted form of
    /// `bare_ssid`.
    pub fn matches_ssid(&self, bare_ssid: &str) -> bool {
        self.ssid() == Some(quote_ssid(bare_ssid).as_str())
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

// ── ConfigDocument ────────────────────────────────────────────────────────────

/// A parsed `wpa_supplicant.conf`: preamble settings followed by network blocks.
///
/// `networks` is in file order.  The parser does not enforce SSID uniqueness
/// (a hand-edited file may repeat one); the credential engine restores it on
/// every update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    pub preamble: Attributes,
    pub networks: Vec<NetworkBlock>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first network block whose SSID matches `bare_ssid`.
    pub fn find(&self, bare_ssid: &str) -> Option<&NetworkBlock> {
        self.networks.iter().find(|n| n.matches_ssid(bare_ssid))
    }

    /// Bare SSIDs of every network block, in file order.
    pub fn ssids(&self) -> Vec<String> {
        self.networks
            .iter()
            .filter_map(NetworkBlock::bare_ssid)
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::serializer::serialize(self))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Quoting ───────────────────────────────────────────────────────────────

    #[test]
    fn test_quote_ssid_wraps_in_double_quotes() {
        assert_eq!(quote_ssid("Office"), "\"Office\"");
    }

    #[test]
    fn test_unquote_ssid_leaves_half_quoted_value_alone() {
        assert_eq!(unquote_ssid("\"Office"), "\"Office");
    }

    // ── Attributes ────────────────────────────────────────────────────────────

    #[test]
    fn test_attributes_preserve_insertion_order() {
        // Arrange
        let mut attrs = Attributes::new();

        // Act
        attrs.insert("update_config", "1");
        attrs.insert("country", "GB");
        attrs.insert("ap_scan", "1");

        // Assert
        let keys: Vec<&str> = attrs.keys().collect();
        assert_eq!(keys, ["update_config", "country", "ap_scan"]);
    }

    #[test]
    fn test_attributes_overwrite_keeps_first_position() {
        let mut attrs: Attributes = [("a", "1"), ("b", "2")].into_iter().collect();

        let previous = attrs.insert("a", "3");

        assert_eq!(previous.as_deref(), Some("1"));
        let pairs: Vec<(&str, &str)> = attrs.iter().collect();
        assert_eq!(pairs, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_attributes_remove_returns_value() {
        let mut attrs: Attributes = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(attrs.remove("a").as_deref(), Some("1"));
        assert_eq!(attrs.remove("a"), None);
        assert_eq!(attrs.len(), 1);
        assert!(!attrs.contains_key("a"));
    }

    #[test]
    fn test_attributes_serialize_as_ordered_json_object() {
        let attrs: Attributes = [("ssid", "\"Z\""), ("psk", "abc"), ("key_mgmt", "WPA-PSK")]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&attrs).unwrap();

        assert_eq!(json, r#"{"ssid":"\"Z\"","psk":"abc","key_mgmt":"WPA-PSK"}"#);
    }

    // ── NetworkBlock ──────────────────────────────────────────────────────────

    #[test]
    fn test_network_block_new_orders_ssid_before_psk() {
        let block = NetworkBlock::new("Home", "abc");
        let keys: Vec<&str> = block.attributes().keys().collect();
        assert_eq!(keys, ["ssid", "psk"]);
        assert_eq!(block.ssid(), Some("\"Home\""));
        assert_eq!(block.bare_ssid(), Some("Home"));
    }

    #[test]
    fn test_network_block_matches_quoted_ssid_only() {
        let block = NetworkBlock::new("Home", "abc");
        assert!(block.matches_ssid("Home"));
        assert!(!block.matches_ssid("\"Home\""));
        assert!(!block.matches_ssid("home"));
    }

    #[test]
    fn test_set_psk_preserves_other_attributes() {
        // Arrange
        let attrs: Attributes = [("ssid", "\"Lab\""), ("psk", "old"), ("priority", "5")]
            .into_iter()
            .collect();
        let mut block = NetworkBlock::from_attributes(attrs);

        // Act
        block.set_psk("new");

        // Assert
        let pairs: Vec<(&str, &str)> = block.attributes().iter().collect();
        assert_eq!(pairs, [("ssid", "\"Lab\""), ("psk", "new"), ("priority", "5")]);
    }

    // ── ConfigDocument ────────────────────────────────────────────────────────

    #[test]
    fn test_document_ssids_are_bare_and_in_file_order() {
        let mut doc = ConfigDocument::new();
        doc.networks.push(NetworkBlock::new("B", "1"));
        doc.networks.push(NetworkBlock::new("A", "2"));

        assert_eq!(doc.ssids(), ["B", "A"]);
    }

    #[test]
    fn test_document_find_returns_first_match() {
        let mut doc = ConfigDocument::new();
        doc.networks.push(NetworkBlock::new("Dup", "first"));
        doc.networks.push(NetworkBlock::new("Dup", "second"));

        assert_eq!(doc.find("Dup").and_then(NetworkBlock::psk), Some("first"));
        assert!(doc.find("Missing").is_none());
    }
}
