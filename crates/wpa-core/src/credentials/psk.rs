//! WPA-PSK derivation.
//!
//! The 256-bit pre-shared key is `PBKDF2-HMAC-SHA1(passphrase, ssid, 4096, 32)`
//! as defined by IEEE 802.11i.  wpa_supplicant performs the identical
//! derivation when it authenticates, so the output must be bit-exact.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

/// PBKDF2 iteration count fixed by IEEE 802.11i.
pub const PSK_ITERATIONS: u32 = 4096;

/// Derived key length in bytes (rendered as 64 hex digits).
pub const PSK_LEN: usize = 32;

/// Derives the WPA-PSK for `passphrase` on network `ssid`, rendered as
/// lowercase hex.
///
/// `ssid` is the bare SSID (no quotes).  No length checks happen here; the
/// credential engine validates the passphrase before calling this.
///
/// # Examples
///
/// ```rust
/// // Test vector from IEEE 802.11i, annex H.4.
/// assert_eq!(
///     wpa_core::derive_psk("password", "IEEE"),
///     "f42c6fc52df0ebef9ebb4b90b38a5f902e83fe1b135a70e23aed762e9710a12e"
/// );
/// ```
pub fn derive_psk(passphrase: &str, ssid: &str) -> String {
    let mut key = [0u8; PSK_LEN];
    pbkdf2_hmac::<Sha1>(passphrase.as_bytes(), ssid.as_bytes(), PSK_ITERATIONS, &mut key);
    hex::encode(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_psk_fixture_hunter2_home() {
        assert_eq!(
            derive_psk("hunter2", "home"),
            "dd49a56a01ff8674e5983e2e4e1a36a6a993d176e231e00914f99419f5476dba"
        );
    }

    #[test]
    fn test_derive_psk_ieee_802_11i_vector() {
        assert_eq!(
            derive_psk("ThisIsAPassword", "ThisIsASSID"),
            "0dc0d6eb90555ed6419756b9a15ec3e3209b63df707dd508d14581f8982721af"
        );
    }

    #[test]
    fn test_derive_psk_is_64_lowercase_hex_digits() {
        let psk = derive_psk("password123", "Home");
        assert_eq!(psk.len(), 64);
        assert!(psk.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_derive_psk_is_deterministic() {
        assert_eq!(derive_psk("password123", "Home"), derive_psk("password123", "Home"));
    }

    #[test]
    fn test_derive_psk_salt_is_case_sensitive() {
        assert_ne!(derive_psk("password123", "Home"), derive_psk("password123", "home"));
    }
}
