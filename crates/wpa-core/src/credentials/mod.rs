//! Credential rules for network blocks.
//!
//! - **`psk`** – WPA-PSK derivation from a passphrase and SSID.
//! - **`engine`** – the create/update/delete operations applied to a
//!   [`ConfigDocument`](crate::domain::document::ConfigDocument).

pub mod engine;
pub mod psk;
