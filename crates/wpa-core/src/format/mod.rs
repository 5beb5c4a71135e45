//! Text format of `wpa_supplicant.conf`.
//!
//! - **`parser`** – line-oriented, stateful reader producing a
//!   [`ConfigDocument`](crate::domain::document::ConfigDocument).
//! - **`serializer`** – the inverse: preamble lines, then each network block
//!   with tab-indented attributes.
//!
//! Both sides agree on one block-opening convention, `network={` on a single
//! line, so `serialize(parse(text)) == text` for every well-formed file.

pub mod parser;
pub mod serializer;

/// Literal that opens a network block.
pub const BLOCK_OPEN: &str = "network={";

/// Literal that closes a network block.
pub const BLOCK_CLOSE: &str = "}";
