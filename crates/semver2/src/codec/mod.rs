//! Text encoding/decoding for versions.
//!
//! - [`parse()`]: scan, then extract fields from the scanned sections
//! - [`format_version`]: write a version back out, byte-for-byte as parsed

pub mod format;
pub mod parse;
#[cfg(feature = "serde")]
mod serde_impl;

pub use format::{encoded_len, format_version, write_version};
pub use parse::{parse, parse_bytes, parse_with_options};
