//! # dbase32
//!
//! Base32 encoding with a sorted-order alphabet, for binary IDs that are
//! stored and compared as text in ordered key-value stores.
//!
//! The alphabet is `3456789ABCDEFGHIJKLMNOPQRSTUVWXY`. Its symbols ascend by
//! code point, so for two byte strings of equal length the encoded text
//! sorts exactly like the bytes did. Inputs are 5..=60 bytes in whole 5-byte
//! blocks, so there is never any padding.
//!
//! ```
//! assert_eq!(dbase32::encode(b"binary foo").unwrap(), "FCNPVRELI7J9FUUI");
//! assert_eq!(dbase32::decode("FCNPVRELI7J9FUUI").unwrap(), b"binary foo");
//! assert!(dbase32::is_valid("FCNPVRELI7J9FUUI"));
//! assert!(!dbase32::is_valid("FCNPVRELI7J9FUUZ"));
//! ```
//!
//! ## Features
//!
//! - **Two interchangeable codecs**: a portable reference implementation and
//!   a block-unrolled one, behind the [`Codec`] trait
//! - **Validation without decoding**: [`is_valid`] and [`check_valid`]
//! - **Identifiers**: [`random_id`] and timestamp-prefixed [`time_id`]
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod alphabet;
pub mod codec;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod id;
pub mod length;
pub mod text;
pub mod ui;

pub use alphabet::Alphabet;
pub use codec::{Backend, Codec, Optimized, Reference};
pub use config::{set_home_override, Config};
pub use error::{Error, ErrorKind, Result};
pub use id::{random_id, time_id, time_id_at, Timestamp, TimestampPolicy};
pub use text::Text;

/// Encodes 5..=60 bytes (a multiple of 5) into Dbase32 text.
pub fn encode(data: &[u8]) -> Result<String> {
    Optimized.encode(data)
}

/// Decodes Dbase32 text into bytes, reporting the first invalid symbol.
///
/// Byte-string input goes through [`Text::try_from`], which rejects
/// non-ASCII bytes.
pub fn decode<'a>(text: impl Into<Text<'a>>) -> Result<Vec<u8>> {
    Optimized.decode(text.into())
}

/// Returns whether `text` is valid Dbase32 of an accepted length.
pub fn is_valid<'a>(text: impl Into<Text<'a>>) -> bool {
    Optimized.is_valid(text.into())
}

/// Fails exactly like [`decode`] would, without producing the bytes.
pub fn check_valid<'a>(text: impl Into<Text<'a>>) -> Result<()> {
    Optimized.check_valid(text.into())
}
