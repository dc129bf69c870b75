//! # Constants
//!
//! Centralized constants for the length domain, identifier sizes and
//! configuration paths used throughout dbase32.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Block Geometry
// =============================================================================

/// Bytes per codec block.
pub const BIN_BLOCK: usize = 5;

/// Symbols per codec block (`BIN_BLOCK * 8 / 5`).
pub const TXT_BLOCK: usize = 8;

// =============================================================================
// Length Domain
// =============================================================================

/// Smallest binary input accepted by the encoder.
pub const MIN_BIN_LEN: usize = 5;

/// Largest binary input accepted by the encoder (480 bits).
pub const MAX_BIN_LEN: usize = 60;

/// Smallest text input accepted by the decoder.
pub const MIN_TXT_LEN: usize = MIN_BIN_LEN * 8 / 5;

/// Largest text input accepted by the decoder.
pub const MAX_TXT_LEN: usize = MAX_BIN_LEN * 8 / 5;

// =============================================================================
// Alphabet Tables
// =============================================================================

/// Reverse-table sentinel for code points outside the alphabet.
pub const INVALID: u8 = 255;

/// Candidate symbols an alphabet is carved from (sorted).
pub const POSSIBLE: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Symbols removed from `POSSIBLE` to form the Dbase32 alphabet.
pub const DB32_REMOVED: &str = "012Z";

// =============================================================================
// Identifiers
// =============================================================================

/// Default random ID size in bytes (120 bits).
pub const RANDOM_BYTES: usize = 15;

/// Default random ID size in bits.
pub const RANDOM_BITS: usize = RANDOM_BYTES * 8;

/// Encoded length of a default-size random ID.
pub const RANDOM_B32LEN: usize = RANDOM_BYTES * 8 / 5;

/// Big-endian timestamp prefix in a time ID.
pub const TIME_PREFIX_BYTES: usize = 4;

/// Total binary size of a time ID.
pub const TIME_ID_BYTES: usize = 15;

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "dbase32";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
