//! # Length Validation
//!
//! Binary and text sizes are checked before any bit manipulation. The range
//! check always runs first, so a length that is both out of range and
//! misaligned reports the range error.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    constants::{BIN_BLOCK, MAX_BIN_LEN, MAX_TXT_LEN, MIN_BIN_LEN, MIN_TXT_LEN, TXT_BLOCK},
    error::{Error, Result, Subject},
};

/// Checks a binary length against `5..=60` and the 5-byte block size.
#[inline]
pub const fn validate_binary_length(len: usize) -> Result<()> {
    check(Subject::Data, len, MIN_BIN_LEN, MAX_BIN_LEN, BIN_BLOCK)
}

/// Checks a text length against `8..=96` and the 8-symbol block size.
#[inline]
pub const fn validate_text_length(len: usize) -> Result<()> {
    check(Subject::Text, len, MIN_TXT_LEN, MAX_TXT_LEN, TXT_BLOCK)
}

/// Checks a requested identifier size in bytes.
#[inline]
pub const fn validate_size(size: usize) -> Result<()> {
    check(Subject::Size, size, MIN_BIN_LEN, MAX_BIN_LEN, BIN_BLOCK)
}

const fn check(subject: Subject, len: usize, min: usize, max: usize, modulus: usize) -> Result<()> {
    if len < min || len > max {
        return Err(Error::Length {
            subject,
            len,
            min,
            max,
        });
    }
    if len % modulus != 0 {
        return Err(Error::Alignment {
            subject,
            len,
            modulus,
        });
    }
    Ok(())
}

/// Text length produced by encoding `bin_len` bytes.
pub const fn text_len(bin_len: usize) -> usize {
    bin_len * 8 / 5
}

/// Binary length produced by decoding `txt_len` symbols.
pub const fn binary_len(txt_len: usize) -> usize {
    txt_len * 5 / 8
}
