//! # Optimized Codec
//!
//! Dbase32-specific codec working on whole blocks: 5 bytes are loaded into
//! one 40-bit word and split into 8 symbols with fixed shifts, and decoding
//! validates a block of 8 lookups with a single OR before packing.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::Codec;
use crate::{
    alphabet::{Alphabet, DB32_END, DB32_FORWARD, DB32_REVERSE, DB32_START},
    constants::{BIN_BLOCK, INVALID, TXT_BLOCK},
    error::{Error, Result},
    length::{binary_len, text_len, validate_binary_length, validate_text_length},
    text::Text,
};

/// Shift for each symbol of a 40-bit block, most significant first.
const SHIFTS: [u32; TXT_BLOCK] = [35, 30, 25, 20, 15, 10, 5, 0];

/// Block-at-a-time implementation of the Dbase32 alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optimized;

/// 5-bit value of `symbol`, or `INVALID` outside the scan window.
#[inline(always)]
const fn lookup(symbol: u8) -> u8 {
    if symbol < DB32_START || symbol > DB32_END {
        INVALID
    } else {
        DB32_REVERSE[symbol as usize]
    }
}

/// Values of one block of symbols, plus the OR of all of them.
///
/// Any `INVALID` entry sets bit 5 or above in the OR.
#[inline(always)]
fn lookup_block(block: &[u8]) -> ([u8; TXT_BLOCK], u8) {
    let mut values = [0u8; TXT_BLOCK];
    let mut any = 0u8;
    for (value, &symbol) in values.iter_mut().zip(block) {
        *value = lookup(symbol);
        any |= *value;
    }
    (values, any)
}

/// First symbol in `block` that is not in the alphabet.
fn first_fault(block: &[u8]) -> Error {
    let bad = block
        .iter()
        .copied()
        .find(|&s| lookup(s) > 31)
        .unwrap_or(b'?');
    Error::Alphabet(char::from(bad))
}

/// Validates every block, stopping at the first fault.
fn scan(symbols: &[u8]) -> Result<()> {
    for block in symbols.chunks_exact(TXT_BLOCK) {
        let (_, any) = lookup_block(block);
        if any > 31 {
            return Err(first_fault(block));
        }
    }
    Ok(())
}

impl Codec for Optimized {
    fn name(&self) -> &'static str {
        "optimized"
    }

    fn encode(&self, data: &[u8]) -> Result<String> {
        validate_binary_length(data.len())?;

        let mut text = String::with_capacity(text_len(data.len()));
        for block in data.chunks_exact(BIN_BLOCK) {
            let word = block
                .iter()
                .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
            for shift in SHIFTS {
                text.push(char::from(DB32_FORWARD[((word >> shift) & 31) as usize]));
            }
        }

        Ok(text)
    }

    fn decode(&self, text: Text<'_>) -> Result<Vec<u8>> {
        let symbols = text.symbols(&Alphabet::DB32)?;
        validate_text_length(symbols.len())?;

        let mut data = Vec::with_capacity(binary_len(symbols.len()));
        for block in symbols.chunks_exact(TXT_BLOCK) {
            let (values, any) = lookup_block(block);
            if any > 31 {
                return Err(first_fault(block));
            }
            let word = values
                .iter()
                .fold(0u64, |acc, &value| (acc << 5) | u64::from(value));
            data.extend_from_slice(&word.to_be_bytes()[8 - BIN_BLOCK..]);
        }

        Ok(data)
    }

    fn is_valid(&self, text: Text<'_>) -> bool {
        let Ok(symbols) = text.symbols(&Alphabet::DB32) else {
            return false;
        };
        validate_text_length(symbols.len()).is_ok() && scan(symbols).is_ok()
    }

    fn check_valid(&self, text: Text<'_>) -> Result<()> {
        let symbols = text.symbols(&Alphabet::DB32)?;
        validate_text_length(symbols.len())?;
        scan(symbols)
    }
}
