//! # Alphabet Tables
//!
//! The 32-symbol forward map and the 256-entry reverse map, plus the
//! invariants relating them.
//!
//! The Dbase32 alphabet is `0-9A-Z` with `0`, `1`, `2` and `Z` removed. Its
//! symbols are sorted by code point, so the encoded text sorts exactly like
//! the binary it came from. Standard RFC 3548 base32 puts the digits after
//! the letters and loses that property.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod generate;

use crate::{
    constants::INVALID,
    error::{Error, Result},
};

/// Forward table of the Dbase32 alphabet.
pub const DB32_FORWARD: &[u8; 32] = b"3456789ABCDEFGHIJKLMNOPQRSTUVWXY";

/// First code point of the Dbase32 scan window (`'3'`).
pub const DB32_START: u8 = 51;

/// Last code point of the Dbase32 scan window (`'Y'`).
pub const DB32_END: u8 = 89;

/// Reverse table of the Dbase32 alphabet, indexed by code point.
#[rustfmt::skip]
pub const DB32_REVERSE: &[u8; 256] = &[
    // 0..=50
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID,
          0, // 51 '3'
          1, // 52 '4'
          2, // 53 '5'
          3, // 54 '6'
          4, // 55 '7'
          5, // 56 '8'
          6, // 57 '9'
    INVALID, // 58 ':'
    INVALID, // 59 ';'
    INVALID, // 60 '<'
    INVALID, // 61 '='
    INVALID, // 62 '>'
    INVALID, // 63 '?'
    INVALID, // 64 '@'
          7, // 65 'A'
          8, // 66 'B'
          9, // 67 'C'
         10, // 68 'D'
         11, // 69 'E'
         12, // 70 'F'
         13, // 71 'G'
         14, // 72 'H'
         15, // 73 'I'
         16, // 74 'J'
         17, // 75 'K'
         18, // 76 'L'
         19, // 77 'M'
         20, // 78 'N'
         21, // 79 'O'
         22, // 80 'P'
         23, // 81 'Q'
         24, // 82 'R'
         25, // 83 'S'
         26, // 84 'T'
         27, // 85 'U'
         28, // 86 'V'
         29, // 87 'W'
         30, // 88 'X'
         31, // 89 'Y'
    // 90..=255
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
    INVALID, INVALID, INVALID, INVALID, INVALID, INVALID,
];

// Compiled-in table invariants, checked on every build
const _: () = {
    assert!(DB32_START == DB32_FORWARD[0] && DB32_END == DB32_FORWARD[31]);
    let mut i = 0;
    while i < 32 {
        assert!(i == 0 || DB32_FORWARD[i - 1] < DB32_FORWARD[i]);
        assert!(DB32_REVERSE[DB32_FORWARD[i] as usize] as usize == i);
        i += 1;
    }
    let mut valid = 0;
    let mut code_point = 0;
    while code_point < 256 {
        if DB32_REVERSE[code_point] != INVALID {
            valid += 1;
        }
        code_point += 1;
    }
    assert!(valid == 32);
};

/// A forward/reverse table pair with its scan window.
///
/// Values are process-wide constants or built once by the generator; nothing
/// mutates an `Alphabet` after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    forward: [u8; 32],
    reverse: [u8; 256],
    start: u8,
    end: u8,
}

impl Alphabet {
    /// The compiled-in Dbase32 alphabet.
    pub const DB32: Self = Self {
        forward: *DB32_FORWARD,
        reverse: *DB32_REVERSE,
        start: DB32_START,
        end: DB32_END,
    };

    /// Builds an alphabet from 32 distinct printable ASCII symbols.
    ///
    /// The symbols need not be sorted; [`Alphabet::check`] is what enforces
    /// the ordering. The scan window spans the smallest to largest symbol.
    pub fn from_forward(forward: &[u8; 32]) -> Result<Self> {
        let mut reverse = [INVALID; 256];
        for (value, &symbol) in (0u8..).zip(forward.iter()) {
            if !symbol.is_ascii_graphic() {
                return Err(Error::Table(format!(
                    "forward[{value}] is {symbol:#04x}, need printable ASCII"
                )));
            }
            if reverse[usize::from(symbol)] != INVALID {
                return Err(Error::Table(format!(
                    "forward repeats symbol {:?}",
                    char::from(symbol)
                )));
            }
            reverse[usize::from(symbol)] = value;
        }

        // 32 distinct symbols, so min and max exist
        let start = forward.iter().copied().min().unwrap_or(0);
        let end = forward.iter().copied().max().unwrap_or(0);

        Ok(Self {
            forward: *forward,
            reverse,
            start,
            end,
        })
    }

    /// Forward table: `forward()[v]` is the symbol for 5-bit value `v`.
    pub const fn forward(&self) -> &[u8; 32] {
        &self.forward
    }

    /// Reverse table: 5-bit value per code point, or `INVALID`.
    pub const fn reverse(&self) -> &[u8; 256] {
        &self.reverse
    }

    /// Smallest code point in the alphabet.
    pub const fn start(&self) -> u8 {
        self.start
    }

    /// Largest code point in the alphabet.
    pub const fn end(&self) -> u8 {
        self.end
    }

    /// Symbol for a 5-bit value. Only the low 5 bits of `value` are used.
    #[inline]
    pub const fn symbol(&self, value: u8) -> u8 {
        self.forward[(value & 31) as usize]
    }

    /// 5-bit value of a code point, or `None` when it is not in the alphabet.
    ///
    /// Code points outside `start..=end` are rejected before the table is
    /// consulted.
    #[inline]
    pub const fn value(&self, code_point: u8) -> Option<u8> {
        if code_point < self.start || code_point > self.end {
            return None;
        }
        let r = self.reverse[code_point as usize];
        if r > 31 {
            None
        } else {
            Some(r)
        }
    }

    /// Returns the symbols as a string.
    pub fn as_str(&self) -> &str {
        // from_forward only admits printable ASCII
        std::str::from_utf8(&self.forward).unwrap_or_default()
    }

    /// Verifies the table invariants the sort-order guarantee rests on.
    ///
    /// - forward is strictly ascending printable ASCII
    /// - reverse maps each forward symbol back to its index, and nothing else
    /// - start and end are the first and last forward symbols
    pub fn check(&self) -> Result<()> {
        for (i, pair) in self.forward.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(Error::Table(format!(
                    "forward not sorted: forward[{i}] = {:?} >= forward[{}] = {:?}",
                    char::from(pair[0]),
                    i + 1,
                    char::from(pair[1])
                )));
            }
        }
        if let Some(&bad) = self.forward.iter().find(|b| !b.is_ascii_graphic()) {
            return Err(Error::Table(format!(
                "forward contains {bad:#04x}, need printable ASCII"
            )));
        }

        for (code_point, &r) in self.reverse.iter().enumerate() {
            let expected = self
                .forward
                .iter()
                .position(|&s| usize::from(s) == code_point)
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or(INVALID);
            if r != expected {
                return Err(Error::Table(format!(
                    "reverse[{code_point}] is {r}, need {expected}"
                )));
            }
        }

        if self.start != self.forward[0] || self.end != self.forward[31] {
            return Err(Error::Table(format!(
                "scan window is {}..={}, need {}..={}",
                self.start, self.end, self.forward[0], self.forward[31]
            )));
        }

        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DB32
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_db32_passes_self_check() {
        Alphabet::DB32.check().expect("compiled-in table must be valid");
    }

    #[test]
    fn test_db32_window() {
        assert_eq!(DB32_START, b'3');
        assert_eq!(DB32_END, b'Y');
        assert_eq!(Alphabet::DB32.start(), DB32_FORWARD[0]);
        assert_eq!(Alphabet::DB32.end(), DB32_FORWARD[31]);
    }

    #[test]
    fn test_db32_excludes_removed_symbols() {
        let alphabet = Alphabet::DB32.as_str();
        for c in ['0', '1', '2', 'Z'] {
            assert!(!alphabet.contains(c), "{c} should not be in alphabet");
        }
        assert_eq!(alphabet.len(), 32);
    }

    #[test]
    fn test_reverse_counts() {
        let mut counts: HashMap<u8, usize> = HashMap::new();
        for &r in DB32_REVERSE {
            *counts.entry(r).or_insert(0) += 1;
        }
        assert_eq!(counts[&INVALID], 256 - 32);
        for v in 0..32 {
            assert_eq!(counts[&v], 1, "value {v}");
        }
    }

    #[test]
    fn test_reverse_regions() {
        for (i, &r) in DB32_REVERSE.iter().enumerate() {
            match i {
                51..=57 => assert_eq!(usize::from(r), i - 51),
                65..=89 => assert_eq!(usize::from(r), i - 58),
                _ => assert_eq!(r, INVALID, "index {i}"),
            }
        }
    }

    #[test]
    fn test_value_respects_window() {
        let a = Alphabet::DB32;
        assert_eq!(a.value(b'3'), Some(0));
        assert_eq!(a.value(b'Y'), Some(31));
        assert_eq!(a.value(b'2'), None);
        assert_eq!(a.value(b'Z'), None);
        assert_eq!(a.value(b'='), None);
        assert_eq!(a.value(0xff), None);
    }

    #[test]
    fn test_from_forward_matches_compiled_table() {
        let built = Alphabet::from_forward(DB32_FORWARD).unwrap();
        assert_eq!(built, Alphabet::DB32);
    }

    #[test]
    fn test_from_forward_rejects_duplicates() {
        let err = Alphabet::from_forward(b"3356789ABCDEFGHIJKLMNOPQRSTUVWXY").unwrap_err();
        assert_eq!(err.to_string(), "forward repeats symbol '3'");
    }

    #[test]
    fn test_check_rejects_unsorted() {
        let rfc = Alphabet::from_forward(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567").unwrap();
        assert_eq!(rfc.start(), b'2');
        assert_eq!(rfc.end(), b'Z');
        let err = rfc.check().unwrap_err();
        assert!(err.to_string().starts_with("forward not sorted: forward[25]"));
    }

    #[test]
    fn test_check_rejects_corrupt_reverse() {
        let mut broken = Alphabet::DB32;
        broken.reverse[usize::from(b'Z')] = 31;
        assert_eq!(
            broken.check().unwrap_err().to_string(),
            "reverse[90] is 31, need 255"
        );
    }
}
