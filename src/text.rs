//! # Text Input
//!
//! Decoding and validation accept either a string or a byte string of pure
//! ASCII. Both are normalized here, once, so the codec engines only ever see
//! a byte slice of ASCII symbols.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    alphabet::Alphabet,
    error::{Error, Result},
    length::validate_text_length,
};

/// Text handed to the decoder or validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text<'a> {
    repr: Repr<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repr<'a> {
    /// ASCII symbols, one byte each
    Ascii(&'a [u8]),
    /// A string holding at least one non-ASCII character
    Wide(&'a str),
}

impl<'a> Text<'a> {
    /// Wraps a byte string, rejecting anything that is not pure ASCII.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        if let Some(index) = bytes.iter().position(|b| !b.is_ascii()) {
            return Err(Error::Type {
                byte: bytes[index],
                index,
            });
        }
        Ok(Self {
            repr: Repr::Ascii(bytes),
        })
    }

    /// Number of symbols (characters, not UTF-8 bytes).
    pub fn len(&self) -> usize {
        match self.repr {
            Repr::Ascii(b) => b.len(),
            Repr::Wide(s) => s.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the ASCII symbols.
    ///
    /// A non-ASCII string can never be valid: its length is checked first,
    /// then the first character outside the alphabet is reported.
    pub(crate) fn symbols(&self, alphabet: &Alphabet) -> Result<&'a [u8]> {
        match self.repr {
            Repr::Ascii(b) => Ok(b),
            Repr::Wide(s) => {
                validate_text_length(s.chars().count())?;
                let bad = s
                    .chars()
                    .find(|&c| !u8::try_from(c).is_ok_and(|b| alphabet.value(b).is_some()))
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(Error::Alphabet(bad))
            }
        }
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(s: &'a str) -> Self {
        let repr = if s.is_ascii() {
            Repr::Ascii(s.as_bytes())
        } else {
            Repr::Wide(s)
        };
        Self { repr }
    }
}

impl<'a> From<&'a String> for Text<'a> {
    fn from(s: &'a String) -> Self {
        Self::from(s.as_str())
    }
}

impl<'a> TryFrom<&'a [u8]> for Text<'a> {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl<'a, const N: usize> TryFrom<&'a [u8; N]> for Text<'a> {
    type Error = Error;

    fn try_from(bytes: &'a [u8; N]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}
