//! # Reference Codec
//!
//! Bit-accumulator encoder/decoder over an arbitrary alphabet. Bytes go in
//! most significant bit first and leave as 5-bit groups, most significant
//! group first; decoding runs the same pipe backwards. No padding, ever.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::Codec;
use crate::{
    alphabet::Alphabet,
    error::{Error, Result},
    length::{binary_len, text_len, validate_binary_length, validate_text_length},
    text::Text,
};

/// Portable implementation, parameterized by its alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    alphabet: Alphabet,
}

impl Reference {
    /// Reference codec for the Dbase32 alphabet.
    pub const DB32: Self = Self {
        alphabet: Alphabet::DB32,
    };

    /// Reference codec for any alphabet, including unsorted ones.
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self::DB32
    }
}

impl Codec for Reference {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn encode(&self, data: &[u8]) -> Result<String> {
        validate_binary_length(data.len())?;

        let mut text = String::with_capacity(text_len(data.len()));
        let mut taxi: u32 = 0;
        let mut bits = 0;
        for &byte in data {
            taxi = (taxi << 8) | u32::from(byte);
            bits += 8;
            while bits >= 5 {
                bits -= 5;
                text.push(char::from(self.alphabet.symbol((taxi >> bits) as u8)));
            }
        }
        debug_assert_eq!(bits, 0, "length check leaves no partial group");

        Ok(text)
    }

    fn decode(&self, text: Text<'_>) -> Result<Vec<u8>> {
        let symbols = text.symbols(&self.alphabet)?;
        validate_text_length(symbols.len())?;

        let mut data = Vec::with_capacity(binary_len(symbols.len()));
        let mut taxi: u32 = 0;
        let mut bits = 0;
        for &symbol in symbols {
            let value = self
                .alphabet
                .value(symbol)
                .ok_or(Error::Alphabet(char::from(symbol)))?;
            taxi = (taxi << 5) | u32::from(value);
            bits += 5;
            if bits >= 8 {
                bits -= 8;
                data.push((taxi >> bits) as u8);
            }
        }
        debug_assert_eq!(bits, 0, "length check leaves no partial byte");

        Ok(data)
    }

    fn is_valid(&self, text: Text<'_>) -> bool {
        let Ok(symbols) = text.symbols(&self.alphabet) else {
            return false;
        };
        if validate_text_length(symbols.len()).is_err() {
            return false;
        }
        symbols.iter().all(|&s| self.alphabet.value(s).is_some())
    }

    fn check_valid(&self, text: Text<'_>) -> Result<()> {
        let symbols = text.symbols(&self.alphabet)?;
        validate_text_length(symbols.len())?;
        match symbols.iter().find(|&&s| self.alphabet.value(s).is_none()) {
            Some(&bad) => Err(Error::Alphabet(char::from(bad))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RFC 3548 alphabet, kept only to cross-check the bit packing against
    /// published vectors. It is not sorted and is never exposed as a codec.
    fn rfc3548() -> Reference {
        Reference::new(
            Alphabet::from_forward(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567")
                .expect("RFC alphabet has 32 distinct symbols"),
        )
    }

    #[test]
    fn test_rfc3548_vectors() {
        let rfc = rfc3548();
        // RFC 4648 section 10, unpadded lengths only
        assert_eq!(rfc.encode(b"fooba").unwrap(), "MZXW6YTB");
        assert_eq!(rfc.encode(b"foobarbaz!").unwrap(), "MZXW6YTBOJRGC6RB");
        assert_eq!(rfc.decode("MZXW6YTB".into()).unwrap(), b"fooba");
    }

    #[test]
    fn test_rfc3548_scan_window() {
        let rfc = rfc3548();
        assert_eq!(rfc.alphabet().start(), b'2');
        assert_eq!(rfc.alphabet().end(), b'Z');
        assert_eq!(
            rfc.decode("MZXW6YT1".into()).unwrap_err(),
            Error::Alphabet('1')
        );
        assert_eq!(
            rfc.decode("MZXW6YT8".into()).unwrap_err(),
            Error::Alphabet('8')
        );
    }

    #[test]
    fn test_static_values() {
        let codec = Reference::DB32;
        assert_eq!(codec.encode(&[0; 5]).unwrap(), "33333333");
        assert_eq!(codec.encode(&[0xff; 5]).unwrap(), "YYYYYYYY");
        assert_eq!(codec.encode(&[0; 60]).unwrap(), "3".repeat(96));
        assert_eq!(codec.encode(&[0xff; 60]).unwrap(), "Y".repeat(96));
    }

    #[test]
    fn test_decode_invalid_letters() {
        let codec = Reference::DB32;
        for (text, bad) in [("CDEFCDE2", '2'), ("CDEFCDE=", '='), ("CDEFCDEZ", 'Z')] {
            assert_eq!(codec.decode(text.into()).unwrap_err(), Error::Alphabet(bad));
            assert_eq!(
                codec.check_valid(text.into()).unwrap_err(),
                Error::Alphabet(bad)
            );
            assert!(!codec.is_valid(text.into()));
        }
    }

    #[test]
    fn test_is_valid_length() {
        let codec = Reference::DB32;
        assert!(!codec.is_valid("".into()));
        assert!(!codec.is_valid("3333333".into()));
        assert!(!codec.is_valid("3".repeat(97).as_str().into()));
        assert!(codec.is_valid("3".repeat(96).as_str().into()));
    }
}
