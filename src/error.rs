//! # Errors
//!
//! Every codec failure is a local validation error surfaced directly to the
//! caller. Variants are never coerced into each other: a type problem is
//! reported before a length problem, and a length problem before any symbol
//! is scanned.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

/// Convenience alias used across the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What a length or alignment error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Binary input to the encoder
    Data,
    /// Text input to the decoder and validators
    Text,
    /// Requested identifier size
    Size,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Data => "data length",
            Self::Text => "text length",
            Self::Size => "size",
        })
    }
}

/// Errors produced by the codec, the table checks and the ID generators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input is not of an acceptable category (e.g. non-ASCII byte text).
    #[error("text must be ASCII; got non-ASCII byte {byte:#04x} at index {index}")]
    Type { byte: u8, index: usize },

    /// Length outside `min..=max`.
    #[error("{subject} is {len}, need {min}..={max}")]
    Length {
        subject: Subject,
        len: usize,
        min: usize,
        max: usize,
    },

    /// Length inside the bounds but not a whole number of blocks.
    #[error("{subject} is {len}, need a multiple of {modulus}")]
    Alignment {
        subject: Subject,
        len: usize,
        modulus: usize,
    },

    /// First symbol that is not part of the alphabet.
    #[error("invalid Dbase32 letter: {0}")]
    Alphabet(char),

    /// Timestamp not representable as an unsigned 32-bit second count.
    #[error("timestamp is {0}, need 0..=4294967295")]
    Timestamp(String),

    /// Alphabet table failed its self-check, or the generator was misused.
    #[error("{0}")]
    Table(String),
}

/// Fieldless error category, for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Length,
    Alignment,
    Alphabet,
    Timestamp,
    Table,
}

impl Error {
    /// Returns the category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::Length { .. } => ErrorKind::Length,
            Self::Alignment { .. } => ErrorKind::Alignment,
            Self::Alphabet(_) => ErrorKind::Alphabet,
            Self::Timestamp(_) => ErrorKind::Timestamp,
            Self::Table(_) => ErrorKind::Table,
        }
    }
}
