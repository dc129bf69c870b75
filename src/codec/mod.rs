//! # Codec
//!
//! Encode, decode and validate Dbase32 text through one interface with two
//! implementations:
//!
//! - [`Reference`]: a plain bit accumulator over any [`Alphabet`]. It is the
//!   executable description of the format.
//! - [`Optimized`]: Dbase32 only, whole 40-bit blocks at a time.
//!
//! Both must agree on every output and every error, message included. The
//! parity tests run them side by side over the same corpus.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod optimized;
pub mod reference;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::{optimized::Optimized, reference::Reference};
use crate::{error::Result, text::Text};

/// A Dbase32 encoder/decoder.
pub trait Codec: Send + Sync {
    /// Short name, as used in configuration.
    fn name(&self) -> &'static str;

    /// Encodes 5..=60 bytes (a multiple of 5) into text.
    fn encode(&self, data: &[u8]) -> Result<String>;

    /// Decodes 8..=96 symbols (a multiple of 8) back into bytes.
    ///
    /// Stops at the first symbol outside the alphabet and reports it.
    fn decode(&self, text: Text<'_>) -> Result<Vec<u8>>;

    /// Returns whether `text` would decode. Never fails on content.
    fn is_valid(&self, text: Text<'_>) -> bool;

    /// Fails exactly like [`Codec::decode`] would, without producing bytes.
    fn check_valid(&self, text: Text<'_>) -> Result<()>;
}

static REFERENCE: Reference = Reference::DB32;
static OPTIMIZED: Optimized = Optimized;

/// Which implementation to run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Portable bit-accumulator implementation
    Reference,
    /// Block-unrolled implementation
    #[default]
    Optimized,
}

impl Backend {
    /// All backends, for conformance runs.
    pub const ALL: [Self; 2] = [Self::Reference, Self::Optimized];

    /// Returns the process-wide codec for this backend.
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            Self::Reference => &REFERENCE,
            Self::Optimized => &OPTIMIZED,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codec().name())
    }
}
