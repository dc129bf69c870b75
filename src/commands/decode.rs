//! # Decode Command
//!
//! Decodes Dbase32 text and prints the bytes as hex (or raw).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::{codec::Codec, config::Config, text::Text};

/// Arguments for the decode command
pub struct DecodeArgs {
    pub text: String,
    /// Write the decoded bytes to stdout unchanged
    pub raw: bool,
}

/// Decodes `text` with `codec`.
pub fn run(codec: &dyn Codec, text: &str) -> Result<Vec<u8>> {
    Ok(codec.decode(Text::from(text))?)
}

/// Executes the decode command.
pub fn execute(args: &DecodeArgs, config: &Config) -> Result<()> {
    let data = run(config.codec(), &args.text)?;

    if args.raw {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&data).context("Failed to write stdout")?;
        stdout.flush()?;
    } else {
        println!("{}", hex::encode(data));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Backend;

    #[test]
    fn test_run_decodes() {
        let data = run(Backend::Reference.codec(), "FCNPVRELI7J9FUUI").unwrap();
        assert_eq!(data, b"binary foo");
    }

    #[test]
    fn test_run_reports_first_bad_letter() {
        let err = run(Backend::Optimized.codec(), "CDEFCDEZ").unwrap_err();
        assert_eq!(err.to_string(), "invalid Dbase32 letter: Z");
    }
}
