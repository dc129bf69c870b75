//! # Encode Command
//!
//! Encodes 5..=60 bytes into Dbase32 text.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Read};

use anyhow::{Context, Result};

use crate::{codec::Codec, config::Config, constants::MAX_BIN_LEN};

/// How the encode input is given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Hexadecimal digits
    #[default]
    Hex,
    /// The argument's UTF-8 bytes, as-is
    Raw,
}

/// Arguments for the encode command
pub struct EncodeArgs {
    /// Input given on the command line; `None` reads raw bytes from stdin
    pub data: Option<String>,
    pub format: InputFormat,
}

/// Turns the command-line argument into bytes.
pub fn parse_input(data: &str, format: InputFormat) -> Result<Vec<u8>> {
    match format {
        InputFormat::Hex => hex::decode(data.trim()).context("Input is not valid hex"),
        InputFormat::Raw => Ok(data.as_bytes().to_vec()),
    }
}

/// Encodes `data` with `codec`.
pub fn run(codec: &dyn Codec, data: &[u8]) -> Result<String> {
    Ok(codec.encode(data)?)
}

/// Executes the encode command.
pub fn execute(args: &EncodeArgs, config: &Config) -> Result<()> {
    let data = match &args.data {
        Some(data) => parse_input(data, args.format)?,
        None => {
            // One byte past the limit is enough to report the length error
            let mut buf = Vec::with_capacity(MAX_BIN_LEN + 1);
            io::stdin()
                .take(MAX_BIN_LEN as u64 + 1)
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    println!("{}", run(config.codec(), &data)?);
    Ok(())
}
