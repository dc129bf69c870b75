//! # Time Command
//!
//! Prints a timestamp-prefixed Dbase32 ID.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{
    config::Config,
    id::{self, Timestamp},
};

/// Arguments for the time command
pub struct TimeArgs {
    /// Seconds since the epoch; `None` means now
    pub timestamp: Option<String>,
}

/// Parses a whole or fractional second count.
pub fn parse_timestamp(s: &str) -> Result<Timestamp> {
    let s = s.trim();
    if let Ok(secs) = s.parse::<i64>() {
        return Ok(Timestamp::Seconds(secs));
    }
    let secs: f64 = s
        .parse()
        .with_context(|| format!("Invalid timestamp: '{s}'"))?;
    Ok(Timestamp::Fractional(secs))
}

/// Executes the time command.
pub fn execute(args: &TimeArgs, config: &Config) -> Result<()> {
    let timestamp = match &args.timestamp {
        Some(s) => parse_timestamp(s)?,
        None => Timestamp::now(),
    };

    let id = id::time_id_with(
        config.codec(),
        &mut rand::rng(),
        timestamp,
        config.timestamp_policy(),
    )?;
    println!("{id}");

    Ok(())
}
