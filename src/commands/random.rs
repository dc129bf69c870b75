//! # Random Command
//!
//! Prints random Dbase32 IDs.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, id};

/// Arguments for the random command
pub struct RandomArgs {
    /// Size in bytes; `None` uses the configured `id_size`
    pub size: Option<usize>,
    pub count: usize,
}

/// Executes the random command.
pub fn execute(args: &RandomArgs, config: &Config) -> Result<()> {
    let size = args.size.unwrap_or_else(|| config.id_size());
    let codec = config.codec();
    let mut rng = rand::rng();

    for _ in 0..args.count {
        println!("{}", id::random_id_with(codec, &mut rng, size)?);
    }

    Ok(())
}
