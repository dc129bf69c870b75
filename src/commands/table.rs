//! # Table Command
//!
//! Generates a forward/reverse table pair as Rust source.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::alphabet::{generate::render_rust, Alphabet};

/// Arguments for the table command
pub struct TableArgs {
    /// The 4 symbols removed from `0-9A-Z`
    pub remove: String,
    /// Prefix for the generated constant names
    pub prefix: String,
}

/// Builds and renders the table for `args`.
pub fn run(args: &TableArgs) -> Result<String> {
    let alphabet = Alphabet::from_removed(&args.remove)
        .with_context(|| format!("Cannot build alphabet removing '{}'", args.remove))?;
    Ok(render_rust(&alphabet, &args.prefix))
}

/// Executes the table command.
pub fn execute(args: &TableArgs) -> Result<()> {
    print!("{}", run(args)?);
    Ok(())
}
