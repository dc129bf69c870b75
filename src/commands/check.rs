//! # Check Command
//!
//! Validates Dbase32 text without decoding it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{codec::Codec, config::Config, text::Text, ui};

/// Arguments for the check command
pub struct CheckArgs {
    pub texts: Vec<String>,
    /// Print nothing; only the exit status reports the result
    pub quiet: bool,
}

/// Outcome of checking one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub text: String,
    /// `None` when valid, otherwise the reason
    pub error: Option<String>,
}

impl CheckResult {
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Checks every input with `codec`.
pub fn run(codec: &dyn Codec, texts: &[String]) -> Vec<CheckResult> {
    texts
        .iter()
        .map(|text| CheckResult {
            text: text.clone(),
            error: codec
                .check_valid(Text::from(text))
                .err()
                .map(|e| e.to_string()),
        })
        .collect()
}

/// Executes the check command. Returns whether every input was valid.
pub fn execute(args: &CheckArgs, config: &Config) -> Result<bool> {
    let codec = config.codec();

    if args.quiet {
        return Ok(args.texts.iter().all(|t| codec.is_valid(Text::from(t))));
    }

    let results = run(codec, &args.texts);
    for result in &results {
        match &result.error {
            None => println!("{}", result.text),
            Some(reason) => ui::print_rejected(&ui::truncate(&result.text, 40), reason),
        }
    }

    Ok(results.iter().all(CheckResult::is_valid))
}
