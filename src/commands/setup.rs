//! # Setup Command
//!
//! Writes a commented default config file and reports problems in an
//! existing one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::GlobalConfig, ui};

/// Executes the setup command.
pub fn execute() -> Result<()> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        ui::print_success(format_args!("Created config: {}", path.display()));
        return Ok(());
    }

    ui::print_success(format_args!("Config already exists: {}", path.display()));

    let validation = GlobalConfig::validate()?;
    ui::print_warnings(&validation.warnings());
    for field in &validation.missing {
        eprintln!("  {} {} (using default)", "missing:".dimmed(), field);
    }

    // Surface parse errors and out-of-range values now rather than on first use
    let config = GlobalConfig::load()?;
    crate::length::validate_size(config.id_size)?;

    Ok(())
}
