//! # Configuration
//!
//! Effective settings for the `db32` command: the global config file, with
//! command-line flags layered on top.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use anyhow::{Context, Result};

pub use self::global::{set_home_override, ConfigValidation, GlobalConfig};
use crate::{
    codec::{Backend, Codec},
    id::TimestampPolicy,
    length::validate_size,
};

/// Command-line overrides; `None` keeps the configured value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub backend: Option<Backend>,
    pub timestamp_policy: Option<TimestampPolicy>,
}

/// Merged configuration with command-line flags overriding the file
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Flags given on the command line
    pub overrides: Overrides,

    /// Warnings collected while loading
    pub warnings: Vec<String>,
}

impl Config {
    /// Loads the global config and applies `overrides`.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global = GlobalConfig::load()?;
        validate_size(global.id_size).context("Invalid id_size in config")?;

        let warnings = GlobalConfig::validate()?.warnings();

        Ok(Self {
            global,
            overrides,
            warnings,
        })
    }

    /// Returns the effective backend (flag overrides config)
    pub fn backend(&self) -> Backend {
        self.overrides.backend.unwrap_or(self.global.backend)
    }

    /// Returns the codec for the effective backend
    pub fn codec(&self) -> &'static dyn Codec {
        self.backend().codec()
    }

    /// Returns the effective timestamp policy
    pub fn timestamp_policy(&self) -> TimestampPolicy {
        self.overrides
            .timestamp_policy
            .unwrap_or(self.global.timestamp_policy)
    }

    /// Returns the default random ID size
    pub const fn id_size(&self) -> usize {
        self.global.id_size
    }
}
