//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/dbase32/config`.
//! The file is optional: without it every setting takes its default.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    codec::Backend,
    constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME, RANDOM_BYTES},
    id::TimestampPolicy,
};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["backend", "timestamp_policy", "id_size"];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that are not set and fall back to defaults
    pub missing: Vec<String>,
    /// Fields that are not recognized and are ignored
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns true if the file differs from a freshly written default.
    pub fn has_issues(&self) -> bool {
        !self.missing.is_empty() || !self.invalid.is_empty()
    }

    /// Human-readable warnings for unknown fields.
    pub fn warnings(&self) -> Vec<String> {
        self.invalid
            .iter()
            .map(|field| format!("unknown config field '{field}' is ignored"))
            .collect()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/dbase32/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Codec implementation used by the CLI
    #[serde(default)]
    pub backend: Backend,

    /// How `time` treats timestamps outside the 32-bit range
    #[serde(default)]
    pub timestamp_policy: TimestampPolicy,

    /// Default size in bytes for `random`
    #[serde(default = "default_id_size")]
    pub id_size: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            timestamp_policy: TimestampPolicy::default(),
            id_size: RANDOM_BYTES,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_id_size() -> usize {
    RANDOM_BYTES
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/dbase32/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/dbase32)
    pub fn dir() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(GLOBAL_CONFIG_DIR));
        }
        dirs::home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads and parses a config file at an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Used by `db32 setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        Self::default().save_with_comments(&path)?;
        Ok(true)
    }

    /// Saves config with detailed comments for all options.
    fn save_with_comments(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;

        let content = format!(
            r#"# dbase32 Configuration
# Location: ~/.config/dbase32/config

# Codec implementation used by the db32 command.
# Both produce identical output and identical errors.
#   "optimized" - block-at-a-time (default)
#   "reference" - portable bit accumulator
backend = "{backend}"

# What `db32 time` does with a timestamp outside 0..=4294967295.
#   "reject" - fail with an error (default)
#   "clamp"  - saturate to the nearest bound
timestamp_policy = "{policy}"

# Default size in bytes for `db32 random` (5..=60, a multiple of 5).
# Default: 15 (120 bits, 24 characters)
id_size = {id_size}
"#,
            backend = self.backend,
            policy = match self.timestamp_policy {
                TimestampPolicy::Reject => "reject",
                TimestampPolicy::Clamp => "clamp",
            },
            id_size = self.id_size,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Validates the global config file and returns any issues found.
    ///
    /// A missing file has no issues.
    pub fn validate() -> Result<ConfigValidation> {
        let Some(path) = Self::path() else {
            return Ok(ConfigValidation::default());
        };

        if !path.exists() {
            return Ok(ConfigValidation::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        let mut validation = ConfigValidation::default();

        for key in table.keys() {
            if !VALID_FIELDS.contains(&key.as_str()) {
                validation.invalid.push(key.clone());
            }
        }

        for &field in VALID_FIELDS {
            if !table.contains_key(field) {
                validation.missing.push(field.to_string());
            }
        }

        Ok(validation)
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }
    Ok(())
}
