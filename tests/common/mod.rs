//! # Test Harness
//!
//! Shared helpers for dbase32 integration tests: an isolated home directory
//! for config tests, a config file builder, and seeded random corpora.
//! Uses thread-local storage instead of environment variables to avoid any
//! interference with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{fs, path::PathBuf, sync::Mutex};

use dbase32::{alphabet::DB32_FORWARD, set_home_override};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tempfile::TempDir;

/// Global lock to ensure config tests run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Every valid binary length.
pub const BIN_LENGTHS: [usize; 12] = [5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60];

/// Test environment with a temporary home directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/dbase32/config)
    pub home_dir: TempDir,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment and points the config lookup at it.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the path where the config would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("dbase32")
            .join("config")
    }

    /// Creates a config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Reads the config file content.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap_or_default()
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

/// Builder for config file content.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    backend: Option<String>,
    timestamp_policy: Option<String>,
    id_size: Option<usize>,
    extra: Vec<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(mut self, backend: &str) -> Self {
        self.backend = Some(backend.to_string());
        self
    }

    pub fn timestamp_policy(mut self, policy: &str) -> Self {
        self.timestamp_policy = Some(policy.to_string());
        self
    }

    pub fn id_size(mut self, size: usize) -> Self {
        self.id_size = Some(size);
        self
    }

    /// Adds a raw line, e.g. an unknown field.
    pub fn line(mut self, line: &str) -> Self {
        self.extra.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(backend) = &self.backend {
            lines.push(format!("backend = \"{backend}\""));
        }
        if let Some(policy) = &self.timestamp_policy {
            lines.push(format!("timestamp_policy = \"{policy}\""));
        }
        if let Some(size) = self.id_size {
            lines.push(format!("id_size = {size}"));
        }
        lines.extend(self.extra.iter().cloned());
        lines.join("\n") + "\n"
    }
}

/// Seeded RNG so failures reproduce.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `len` random bytes.
pub fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

/// `len` random symbols from the Dbase32 alphabet.
pub fn random_text(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(DB32_FORWARD[rng.random_range(0..32)]))
        .collect()
}

/// Any printable ASCII character that is not in the alphabet.
pub fn random_invalid_symbol(rng: &mut StdRng) -> char {
    loop {
        let c = char::from(rng.random_range(0x20u8..0x7f));
        if !DB32_FORWARD.contains(&(c as u8)) {
            return c;
        }
    }
}
