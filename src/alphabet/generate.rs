//! # Table Generator
//!
//! Derives a sorted alphabet by removing 4 symbols from `0-9A-Z`, and renders
//! a table pair as Rust source. This is how the compiled-in Dbase32 constants
//! were produced, and how alternate alphabets are built for cross-checking
//! the sort-order property.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::BTreeSet, fmt::Write};

use super::Alphabet;
use crate::{
    constants::{INVALID, POSSIBLE},
    error::{Error, Result},
};

/// Builds a sorted forward table by removing exactly 4 unique symbols from
/// `0-9A-Z`.
///
/// ```
/// use dbase32::alphabet::generate::gen_forward;
///
/// assert_eq!(gen_forward("0123").unwrap(), "456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");
/// assert_eq!(gen_forward("012Z").unwrap(), "3456789ABCDEFGHIJKLMNOPQRSTUVWXY");
/// ```
pub fn gen_forward(remove: &str) -> Result<String> {
    let count = remove.chars().count();
    if count != 4 {
        return Err(Error::Table(format!(
            "remove must be 4 symbols; got {count}: {remove:?}"
        )));
    }

    let remove_set: BTreeSet<char> = remove.chars().collect();
    if remove_set.len() != 4 {
        return Err(Error::Table(format!(
            "remove must be 4 unique symbols; got {}: {remove:?}",
            remove_set.len()
        )));
    }

    if !remove_set.iter().all(|c| POSSIBLE.contains(*c)) {
        return Err(Error::Table(format!(
            "remove: {remove:?} not a subset of {POSSIBLE:?}"
        )));
    }

    // POSSIBLE is sorted, so filtering keeps the order
    Ok(POSSIBLE.chars().filter(|c| !remove_set.contains(c)).collect())
}

impl Alphabet {
    /// Generates and self-checks the alphabet that removes `remove` from
    /// `0-9A-Z`.
    pub fn from_removed(remove: &str) -> Result<Self> {
        let forward = gen_forward(remove)?;
        let forward: [u8; 32] = forward
            .as_bytes()
            .try_into()
            .map_err(|_| Error::Table(format!("forward is not 32 symbols: {forward:?}")))?;
        let alphabet = Self::from_forward(&forward)?;
        alphabet.check()?;
        Ok(alphabet)
    }
}

/// Renders `alphabet` as Rust constants named with `prefix`
/// (e.g. `DB32_FORWARD`, `DB32_START`, `DB32_END`, `DB32_REVERSE`).
///
/// Reverse entries inside the scan window get one commented line each; the
/// runs before and after are written 8 per line.
pub fn render_rust(alphabet: &Alphabet, prefix: &str) -> String {
    let start = alphabet.start();
    let end = alphabet.end();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "pub const {prefix}_FORWARD: &[u8; 32] = b\"{}\";",
        alphabet.as_str()
    );
    let _ = writeln!(out, "pub const {prefix}_START: u8 = {start};");
    let _ = writeln!(out, "pub const {prefix}_END: u8 = {end};");
    out.push('\n');
    out.push_str("#[rustfmt::skip]\n");
    let _ = writeln!(out, "pub const {prefix}_REVERSE: &[u8; 256] = &[");

    if start > 0 {
        let _ = writeln!(out, "    // 0..={}", start - 1);
        push_invalid_run(&mut out, usize::from(start));
    }
    for code_point in start..=end {
        let r = alphabet.reverse()[usize::from(code_point)];
        let value = if r == INVALID {
            "INVALID".to_string()
        } else {
            r.to_string()
        };
        let _ = writeln!(
            out,
            "    {value:>7}, // {code_point} {:?}",
            char::from(code_point)
        );
    }
    if end < u8::MAX {
        let _ = writeln!(out, "    // {}..=255", end + 1);
        push_invalid_run(&mut out, 255 - usize::from(end));
    }

    out.push_str("];\n");
    out
}

fn push_invalid_run(out: &mut String, mut remaining: usize) {
    while remaining > 0 {
        let n = remaining.min(8);
        out.push_str("    ");
        out.push_str(&vec!["INVALID"; n].join(", "));
        out.push_str(",\n");
        remaining -= n;
    }
}
