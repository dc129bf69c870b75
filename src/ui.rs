//! # UI Utilities
//!
//! Diagnostics for the `db32` command. Results go to stdout so they can be
//! piped; everything else goes to stderr, coloured.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Display;

use owo_colors::OwoColorize;

// =============================================================================
// Status Messages
// =============================================================================

/// Prints a success message.
///
/// Format: `✓ {message}`
pub fn print_success(message: impl Display) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

/// Prints an error with red prefix, including its context chain.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
}

/// Prints a rejected input and the reason.
///
/// Format: `✗ {input}: {reason}`
pub fn print_rejected(input: &str, reason: impl Display) {
    eprintln!("{} {}: {}", "✗".red(), input, reason);
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to the specified maximum length, adding ellipsis if truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
