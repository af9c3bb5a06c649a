//! Shared CLI helpers: JSON output and error printing.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

/// Render a value as pretty-printed JSON (2-space indent).
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to render JSON")
}

/// Print a command error as one line on stderr, cause chain included.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "Error:".red().bold());
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
