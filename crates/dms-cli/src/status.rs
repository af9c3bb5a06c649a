//! `dms status`: show resolved configuration and the active session.
//!
//! Local only; no API call is made.

use anyhow::{Context, Result};
use colored::Colorize;

use dms_core::config::{ENV_API_URL, ENV_CHANNEL_ID, ENV_JWT};
use dms_core::{Config, SessionStore};

/// Run the status command.
pub fn run(config: &Config, store: &SessionStore) -> Result<()> {
    println!();
    println!("{}", "DMS Chat Status".cyan().bold());
    println!();

    // API
    println!(
        "  {:<18} {} {}",
        "API URL:".bold(),
        config.api_url,
        format!("({ENV_API_URL})").dimmed()
    );

    // Token
    let token_status = if config.has_token() {
        format!("{} (token set)", "✓".green())
    } else {
        format!("{}", "· not configured".dimmed())
    };
    println!(
        "  {:<18} {} {}",
        "Bearer token:".bold(),
        token_status,
        format!("({ENV_JWT})").dimmed()
    );

    // Channel
    let channel = match config.channel_id.as_deref() {
        Some(id) => id.to_string(),
        None => format!("{}", "· not configured".dimmed()),
    };
    println!(
        "  {:<18} {} {}",
        "Channel:".bold(),
        channel,
        format!("({ENV_CHANNEL_ID})").dimmed()
    );

    // Session
    println!();
    println!("  {:<18} {}", "Session file:".bold(), store.path().display());
    let session_id = store
        .load()
        .with_context(|| format!("failed to read {}", store.path().display()))?;
    let session_status = match session_id {
        Some(id) => format!("{} {}", "✓".green(), id),
        None => format!("{}", "(none)".red()),
    };
    println!("  {:<18} {}", "Active session:".bold(), session_status);

    println!();

    Ok(())
}
