//! Config subcommands handler

use anyhow::{Context, Result};

use html_extractor::theme::current_theme;
use html_extractor::Settings;

/// Show the saved settings as JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let settings = Settings::load();
    let json = serde_json::to_string_pretty(&settings)?;
    println!("{}", current_theme().primary_text(&json));
    Ok(())
}

/// Print where settings are stored.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Settings::settings_path().context("Could not determine home directory")?;
    println!("{}", path.display());
    Ok(())
}

/// Overwrite the settings file with defaults.
#[cfg(not(tarpaulin_include))]
pub fn handle_reset() -> Result<()> {
    let path = Settings::settings_path().context("Could not determine home directory")?;
    Settings::default()
        .save_to(&path)
        .with_context(|| format!("Failed to reset {}", path.display()))?;
    println!(
        "{}",
        current_theme().success_text(&format!("Settings reset: {}", path.display()))
    );
    Ok(())
}
