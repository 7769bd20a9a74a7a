// Rust guideline compliant 2026-02-06

//! Implementation of threshold commands.
//!
//! Provides `stk thresholds show` and `stk thresholds set` for the
//! stock level boundaries.

use crate::terminal::print_success;
use crate::OutputFormatter;
use anyhow::Result;
use stocklens_core::SettingsStore;

/// Shows the configured thresholds.
///
/// # Arguments
///
/// * `store` - Settings store holding the thresholds
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// Ok if the thresholds are printed, Err otherwise.
pub fn show(store: &dyn SettingsStore, formatter: &dyn OutputFormatter) -> Result<()> {
    let thresholds = store.load_thresholds();
    println!("{}", formatter.format_thresholds(&thresholds));
    Ok(())
}

/// Sets both thresholds.
///
/// # Arguments
///
/// * `low` - Inclusive upper bound of the Low level
/// * `medium` - Inclusive upper bound of the Medium level
/// * `store` - Settings store to persist the thresholds in
///
/// # Returns
///
/// Ok if the thresholds are persisted, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - `low` is negative
/// - `medium` is not greater than `low`
/// - The settings file cannot be written
pub fn set(low: i64, medium: i64, store: &dyn SettingsStore) -> Result<()> {
    store.save_thresholds(low, medium)?;
    print_success(&format!("Thresholds updated: low {}, medium {}", low, medium));
    Ok(())
}
