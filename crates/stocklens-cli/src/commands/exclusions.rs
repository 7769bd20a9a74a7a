// Rust guideline compliant 2026-02-06

//! Implementation of exclusion commands.
//!
//! Provides `stk exclusions show`, `set`, `add` and `remove` for the
//! groups, categories and product codes filtered out of every report.

use crate::terminal::{print_info, print_success, print_warning};
use crate::OutputFormatter;
use anyhow::Result;
use stocklens_core::{ExclusionConfig, SettingsStore};

/// Shows the configured exclusions.
///
/// # Arguments
///
/// * `store` - Settings store holding the exclusion sets
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// Ok if the exclusions are printed, Err otherwise.
pub fn show(store: &dyn SettingsStore, formatter: &dyn OutputFormatter) -> Result<()> {
    let exclusions = store.load_exclusions();
    println!("{}", formatter.format_exclusions(&exclusions));
    Ok(())
}

/// Replaces the exclusion sets wholesale.
///
/// Invoking this with no entries clears every exclusion.
///
/// # Arguments
///
/// * `groups` - Groups to exclude
/// * `categories` - Categories to exclude
/// * `codes` - Product codes to exclude
/// * `store` - Settings store to persist the exclusions in
///
/// # Returns
///
/// Ok if the exclusions are persisted, Err otherwise.
pub fn set(
    groups: Vec<String>,
    categories: Vec<String>,
    codes: Vec<String>,
    store: &dyn SettingsStore,
) -> Result<()> {
    let exclusions = ExclusionConfig::from_lists(Some(groups), Some(categories), Some(codes));
    store.save_exclusions(&exclusions)?;

    if exclusions.is_empty() {
        print_success("Exclusions cleared");
    } else {
        print_success(&format!(
            "Exclusions set: {} group(s), {} category(ies), {} code(s)",
            exclusions.groups.len(),
            exclusions.categories.len(),
            exclusions.product_codes.len()
        ));
    }
    Ok(())
}

/// Adds entries to the exclusion sets.
///
/// # Arguments
///
/// * `groups` - Groups to start excluding
/// * `categories` - Categories to start excluding
/// * `codes` - Product codes to start excluding
/// * `store` - Settings store to persist the exclusions in
///
/// # Returns
///
/// Ok if the exclusions are persisted, Err otherwise.
///
/// # Errors
///
/// Returns an error if no entries were passed at all, or if the
/// settings file cannot be written.
pub fn add(
    groups: Vec<String>,
    categories: Vec<String>,
    codes: Vec<String>,
    store: &dyn SettingsStore,
) -> Result<()> {
    if groups.is_empty() && categories.is_empty() && codes.is_empty() {
        anyhow::bail!("Nothing to add: pass at least one --group, --category or --code");
    }

    let mut exclusions = store.load_exclusions();
    let mut added = 0;
    for group in groups {
        if exclusions.groups.insert(group) {
            added += 1;
        }
    }
    for category in categories {
        if exclusions.categories.insert(category) {
            added += 1;
        }
    }
    for code in codes {
        if exclusions.product_codes.insert(code) {
            added += 1;
        }
    }

    if added == 0 {
        print_info("All entries were already excluded");
        return Ok(());
    }

    store.save_exclusions(&exclusions)?;
    print_success(&format!("Added {} exclusion(s)", added));
    Ok(())
}

/// Removes entries from the exclusion sets.
///
/// # Arguments
///
/// * `groups` - Groups to stop excluding
/// * `categories` - Categories to stop excluding
/// * `codes` - Product codes to stop excluding
/// * `store` - Settings store to persist the exclusions in
///
/// # Returns
///
/// Ok if the exclusions are persisted, Err otherwise.
///
/// # Errors
///
/// Returns an error if no entries were passed at all, or if the
/// settings file cannot be written.
pub fn remove(
    groups: Vec<String>,
    categories: Vec<String>,
    codes: Vec<String>,
    store: &dyn SettingsStore,
) -> Result<()> {
    if groups.is_empty() && categories.is_empty() && codes.is_empty() {
        anyhow::bail!("Nothing to remove: pass at least one --group, --category or --code");
    }

    let mut exclusions = store.load_exclusions();
    let mut removed = 0;
    for group in &groups {
        if exclusions.groups.remove(group) {
            removed += 1;
        }
    }
    for category in &categories {
        if exclusions.categories.remove(category) {
            removed += 1;
        }
    }
    for code in &codes {
        if exclusions.product_codes.remove(code) {
            removed += 1;
        }
    }

    if removed == 0 {
        print_warning("No matching exclusions to remove");
        return Ok(());
    }

    store.save_exclusions(&exclusions)?;
    print_success(&format!("Removed {} exclusion(s)", removed));
    Ok(())
}
