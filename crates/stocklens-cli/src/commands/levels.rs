// Rust guideline compliant 2026-02-06

//! Implementation of the `stk levels` command.
//!
//! Tallies how many products fall in each stock level under the
//! configured thresholds.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use stocklens_core::{apply_exclusions, level_counts, load_products, LedgerFormat, SettingsStore};

/// Shows the per-level product tally for a ledger export.
///
/// # Arguments
///
/// * `ledger` - Path to the stock ledger export
/// * `store` - Settings store holding thresholds and exclusions
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// Ok if the tally was displayed successfully, Err otherwise.
pub fn execute(
    ledger: String,
    store: &dyn SettingsStore,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let records = load_products(Path::new(&ledger), &LedgerFormat::default())?;
    let records = apply_exclusions(records, &store.load_exclusions());

    // BTreeMap iteration follows the level ordering: Low through Unknown.
    let counts: Vec<_> = level_counts(&records, &store.load_thresholds())
        .into_iter()
        .collect();

    println!("{}", formatter.format_levels(&counts));
    Ok(())
}
