// Rust guideline compliant 2026-02-06

//! Implementation of the `stk out-of-stock` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use stocklens_core::{apply_exclusions, load_products, out_of_stock, LedgerFormat, SettingsStore};

/// Shows depleted products for a ledger export.
///
/// # Arguments
///
/// * `ledger` - Path to the stock ledger export
/// * `store` - Settings store holding the exclusion sets
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// Ok if the depleted products were displayed successfully, Err otherwise.
pub fn execute(
    ledger: String,
    store: &dyn SettingsStore,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let records = load_products(Path::new(&ledger), &LedgerFormat::default())?;
    let records = apply_exclusions(records, &store.load_exclusions());

    let depleted = out_of_stock(&records);

    println!("{}", formatter.format_records(&depleted));
    Ok(())
}
