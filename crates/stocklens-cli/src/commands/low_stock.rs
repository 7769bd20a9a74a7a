// Rust guideline compliant 2026-02-06

//! Implementation of the `stk low-stock` command.
//!
//! Shows the products classified Low under the configured thresholds,
//! plus how many distinct low-stock codes each category carries.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use stocklens_core::{
    apply_exclusions, load_products, low_stock, low_stock_by_category, LedgerFormat, SettingsStore,
};

/// Shows low-stock products for a ledger export.
///
/// # Arguments
///
/// * `ledger` - Path to the stock ledger export
/// * `store` - Settings store holding thresholds and exclusions
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// Ok if the low-stock view was displayed successfully, Err otherwise.
pub fn execute(
    ledger: String,
    store: &dyn SettingsStore,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let records = load_products(Path::new(&ledger), &LedgerFormat::default())?;
    let records = apply_exclusions(records, &store.load_exclusions());
    let thresholds = store.load_thresholds();

    let low = low_stock(&records, &thresholds);
    let by_category = low_stock_by_category(&records, &thresholds);

    println!("{}", formatter.format_low_stock(&low, &by_category, &thresholds));
    Ok(())
}
