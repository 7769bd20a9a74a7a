// Rust guideline compliant 2026-02-06

//! Implementation of the `stk groups` command.
//!
//! Shows the total stock volume per product group, sorted the way the
//! ledger export numbers its groups.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use stocklens_core::{apply_exclusions, load_products, stock_by_group, LedgerFormat, SettingsStore};

/// Shows stock volume per group for a ledger export.
///
/// # Arguments
///
/// * `ledger` - Path to the stock ledger export
/// * `store` - Settings store holding the exclusion sets
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// Ok if the volumes were displayed successfully, Err otherwise.
pub fn execute(
    ledger: String,
    store: &dyn SettingsStore,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let records = load_products(Path::new(&ledger), &LedgerFormat::default())?;
    let records = apply_exclusions(records, &store.load_exclusions());

    let volumes = stock_by_group(&records);

    println!("{}", formatter.format_group_volumes(&volumes));
    Ok(())
}
