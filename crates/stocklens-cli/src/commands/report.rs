// Rust guideline compliant 2026-02-06

//! Implementation of the `stk report` command.
//!
//! Produces the full inventory report for a ledger export: headline
//! figures, the product table, and the highest-stock ranking.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use stocklens_core::{
    apply_display_filter, apply_exclusions, load_products, summarize, top_by_stock, DisplayFilter,
    LedgerFormat, SettingsStore,
};

/// How many top-stock products the report ranks by default.
const DEFAULT_TOP_PRODUCTS: usize = 7;

/// Reports on a ledger export.
///
/// # Arguments
///
/// * `ledger` - Path to the stock ledger export
/// * `filter` - Display-only filters narrowing the product table
/// * `include_excluded` - Whether to bypass the configured exclusions
/// * `top` - Optional size of the top-stock ranking
/// * `store` - Settings store holding the exclusion sets
/// * `formatter` - The output formatter to use
///
/// # Returns
///
/// Ok if the report was displayed successfully, Err otherwise.
pub fn execute(
    ledger: String,
    filter: DisplayFilter,
    include_excluded: bool,
    top: Option<usize>,
    store: &dyn SettingsStore,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let records = load_products(Path::new(&ledger), &LedgerFormat::default())?;
    let records = if include_excluded {
        records
    } else {
        apply_exclusions(records, &store.load_exclusions())
    };
    let records = apply_display_filter(records, &filter);

    let summary = summarize(&records);
    let ranked = top_by_stock(&records, top.unwrap_or(DEFAULT_TOP_PRODUCTS));

    println!("{}", formatter.format_report(&summary, &records, &ranked));
    Ok(())
}
