// Rust guideline compliant 2026-02-06

//! Stock tier classification and derived product states.

use crate::models::{ProductRecord, StockLevel};
use crate::settings::ThresholdConfig;
use std::collections::BTreeMap;

/// Quantity at or below which a product counts as out of stock.
///
/// This boundary is fixed; moving the configurable Low threshold does not
/// move it.
pub const OUT_OF_STOCK_LIMIT: f64 = 0.0;

impl StockLevel {
    /// Classifies a stock quantity against the configured thresholds.
    ///
    /// # Arguments
    ///
    /// * `stock_quantity` - The quantity, or `None` when missing
    /// * `thresholds` - The configured tier boundaries
    ///
    /// # Returns
    ///
    /// `Unknown` when the quantity is missing or the thresholds are invalid;
    /// otherwise the tier the quantity falls in. Boundaries are inclusive:
    /// a quantity equal to a threshold belongs to the lower tier.
    pub fn classify(stock_quantity: Option<f64>, thresholds: &ThresholdConfig) -> Self {
        if !thresholds.is_valid() {
            return StockLevel::Unknown;
        }
        match stock_quantity {
            None => StockLevel::Unknown,
            Some(value) if value <= thresholds.low_threshold as f64 => StockLevel::Low,
            Some(value) if value <= thresholds.medium_threshold as f64 => StockLevel::Medium,
            Some(_) => StockLevel::High,
        }
    }
}

/// Records classified as Low under the given thresholds.
///
/// Records with a missing quantity classify as Unknown and are therefore
/// never included.
pub fn low_stock(records: &[ProductRecord], thresholds: &ThresholdConfig) -> Vec<ProductRecord> {
    records
        .iter()
        .filter(|record| StockLevel::classify(record.stock_quantity, thresholds) == StockLevel::Low)
        .cloned()
        .collect()
}

/// Records whose quantity is at or below the out-of-stock limit.
///
/// Records with a missing quantity are never included; absence of data is
/// not evidence of absence of stock.
pub fn out_of_stock(records: &[ProductRecord]) -> Vec<ProductRecord> {
    records
        .iter()
        .filter(|record| matches!(record.stock_quantity, Some(q) if q <= OUT_OF_STOCK_LIMIT))
        .cloned()
        .collect()
}

/// Tallies records per stock tier.
///
/// Every record lands in exactly one tier, so the counts sum to the record
/// count. Tiers with no records are absent from the map.
pub fn level_counts(
    records: &[ProductRecord],
    thresholds: &ThresholdConfig,
) -> BTreeMap<StockLevel, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts
            .entry(StockLevel::classify(record.stock_quantity, thresholds))
            .or_insert(0) += 1;
    }
    counts
}
