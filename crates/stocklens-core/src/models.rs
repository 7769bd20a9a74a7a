// Rust guideline compliant 2026-02-06

//! Core data models for Stocklens.

use serde::{Deserialize, Serialize};

/// Stock tier derived from the configured thresholds.
///
/// Computed on demand and never persisted. The ordering follows display
/// priority: `Low < Medium < High < Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Stock at or below the low threshold.
    Low,
    /// Stock above the low threshold and at or below the medium threshold.
    Medium,
    /// Stock above the medium threshold.
    High,
    /// Stock quantity missing, or the thresholds are invalid.
    Unknown,
}

/// A single product row extracted from an inventory ledger.
///
/// Records are immutable once produced by the ingestion pipeline. Missing
/// numeric values stay `None` rather than being coerced to zero, and an
/// unresolved Category or Group stays `None` rather than being guessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product code as it appears in the ledger, trimmed.
    pub code: String,
    /// Unit of measure (e.g. "UN", "KG").
    pub unit: String,
    /// Product description.
    pub name: String,
    /// Stock quantity; `None` when the ledger value was absent or unparseable.
    #[serde(default)]
    pub stock_quantity: Option<f64>,
    /// Monthly sales figure; only present for exports that carry the column.
    #[serde(default)]
    pub monthly_sales: Option<f64>,
    /// Category resolved from the nearest category-total row at or after
    /// this record; `None` past the last category boundary.
    #[serde(default)]
    pub category: Option<String>,
    /// Group resolved from the nearest group-total row at or after this
    /// record; `None` past the last group boundary.
    #[serde(default)]
    pub group: Option<String>,
}
