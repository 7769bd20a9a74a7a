// Rust guideline compliant 2026-02-06

//! Stocklens Core Library
//!
//! This crate provides the foundational components for the Stocklens
//! inventory reporting system:
//! - Data models (ProductRecord, StockLevel)
//! - Ledger ingestion (delimited exports, hierarchy resolution)
//! - Quantity normalization for locale-formatted numbers
//! - Record filtering (exclusion sets, display criteria)
//! - Classification (stock tiers, low/out-of-stock states)
//! - Aggregation queries for reporting views
//! - Settings persistence (thresholds, exclusions) over one JSON document
//! - Error types and result handling

pub mod classify;
pub mod error;
pub mod filter;
mod hierarchy;
pub mod ledger;
pub mod models;
pub mod numeric;
pub mod settings;
pub mod summary;

pub use classify::{level_counts, low_stock, out_of_stock, OUT_OF_STOCK_LIMIT};
pub use error::{Error, Result};
pub use filter::{apply_display_filter, apply_exclusions, DisplayFilter};
pub use ledger::{load_products, load_products_from_reader, ColumnMap, LedgerFormat};
pub use models::{ProductRecord, StockLevel};
pub use numeric::parse_quantity;
pub use settings::{
    ExclusionConfig, JsonFileStore, MemoryStore, SettingsStore, ThresholdConfig,
    DEFAULT_SETTINGS_FILE,
};
pub use summary::{
    low_stock_by_category, stock_by_group, summarize, top_by_sales, top_by_stock, DatasetSummary,
};
