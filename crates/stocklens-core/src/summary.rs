// Rust guideline compliant 2026-02-06

//! Read-only aggregation queries over a product dataset.
//!
//! Every query here takes a record slice and returns derived values; none of
//! them mutate the dataset, so callers can run them over any view (full,
//! exclusion-filtered, display-filtered) interchangeably.

use crate::classify;
use crate::models::ProductRecord;
use crate::settings::ThresholdConfig;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Headline figures for a dataset view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Number of records in the view.
    pub product_count: usize,
    /// Number of distinct product codes.
    pub distinct_codes: usize,
    /// Total stock quantity across the view.
    ///
    /// Missing quantities contribute zero here. This is the one place a
    /// missing quantity is treated as a number; classification keeps it
    /// Unknown.
    pub total_stock: f64,
    /// Number of distinct resolved categories.
    pub category_count: usize,
    /// Number of distinct resolved groups.
    pub group_count: usize,
}

/// Computes the headline figures for a dataset view.
pub fn summarize(records: &[ProductRecord]) -> DatasetSummary {
    let distinct_codes = records
        .iter()
        .map(|record| record.code.as_str())
        .collect::<BTreeSet<_>>()
        .len();
    let category_count = records
        .iter()
        .filter_map(|record| record.category.as_deref())
        .collect::<BTreeSet<_>>()
        .len();
    let group_count = records
        .iter()
        .filter_map(|record| record.group.as_deref())
        .collect::<BTreeSet<_>>()
        .len();

    DatasetSummary {
        product_count: records.len(),
        distinct_codes,
        total_stock: records.iter().filter_map(|record| record.stock_quantity).sum(),
        category_count,
        group_count,
    }
}

/// Total stock volume per resolved group.
///
/// Records without a resolved group are skipped and groups whose total is
/// not positive are dropped. Group names in the source export carry a
/// numeric prefix (e.g. `"10 FERRAGENS"`); groups sort by that prefix to
/// match the export's own ordering, with unprefixed names alphabetical
/// after them.
pub fn stock_by_group(records: &[ProductRecord]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        if let Some(group) = &record.group {
            *totals.entry(group.clone()).or_insert(0.0) += record.stock_quantity.unwrap_or(0.0);
        }
    }

    let mut volumes: Vec<(String, f64)> = totals
        .into_iter()
        .filter(|(_, total)| *total > 0.0)
        .collect();
    volumes.sort_by(|a, b| match (numeric_prefix(&a.0), numeric_prefix(&b.0)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.0.cmp(&b.0)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.0.cmp(&b.0),
    });
    volumes
}

/// Leading digits of a group name, when present.
fn numeric_prefix(name: &str) -> Option<u64> {
    let digits: String = name.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// The `limit` records with the highest stock quantity, highest first.
///
/// Records with a missing or non-positive quantity never rank. Ties break
/// by product name for a stable listing.
pub fn top_by_stock(records: &[ProductRecord], limit: usize) -> Vec<ProductRecord> {
    let mut ranked: Vec<ProductRecord> = records
        .iter()
        .filter(|record| matches!(record.stock_quantity, Some(q) if q > 0.0))
        .cloned()
        .collect();
    ranked.sort_by(|a, b| {
        descending(a.stock_quantity, b.stock_quantity).then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(limit);
    ranked
}

/// The `limit` records with the highest monthly sales, highest first.
///
/// Only meaningful when the export carries the monthly-sales column;
/// records without a positive sales figure never rank.
pub fn top_by_sales(records: &[ProductRecord], limit: usize) -> Vec<ProductRecord> {
    let mut ranked: Vec<ProductRecord> = records
        .iter()
        .filter(|record| matches!(record.monthly_sales, Some(s) if s > 0.0))
        .cloned()
        .collect();
    ranked.sort_by(|a, b| {
        descending(a.monthly_sales, b.monthly_sales).then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(limit);
    ranked
}

/// Descending order over quantities already known to be present and finite.
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Distinct low-stock product codes per category, highest count first.
///
/// Counts codes, not rows, so a product listed twice in one category tallies
/// once. Low-stock records without a resolved category are skipped. Ties
/// break by category name.
pub fn low_stock_by_category(
    records: &[ProductRecord],
    thresholds: &ThresholdConfig,
) -> Vec<(String, usize)> {
    let low = classify::low_stock(records, thresholds);

    let mut codes_per_category: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
    for record in &low {
        if let Some(category) = &record.category {
            codes_per_category
                .entry(category.clone())
                .or_default()
                .insert(record.code.as_str());
        }
    }

    let mut counts: Vec<(String, usize)> = codes_per_category
        .into_iter()
        .map(|(category, codes)| (category, codes.len()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        code: &str,
        stock_quantity: Option<f64>,
        category: Option<&str>,
        group: Option<&str>,
    ) -> ProductRecord {
        ProductRecord {
            code: code.to_string(),
            unit: "UN".to_string(),
            name: format!("PRODUTO {code}"),
            stock_quantity,
            monthly_sales: None,
            category: category.map(String::from),
            group: group.map(String::from),
        }
    }

    #[test]
    fn test_summarize_counts_distincts_and_sums_missing_as_zero() {
        let records = vec![
            record("A", Some(10.0), Some("C1"), Some("G1")),
            record("A", Some(5.0), Some("C1"), Some("G2")),
            record("B", None, Some("C2"), Some("G2")),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.product_count, 3);
        assert_eq!(summary.distinct_codes, 2);
        assert_eq!(summary.total_stock, 15.0);
        assert_eq!(summary.category_count, 2);
        assert_eq!(summary.group_count, 2);
    }

    #[test]
    fn test_summarize_empty_dataset_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.product_count, 0);
        assert_eq!(summary.total_stock, 0.0);
        assert_eq!(summary.category_count, 0);
    }

    #[test]
    fn test_stock_by_group_orders_by_numeric_prefix() {
        let records = vec![
            record("A", Some(1.0), None, Some("10 FERRAGENS")),
            record("B", Some(2.0), None, Some("2 PARAFUSOS")),
            record("C", Some(3.0), None, Some("SEM PREFIXO")),
        ];
        let volumes = stock_by_group(&records);
        let names: Vec<&str> = volumes.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["2 PARAFUSOS", "10 FERRAGENS", "SEM PREFIXO"]);
    }

    #[test]
    fn test_stock_by_group_drops_non_positive_totals() {
        let records = vec![
            record("A", Some(5.0), None, Some("1 ATIVO")),
            record("B", Some(0.0), None, Some("2 ZERADO")),
            record("C", Some(-4.0), None, Some("3 NEGATIVO")),
            record("D", None, None, Some("4 SEM DADO")),
        ];
        let volumes = stock_by_group(&records);
        assert_eq!(volumes, vec![("1 ATIVO".to_string(), 5.0)]);
    }

    #[test]
    fn test_stock_by_group_skips_unresolved_groups() {
        let records = vec![
            record("A", Some(5.0), None, Some("1 GRUPO")),
            record("B", Some(9.0), None, None),
        ];
        let volumes = stock_by_group(&records);
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].1, 5.0);
    }

    #[test]
    fn test_top_by_stock_ranks_positive_quantities_only() {
        let records = vec![
            record("A", Some(10.0), None, None),
            record("B", Some(30.0), None, None),
            record("C", Some(0.0), None, None),
            record("D", None, None, None),
            record("E", Some(20.0), None, None),
        ];
        let top = top_by_stock(&records, 2);
        let codes: Vec<&str> = top.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["B", "E"]);
    }

    #[test]
    fn test_top_by_stock_limit_exceeding_len_returns_all_ranked() {
        let records = vec![record("A", Some(1.0), None, None)];
        assert_eq!(top_by_stock(&records, 10).len(), 1);
    }

    #[test]
    fn test_top_by_sales_uses_sales_column() {
        let mut high = record("A", Some(1.0), None, None);
        high.monthly_sales = Some(99.0);
        let mut low = record("B", Some(100.0), None, None);
        low.monthly_sales = Some(2.0);
        let none = record("C", Some(50.0), None, None);

        let top = top_by_sales(&[low, none, high], 5);
        let codes: Vec<&str> = top.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_low_stock_by_category_counts_distinct_codes() {
        let thresholds = ThresholdConfig::new(10, 100);
        let records = vec![
            record("A", Some(1.0), Some("C1"), None),
            record("A", Some(2.0), Some("C1"), None),
            record("B", Some(3.0), Some("C1"), None),
            record("C", Some(4.0), Some("C2"), None),
            record("D", Some(500.0), Some("C2"), None),
            record("E", Some(5.0), None, None),
        ];
        let counts = low_stock_by_category(&records, &thresholds);
        assert_eq!(
            counts,
            vec![("C1".to_string(), 2), ("C2".to_string(), 1)]
        );
    }
}
