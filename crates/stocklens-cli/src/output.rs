// Rust guideline compliant 2026-02-06

//! Output formatting module for the Stocklens CLI.
//!
//! This module provides functionality for formatting inventory data
//! in various output formats (JSON, table, plain text).

use serde::Serialize;
use serde_json::json;
use std::collections::BTreeSet;
use std::io::Write;
use stocklens_core::{
    DatasetSummary, ExclusionConfig, ProductRecord, StockLevel, ThresholdConfig,
};
use tabled::{builder::Builder, settings::Style};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting inventory data in different output
/// formats.
pub trait OutputFormatter {
    /// Formats a list of product records for display.
    ///
    /// # Arguments
    /// * `records` - The records to format
    ///
    /// # Returns
    /// A formatted string representation of the record list
    fn format_records(&self, records: &[ProductRecord]) -> String;

    /// Formats the full inventory report.
    ///
    /// # Arguments
    /// * `summary` - Headline figures for the reported view
    /// * `records` - The records in the view
    /// * `top` - The highest-stock records, already ranked
    ///
    /// # Returns
    /// A formatted report string
    fn format_report(
        &self,
        summary: &DatasetSummary,
        records: &[ProductRecord],
        top: &[ProductRecord],
    ) -> String;

    /// Formats the low-stock view.
    ///
    /// # Arguments
    /// * `records` - The records classified Low
    /// * `by_category` - Distinct low-stock codes per category
    /// * `thresholds` - The thresholds the classification used
    ///
    /// # Returns
    /// A formatted low-stock string
    fn format_low_stock(
        &self,
        records: &[ProductRecord],
        by_category: &[(String, usize)],
        thresholds: &ThresholdConfig,
    ) -> String;

    /// Formats the per-tier classification tally.
    ///
    /// # Arguments
    /// * `counts` - Record count per tier, in tier order
    ///
    /// # Returns
    /// A formatted tally string
    fn format_levels(&self, counts: &[(StockLevel, usize)]) -> String;

    /// Formats the stock volume per group.
    ///
    /// # Arguments
    /// * `volumes` - Group names with their stock totals, in export order
    ///
    /// # Returns
    /// A formatted volume string
    fn format_group_volumes(&self, volumes: &[(String, f64)]) -> String;

    /// Formats the configured thresholds.
    ///
    /// # Arguments
    /// * `thresholds` - The threshold pair to format
    ///
    /// # Returns
    /// A formatted threshold string
    fn format_thresholds(&self, thresholds: &ThresholdConfig) -> String;

    /// Formats the configured exclusions.
    ///
    /// # Arguments
    /// * `exclusions` - The exclusion sets to format
    ///
    /// # Returns
    /// A formatted exclusion string
    fn format_exclusions(&self, exclusions: &ExclusionConfig) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats inventory data as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_records(&self, records: &[ProductRecord]) -> String {
        to_json_string(&json!({
            "products": records,
            "total": records.len(),
        }))
    }

    fn format_report(
        &self,
        summary: &DatasetSummary,
        records: &[ProductRecord],
        top: &[ProductRecord],
    ) -> String {
        to_json_string(&json!({
            "summary": summary,
            "products": records,
            "top_by_stock": top,
            "total": records.len(),
        }))
    }

    fn format_low_stock(
        &self,
        records: &[ProductRecord],
        by_category: &[(String, usize)],
        thresholds: &ThresholdConfig,
    ) -> String {
        let by_category: Vec<_> = by_category
            .iter()
            .map(|(category, count)| json!({ "category": category, "distinct_codes": count }))
            .collect();
        to_json_string(&json!({
            "low_threshold": thresholds.low_threshold,
            "products": records,
            "total": records.len(),
            "by_category": by_category,
        }))
    }

    fn format_levels(&self, counts: &[(StockLevel, usize)]) -> String {
        let levels: Vec<_> = counts
            .iter()
            .map(|(level, count)| json!({ "level": level, "products": count }))
            .collect();
        to_json_string(&json!({ "levels": levels }))
    }

    fn format_group_volumes(&self, volumes: &[(String, f64)]) -> String {
        let groups: Vec<_> = volumes
            .iter()
            .map(|(group, stock)| json!({ "group": group, "stock": stock }))
            .collect();
        to_json_string(&json!({
            "groups": groups,
            "total": volumes.len(),
        }))
    }

    fn format_thresholds(&self, thresholds: &ThresholdConfig) -> String {
        to_json_string(thresholds)
    }

    fn format_exclusions(&self, exclusions: &ExclusionConfig) -> String {
        to_json_string(exclusions)
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats inventory data as human-readable tables with colors and
/// alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn records_table(&self, records: &[ProductRecord]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Code", "Product", "Unit", "Stock", "Category", "Group"]);

        for record in records {
            builder.push_record(vec![
                record.code.clone(),
                record.name.clone(),
                record.unit.clone(),
                format_quantity(record.stock_quantity),
                record.category.as_deref().unwrap_or("-").to_string(),
                record.group.as_deref().unwrap_or("-").to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_records(&self, records: &[ProductRecord]) -> String {
        if records.is_empty() {
            return "No products found.".to_string();
        }
        self.records_table(records)
    }

    fn format_report(
        &self,
        summary: &DatasetSummary,
        records: &[ProductRecord],
        top: &[ProductRecord],
    ) -> String {
        let mut output = String::new();

        output.push_str(&format!("Products:    {}\n", summary.product_count));
        output.push_str(&format!("Codes:       {}\n", summary.distinct_codes));
        output.push_str(&format!(
            "Total stock: {}\n",
            format_quantity(Some(summary.total_stock))
        ));
        output.push_str(&format!("Categories:  {}\n", summary.category_count));
        output.push_str(&format!("Groups:      {}\n", summary.group_count));
        output.push('\n');
        output.push_str(&self.format_records(records));

        if !top.is_empty() {
            output.push_str("\n\nTop products by stock:\n");
            for record in top {
                output.push_str(&format!(
                    "  {}  {}  {}\n",
                    record.code,
                    format_quantity(record.stock_quantity),
                    record.name
                ));
            }
        }

        output
    }

    fn format_low_stock(
        &self,
        records: &[ProductRecord],
        by_category: &[(String, usize)],
        thresholds: &ThresholdConfig,
    ) -> String {
        if records.is_empty() {
            return format!(
                "No products at or below the low threshold ({}).",
                thresholds.low_threshold
            );
        }

        let mut output = format!(
            "Products at or below the low threshold ({}):\n",
            thresholds.low_threshold
        );
        output.push_str(&self.records_table(records));

        if !by_category.is_empty() {
            output.push_str("\n\nDistinct low-stock codes per category:\n");
            for (category, count) in by_category {
                output.push_str(&format!("  {}: {}\n", category, count));
            }
        }

        output
    }

    fn format_levels(&self, counts: &[(StockLevel, usize)]) -> String {
        if counts.is_empty() {
            return "No products found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Level", "Products"]);
        for (level, count) in counts {
            builder.push_record(vec![level_name(*level).to_string(), count.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_group_volumes(&self, volumes: &[(String, f64)]) -> String {
        if volumes.is_empty() {
            return "No stock volume per group to show.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Group", "Stock"]);
        for (group, stock) in volumes {
            builder.push_record(vec![group.clone(), format_quantity(Some(*stock))]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_thresholds(&self, thresholds: &ThresholdConfig) -> String {
        format!(
            "Low threshold:     {}\nMedium threshold:  {}\n",
            thresholds.low_threshold, thresholds.medium_threshold
        )
    }

    fn format_exclusions(&self, exclusions: &ExclusionConfig) -> String {
        if exclusions.is_empty() {
            return "No exclusions configured.".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "Excluded groups:     {}\n",
            join_or_dash(&exclusions.groups)
        ));
        output.push_str(&format!(
            "Excluded categories: {}\n",
            join_or_dash(&exclusions.categories)
        ));
        output.push_str(&format!(
            "Excluded codes:      {}\n",
            join_or_dash(&exclusions.product_codes)
        ));
        output
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut output = Vec::new();
            let mut stderr = StandardStream::stderr(ColorChoice::Auto);
            let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(output, "Error: ");
            let _ = stderr.reset();
            let _ = write!(output, "{}", error);
            String::from_utf8_lossy(&output).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats inventory data as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_records(&self, records: &[ProductRecord]) -> String {
        if records.is_empty() {
            return "No products found.".to_string();
        }

        let mut output = String::new();
        for record in records {
            output.push_str(&format!(
                "{} {} {}\n",
                record.code,
                format_quantity(record.stock_quantity),
                record.name
            ));
        }
        output
    }

    fn format_report(
        &self,
        summary: &DatasetSummary,
        records: &[ProductRecord],
        _top: &[ProductRecord],
    ) -> String {
        let mut output = format!(
            "{} products, {} codes, {} total stock, {} categories, {} groups\n",
            summary.product_count,
            summary.distinct_codes,
            format_quantity(Some(summary.total_stock)),
            summary.category_count,
            summary.group_count
        );
        output.push_str(&self.format_records(records));
        output
    }

    fn format_low_stock(
        &self,
        records: &[ProductRecord],
        by_category: &[(String, usize)],
        _thresholds: &ThresholdConfig,
    ) -> String {
        let mut output = self.format_records(records);
        if !by_category.is_empty() {
            output.push('\n');
            for (category, count) in by_category {
                output.push_str(&format!("{} {}\n", count, category));
            }
        }
        output
    }

    fn format_levels(&self, counts: &[(StockLevel, usize)]) -> String {
        let mut output = String::new();
        for (level, count) in counts {
            output.push_str(&format!("{} {}\n", level_name(*level), count));
        }
        output
    }

    fn format_group_volumes(&self, volumes: &[(String, f64)]) -> String {
        let mut output = String::new();
        for (group, stock) in volumes {
            output.push_str(&format!("{} {}\n", format_quantity(Some(*stock)), group));
        }
        output
    }

    fn format_thresholds(&self, thresholds: &ThresholdConfig) -> String {
        format!(
            "low_threshold {}\nmedium_threshold {}\n",
            thresholds.low_threshold, thresholds.medium_threshold
        )
    }

    fn format_exclusions(&self, exclusions: &ExclusionConfig) -> String {
        if exclusions.is_empty() {
            return "No exclusions configured.".to_string();
        }

        let mut output = String::new();
        for group in &exclusions.groups {
            output.push_str(&format!("group {}\n", group));
        }
        for category in &exclusions.categories {
            output.push_str(&format!("category {}\n", category));
        }
        for code in &exclusions.product_codes {
            output.push_str(&format!("code {}\n", code));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "table" => Box::new(TableFormatter::new(use_color)),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}

/// Human-readable tier name.
fn level_name(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Low => "Low",
        StockLevel::Medium => "Medium",
        StockLevel::High => "High",
        StockLevel::Unknown => "Unknown",
    }
}

/// Renders a quantity for display; missing values show as a dash.
fn format_quantity(quantity: Option<f64>) -> String {
    match quantity {
        Some(value) if value.fract() == 0.0 => format!("{value:.0}"),
        Some(value) => format!("{value:.2}"),
        None => "-".to_string(),
    }
}

/// Joins a set for one-line display; an empty set shows as a dash.
fn join_or_dash(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        "-".to_string()
    } else {
        set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

/// Serializes a value as pretty JSON, degrading to a JSON error object.
fn to_json_string<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
}
