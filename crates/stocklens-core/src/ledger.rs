// Rust guideline compliant 2026-02-06

//! Ledger ingestion for flat inventory exports.
//!
//! Source exports are delimited text reports: a handful of header lines,
//! followed by product rows interleaved with subtotal marker rows that close
//! the Category/Group segment above them. This module turns such a file into
//! a clean, flat `ProductRecord` collection with the hierarchy resolved and
//! quantities normalized.

use crate::error::Result;
use crate::filter::is_subtotal_row;
use crate::hierarchy;
use crate::models::ProductRecord;
use crate::numeric::parse_quantity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Zero-based column positions of the fields Stocklens extracts.
///
/// Positions are independent of how many columns a row actually has; absent
/// fields read as empty. The monthly-sales column is optional because most
/// exports do not carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Product code column.
    #[serde(default = "default_code_column")]
    pub code: usize,
    /// Unit of measure column.
    #[serde(default = "default_unit_column")]
    pub unit: usize,
    /// Product description column; also carries the subtotal markers.
    #[serde(default = "default_description_column")]
    pub description: usize,
    /// Stock quantity column.
    #[serde(default = "default_stock_column")]
    pub stock: usize,
    /// Monthly sales column, when the export carries one.
    #[serde(default)]
    pub monthly_sales: Option<usize>,
}

/// Default product code column.
fn default_code_column() -> usize {
    0
}

/// Default unit column.
fn default_unit_column() -> usize {
    1
}

/// Default description column.
fn default_description_column() -> usize {
    2
}

/// Default stock quantity column.
fn default_stock_column() -> usize {
    7
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            code: default_code_column(),
            unit: default_unit_column(),
            description: default_description_column(),
            stock: default_stock_column(),
            monthly_sales: None,
        }
    }
}

/// Shape of a ledger export.
///
/// The defaults match the source ERP export: `;`-delimited, Latin-1 encoded,
/// four report header lines, and Portuguese subtotal marker prefixes. All of
/// it is data, not code, so alternative exports can override any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerFormat {
    /// Field delimiter byte.
    #[serde(default = "default_delimiter")]
    pub delimiter: u8,
    /// Number of report header lines skipped before parsing.
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
    /// Column positions of the extracted fields.
    #[serde(default)]
    pub columns: ColumnMap,
    /// Prefix of Category-total rows; the label follows the prefix.
    #[serde(default = "default_category_marker")]
    pub category_marker: String,
    /// Prefix of Group-total rows; the label follows the prefix.
    #[serde(default = "default_group_marker")]
    pub group_marker: String,
}

/// Default field delimiter.
fn default_delimiter() -> u8 {
    b';'
}

/// Default number of skipped report header lines.
fn default_header_rows() -> usize {
    4
}

/// Default Category-total marker prefix.
fn default_category_marker() -> String {
    "* Total Categoria :".to_string()
}

/// Default Group-total marker prefix.
fn default_group_marker() -> String {
    "* Total GRUPO :".to_string()
}

impl Default for LedgerFormat {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            header_rows: default_header_rows(),
            columns: ColumnMap::default(),
            category_marker: default_category_marker(),
            group_marker: default_group_marker(),
        }
    }
}

/// One ledger row before filtering, field text as exported.
///
/// Short-lived: rows exist only between parsing and record assembly.
#[derive(Debug, Clone)]
pub(crate) struct RawRow {
    pub(crate) code: String,
    pub(crate) unit: String,
    pub(crate) description: String,
    pub(crate) monthly_sales: Option<String>,
    pub(crate) stock: String,
}

/// Loads product records from a ledger file.
///
/// A missing or unreadable file is not fatal: both yield an empty collection
/// with a logged diagnostic, so a report over a broken or not-yet-exported
/// ledger comes out empty instead of failing.
///
/// # Arguments
///
/// * `path` - Path to the ledger export
/// * `format` - Shape of the export
///
/// # Returns
///
/// All product records with hierarchy resolved and quantities normalized.
pub fn load_products(path: &Path, format: &LedgerFormat) -> Result<Vec<ProductRecord>> {
    if !path.exists() {
        warn!("Ledger file not found: {}; returning empty dataset", path.display());
        return Ok(Vec::new());
    }

    match fs::read(path) {
        Ok(bytes) => load_products_from_reader(bytes.as_slice(), format),
        Err(e) => {
            warn!(
                "Ledger file unreadable: {}: {}; returning empty dataset",
                path.display(),
                e
            );
            Ok(Vec::new())
        }
    }
}

/// Loads product records from any reader of ledger bytes.
///
/// The input is decoded as Latin-1 (the fixed encoding of the source
/// export), the configured header lines are skipped, and the remaining rows
/// run through hierarchy resolution, subtotal/blank-code filtering, and
/// quantity normalization.
///
/// # Arguments
///
/// * `reader` - Ledger bytes
/// * `format` - Shape of the export
///
/// # Returns
///
/// All product records extracted from the input.
///
/// # Errors
///
/// Returns an error if reading fails. Malformed rows are skipped with a
/// logged warning, not treated as fatal.
pub fn load_products_from_reader<R: Read>(
    reader: R,
    format: &LedgerFormat,
) -> Result<Vec<ProductRecord>> {
    let rows = read_raw_rows(reader, format)?;
    Ok(assemble_records(rows, format))
}

/// Reads and decodes the export into raw rows, skipping header lines.
fn read_raw_rows<R: Read>(mut reader: R, format: &LedgerFormat) -> Result<Vec<RawRow>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let decoded = decode_latin1(&bytes);
    let body = decoded
        .lines()
        .skip(format.header_rows)
        .collect::<Vec<_>>()
        .join("\n");

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let columns = &format.columns;
    let mut rows = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        match result {
            Ok(record) => {
                let field = |position: usize| record.get(position).unwrap_or("").to_string();
                rows.push(RawRow {
                    code: field(columns.code),
                    unit: field(columns.unit),
                    description: field(columns.description),
                    monthly_sales: columns.monthly_sales.map(|position| field(position)),
                    stock: field(columns.stock),
                });
            }
            Err(e) => {
                // Count from 1 and include the skipped header lines so the
                // number matches the line in the exported file.
                let line = format.header_rows + index + 1;
                warn!("Skipping malformed ledger row at line {}: {}", line, e);
            }
        }
    }

    Ok(rows)
}

/// Resolves hierarchy, drops subtotal and codeless rows, normalizes values.
fn assemble_records(rows: Vec<RawRow>, format: &LedgerFormat) -> Vec<ProductRecord> {
    let labels = hierarchy::resolve_labels(&rows, format);

    let mut records = Vec::new();
    for (row, (category, group)) in rows.into_iter().zip(labels) {
        if is_subtotal_row(&row.description, format) {
            continue;
        }
        let code = row.code.trim();
        if code.is_empty() {
            continue;
        }

        records.push(ProductRecord {
            code: code.to_string(),
            unit: row.unit.trim().to_string(),
            name: row.description.trim().to_string(),
            stock_quantity: parse_quantity(&row.stock),
            monthly_sales: row.monthly_sales.as_deref().and_then(parse_quantity),
            category,
            group,
        });
    }
    records
}

/// Decodes ISO-8859-1 bytes; every byte value maps to the same code point.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
