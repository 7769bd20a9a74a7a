// Rust guideline compliant 2026-02-06

//! Property-based tests for ledger ingestion.
//!
//! These tests validate universal properties that should hold across all valid inputs.

use proptest::prelude::*;
use stocklens_core::{load_products_from_reader, LedgerFormat};

/// Four report header lines, matching the default format.
const LEDGER_HEADER: &str = "POSICAO DE ESTOQUE\nEMPRESA MODELO LTDA\nTODOS OS PRODUTOS\n;;;;;;;\n";

/// Generates arbitrary product codes.
fn arb_code() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{6}").unwrap()
}

/// Generates arbitrary labels free of delimiter and marker characters.
fn arb_label() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{3,10}").unwrap()
}

/// Generates a group segment: product codes plus the group label.
fn arb_segment() -> impl Strategy<Value = (Vec<String>, String)> {
    (prop::collection::vec(arb_code(), 1..5), arb_label())
}

/// Formats a quantity the way the source export does: dotted thousands and
/// a comma decimal separator.
fn format_export_quantity(int_part: u64, frac: u32) -> String {
    let digits = int_part.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{grouped},{frac:02}")
}

proptest! {
    /// **Property 1: Segment Label Inheritance**
    ///
    /// Every product row resolves to the group label of the marker that
    /// closes its segment, and to the category label that closes the file,
    /// regardless of how many segments precede it.
    #[test]
    fn test_products_inherit_their_segment_labels(
        segments in prop::collection::vec(arb_segment(), 1..4),
        category in arb_label(),
    ) {
        let mut body = String::new();
        let mut expected: Vec<(String, String)> = Vec::new();
        for (codes, group) in &segments {
            for code in codes {
                body.push_str(&format!("{code};UN;PRODUTO {code};;;;;5\n"));
                expected.push((code.clone(), group.clone()));
            }
            body.push_str(&format!(";;* Total GRUPO : {group};;;;;0\n"));
        }
        body.push_str(&format!(";;* Total Categoria : {category};;;;;0\n"));

        let ledger = format!("{LEDGER_HEADER}{body}");
        let records = load_products_from_reader(ledger.as_bytes(), &LedgerFormat::default())
            .expect("Synthetic ledger should load");

        prop_assert_eq!(records.len(), expected.len());
        for (record, (code, group)) in records.iter().zip(&expected) {
            prop_assert_eq!(&record.code, code);
            prop_assert_eq!(record.group.as_deref(), Some(group.as_str()));
            prop_assert_eq!(record.category.as_deref(), Some(category.as_str()));
        }
    }

    /// **Property 2: Marker and Codeless Rows Never Survive**
    ///
    /// No returned record carries a subtotal marker name, and interleaved
    /// rows with a blank code never change the record count.
    #[test]
    fn test_marker_and_codeless_rows_never_survive(
        codes in prop::collection::vec(arb_code(), 1..10),
        group in arb_label(),
    ) {
        let mut body = String::new();
        for code in &codes {
            // Interleave a codeless noise row before every product row.
            body.push_str(";UN;LINHA DECORATIVA;;;;;0\n");
            body.push_str(&format!("{code};UN;PRODUTO {code};;;;;5\n"));
        }
        body.push_str(&format!(";;* Total GRUPO : {group};;;;;0\n"));

        let ledger = format!("{LEDGER_HEADER}{body}");
        let records = load_products_from_reader(ledger.as_bytes(), &LedgerFormat::default())
            .expect("Synthetic ledger should load");

        prop_assert_eq!(records.len(), codes.len());
        for record in &records {
            prop_assert!(!record.name.starts_with("* Total"), "Marker row leaked: {}", record.name);
            prop_assert!(!record.code.is_empty(), "Codeless row leaked");
        }
    }

    /// **Property 3: Locale Quantity Round-Trip**
    ///
    /// A quantity rendered with dotted thousands separators and a comma
    /// decimal separator parses back to the value it renders.
    #[test]
    fn test_export_quantities_parse_back(
        int_part in 0u64..100_000_000u64,
        frac in 0u32..100u32,
    ) {
        let formatted = format_export_quantity(int_part, frac);
        let ledger = format!(
            "{LEDGER_HEADER}000001;UN;PRODUTO TESTE;;;;;{formatted}\n;;* Total GRUPO : G;;;;;0\n"
        );
        let records = load_products_from_reader(ledger.as_bytes(), &LedgerFormat::default())
            .expect("Synthetic ledger should load");

        let expected = int_part as f64 + f64::from(frac) / 100.0;
        let quantity = records[0].stock_quantity.expect("Quantity should parse");
        prop_assert!(
            (quantity - expected).abs() < 1e-6,
            "Parsed {} from {}, expected {}",
            quantity,
            formatted,
            expected
        );
    }
}
