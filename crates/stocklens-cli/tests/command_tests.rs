// Rust guideline compliant 2026-02-06

//! Integration tests for CLI commands.

use std::fs;
use stocklens_cli::{commands, create_formatter};
use stocklens_core::{DisplayFilter, JsonFileStore, SettingsStore};
use tempfile::TempDir;

const SAMPLE_LEDGER: &str = "\
Relatorio de estoque\n\
Empresa de materiais\n\
Emitido em 16/05\n\
Codigo;Un;Descricao;;;;;Estoque\n\
001234;UN;TORNEIRA 1/2;;;;;12,00\n\
005678;UN;CANO 20MM;;;;;0,00\n\
;;* Total GRUPO : 11 - HIDRAULICA;;;;;12,00\n\
;;* Total Categoria : CONSTRUCAO;;;;;12,00\n\
009999;KG;PREGO 17X21;;;;;5,50\n\
;;* Total GRUPO : 20 - FERRAGENS;;;;;5,50\n\
;;* Total Categoria : CONSTRUCAO;;;;;5,50\n";

/// Helper to write the sample ledger and return its path as a string.
fn write_sample_ledger(temp_dir: &TempDir) -> String {
    let path = temp_dir.path().join("ledger.csv");
    fs::write(&path, SAMPLE_LEDGER).expect("Failed to write sample ledger");
    path.display().to_string()
}

/// Helper to open a settings store inside the temp directory.
fn settings_store(temp_dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(temp_dir.path().join("stocklens.json"))
}

#[test]
fn test_report_runs_on_sample_ledger() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ledger = write_sample_ledger(&temp_dir);
    let store = settings_store(&temp_dir);
    let formatter = create_formatter("plain", false);

    let result = commands::report::execute(
        ledger,
        DisplayFilter::default(),
        false,
        None,
        &store,
        formatter.as_ref(),
    );

    assert!(result.is_ok(), "report should succeed on a valid ledger");
}

#[test]
fn test_report_with_display_filter() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ledger = write_sample_ledger(&temp_dir);
    let store = settings_store(&temp_dir);
    let formatter = create_formatter("json", false);

    let filter = DisplayFilter {
        category: Some("CONSTRUCAO".to_string()),
        ..Default::default()
    };
    let result = commands::report::execute(ledger, filter, false, Some(2), &store, formatter.as_ref());

    assert!(result.is_ok(), "filtered report should succeed");
}

#[test]
fn test_report_on_missing_ledger_reports_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ledger = temp_dir.path().join("no-such-export.csv").display().to_string();
    let store = settings_store(&temp_dir);
    let formatter = create_formatter("plain", false);

    let result = commands::report::execute(
        ledger,
        DisplayFilter::default(),
        false,
        None,
        &store,
        formatter.as_ref(),
    );

    assert!(result.is_ok(), "a missing ledger reports an empty dataset");
}

#[test]
fn test_groups_command_runs() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ledger = write_sample_ledger(&temp_dir);
    let store = settings_store(&temp_dir);
    let formatter = create_formatter("plain", false);

    let result = commands::groups::execute(ledger, &store, formatter.as_ref());

    assert!(result.is_ok(), "groups should succeed on a valid ledger");
}

#[test]
fn test_levels_command_runs() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ledger = write_sample_ledger(&temp_dir);
    let store = settings_store(&temp_dir);
    let formatter = create_formatter("table", false);

    let result = commands::levels::execute(ledger, &store, formatter.as_ref());

    assert!(result.is_ok(), "levels should succeed on a valid ledger");
}

#[test]
fn test_out_of_stock_command_runs() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ledger = write_sample_ledger(&temp_dir);
    let store = settings_store(&temp_dir);
    let formatter = create_formatter("plain", false);

    let result = commands::out_of_stock::execute(ledger, &store, formatter.as_ref());

    assert!(result.is_ok(), "out-of-stock should succeed on a valid ledger");
}

#[test]
fn test_low_stock_command_runs_with_custom_thresholds() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ledger = write_sample_ledger(&temp_dir);
    let store = settings_store(&temp_dir);
    let formatter = create_formatter("plain", false);

    commands::thresholds::set(5, 50, &store).expect("Failed to set thresholds");
    let result = commands::low_stock::execute(ledger, &store, formatter.as_ref());

    assert!(result.is_ok(), "low-stock should succeed on a valid ledger");
}

#[test]
fn test_thresholds_set_persists() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = settings_store(&temp_dir);

    commands::thresholds::set(5, 50, &store).expect("Failed to set thresholds");

    let thresholds = store.load_thresholds();
    assert_eq!(thresholds.low_threshold, 5);
    assert_eq!(thresholds.medium_threshold, 50);

    // A freshly opened store sees the same values.
    let reopened = settings_store(&temp_dir);
    assert_eq!(reopened.load_thresholds().low_threshold, 5);
}

#[test]
fn test_thresholds_set_rejects_invalid_pair() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = settings_store(&temp_dir);

    let result = commands::thresholds::set(50, 5, &store);

    assert!(result.is_err(), "medium must be greater than low");
    assert_eq!(
        store.load_thresholds().low_threshold,
        stocklens_core::settings::DEFAULT_LOW_THRESHOLD,
        "rejected thresholds should not be persisted"
    );
}

#[test]
fn test_exclusions_add_then_remove() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = settings_store(&temp_dir);

    commands::exclusions::add(
        vec!["20 - FERRAGENS".to_string()],
        vec![],
        vec!["001234".to_string()],
        &store,
    )
    .expect("Failed to add exclusions");

    let exclusions = store.load_exclusions();
    assert!(exclusions.groups.contains("20 - FERRAGENS"));
    assert!(exclusions.product_codes.contains("001234"));

    commands::exclusions::remove(vec!["20 - FERRAGENS".to_string()], vec![], vec![], &store)
        .expect("Failed to remove exclusions");

    let exclusions = store.load_exclusions();
    assert!(!exclusions.groups.contains("20 - FERRAGENS"));
    assert!(exclusions.product_codes.contains("001234"));
}

#[test]
fn test_exclusions_add_requires_entries() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = settings_store(&temp_dir);

    let result = commands::exclusions::add(vec![], vec![], vec![], &store);

    assert!(result.is_err(), "add without entries is a usage error");
}

#[test]
fn test_exclusions_remove_without_match_is_ok() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = settings_store(&temp_dir);

    let result = commands::exclusions::remove(vec!["NOPE".to_string()], vec![], vec![], &store);

    assert!(result.is_ok(), "removing a missing entry only warns");
    assert!(store.load_exclusions().is_empty());
}

#[test]
fn test_exclusions_set_replaces_and_clears() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = settings_store(&temp_dir);

    commands::exclusions::set(
        vec!["97 - USO E CONSUMO".to_string()],
        vec!["DESCONTINUADOS".to_string()],
        vec![],
        &store,
    )
    .expect("Failed to set exclusions");
    assert_eq!(store.load_exclusions().groups.len(), 1);

    commands::exclusions::set(vec!["11 - HIDRAULICA".to_string()], vec![], vec![], &store)
        .expect("Failed to replace exclusions");
    let exclusions = store.load_exclusions();
    assert!(exclusions.groups.contains("11 - HIDRAULICA"));
    assert!(
        !exclusions.groups.contains("97 - USO E CONSUMO"),
        "set replaces the previous sets"
    );
    assert!(exclusions.categories.is_empty());

    commands::exclusions::set(vec![], vec![], vec![], &store).expect("Failed to clear exclusions");
    assert!(store.load_exclusions().is_empty(), "set with no flags clears");
}

#[test]
fn test_report_include_excluded_bypasses_exclusions() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ledger = write_sample_ledger(&temp_dir);
    let store = settings_store(&temp_dir);
    let formatter = create_formatter("json", false);

    commands::exclusions::add(vec![], vec![], vec!["001234".to_string()], &store)
        .expect("Failed to add exclusions");

    let result = commands::report::execute(
        ledger,
        DisplayFilter::default(),
        true,
        None,
        &store,
        formatter.as_ref(),
    );

    assert!(result.is_ok(), "report with --include-excluded should succeed");
}
