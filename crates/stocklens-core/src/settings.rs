// Rust guideline compliant 2026-02-06

//! Persistent user settings: tier thresholds and exclusion sets.
//!
//! All settings live in one JSON document. Stores read and write that
//! document as a raw object and touch only the keys they own, so fields
//! written by other tools or future versions survive a partial save. Loads
//! never fail: a missing, corrupt, or invalid document degrades to defaults
//! with a logged warning, keeping reporting available.

use crate::error::{Error, Result};
use crate::models::ProductRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

/// Default settings file name, resolved in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "stocklens.json";

/// Default Low tier boundary.
pub const DEFAULT_LOW_THRESHOLD: i64 = 10;

/// Default Medium tier boundary.
pub const DEFAULT_MEDIUM_THRESHOLD: i64 = 100;

const KEY_LOW_THRESHOLD: &str = "low_threshold";
const KEY_MEDIUM_THRESHOLD: &str = "medium_threshold";
const KEY_EXCLUDED_GROUPS: &str = "excluded_groups";
const KEY_EXCLUDED_CATEGORIES: &str = "excluded_categories";
const KEY_EXCLUDED_PRODUCT_CODES: &str = "excluded_product_codes";

/// Stock tier boundaries.
///
/// A quantity at or below `low_threshold` is Low; above it and at or below
/// `medium_threshold` is Medium; above that is High. The pair is valid when
/// the low threshold is non-negative and the medium threshold is strictly
/// greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Upper boundary of the Low tier, inclusive.
    #[serde(default = "default_low_threshold")]
    pub low_threshold: i64,
    /// Upper boundary of the Medium tier, inclusive.
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: i64,
}

/// Default Low tier boundary.
fn default_low_threshold() -> i64 {
    DEFAULT_LOW_THRESHOLD
}

/// Default Medium tier boundary.
fn default_medium_threshold() -> i64 {
    DEFAULT_MEDIUM_THRESHOLD
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            low_threshold: default_low_threshold(),
            medium_threshold: default_medium_threshold(),
        }
    }
}

impl ThresholdConfig {
    /// Creates a threshold pair without validating it.
    pub fn new(low_threshold: i64, medium_threshold: i64) -> Self {
        Self {
            low_threshold,
            medium_threshold,
        }
    }

    /// Returns true when the pair can classify quantities.
    pub fn is_valid(&self) -> bool {
        self.low_threshold >= 0 && self.medium_threshold > self.low_threshold
    }

    /// Validates the pair, reporting the first violated rule.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidThresholds` when the low threshold is negative
    /// or the medium threshold does not exceed it.
    pub fn validate(&self) -> Result<()> {
        if self.low_threshold < 0 {
            return Err(Error::InvalidThresholds(format!(
                "low threshold cannot be negative, got {}",
                self.low_threshold
            )));
        }
        if self.medium_threshold <= self.low_threshold {
            return Err(Error::InvalidThresholds(format!(
                "medium threshold must be greater than the low threshold ({} <= {})",
                self.medium_threshold, self.low_threshold
            )));
        }
        Ok(())
    }
}

/// Sets of labels and codes removed from reporting views.
///
/// A record is excluded when its code, resolved category, or resolved group
/// is a member of the corresponding set. Membership is exact and
/// case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionConfig {
    /// Excluded group labels.
    #[serde(default)]
    pub groups: BTreeSet<String>,
    /// Excluded category labels.
    #[serde(default)]
    pub categories: BTreeSet<String>,
    /// Excluded product codes.
    #[serde(default)]
    pub product_codes: BTreeSet<String>,
}

impl ExclusionConfig {
    /// Builds a configuration from optional lists, deduplicating entries.
    ///
    /// # Arguments
    ///
    /// * `groups` - Group labels to exclude
    /// * `categories` - Category labels to exclude
    /// * `product_codes` - Product codes to exclude
    pub fn from_lists(
        groups: Option<Vec<String>>,
        categories: Option<Vec<String>>,
        product_codes: Option<Vec<String>>,
    ) -> Self {
        Self {
            groups: groups.unwrap_or_default().into_iter().collect(),
            categories: categories.unwrap_or_default().into_iter().collect(),
            product_codes: product_codes.unwrap_or_default().into_iter().collect(),
        }
    }

    /// Returns true when every set is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.categories.is_empty() && self.product_codes.is_empty()
    }

    /// Returns true when the record matches any populated set.
    ///
    /// A record with an unresolved category or group cannot match the
    /// category or group set.
    pub fn excludes(&self, record: &ProductRecord) -> bool {
        if self.product_codes.contains(&record.code) {
            return true;
        }
        if let Some(category) = &record.category {
            if self.categories.contains(category) {
                return true;
            }
        }
        if let Some(group) = &record.group {
            if self.groups.contains(group) {
                return true;
            }
        }
        false
    }
}

/// Storage backend for user settings.
///
/// Reporting code takes `&dyn SettingsStore`, so it stays independent of
/// where the settings live. Loads are infallible and degrade to defaults;
/// saves validate before touching the backing document.
pub trait SettingsStore {
    /// Loads the threshold pair, falling back to defaults when the stored
    /// values are missing, malformed, or invalid as a pair.
    fn load_thresholds(&self) -> ThresholdConfig;

    /// Persists a threshold pair.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidThresholds` without writing when the pair is
    /// invalid, or an IO/serialization error when persisting fails.
    fn save_thresholds(&self, low_threshold: i64, medium_threshold: i64) -> Result<()>;

    /// Loads the exclusion sets, falling back to empty sets when the stored
    /// values are missing or malformed.
    fn load_exclusions(&self) -> ExclusionConfig;

    /// Persists the exclusion sets, replacing the stored ones.
    ///
    /// # Errors
    ///
    /// Returns an IO/serialization error when persisting fails.
    fn save_exclusions(&self, exclusions: &ExclusionConfig) -> Result<()>;
}

/// Reads the threshold keys out of a settings document.
fn thresholds_from_document(document: &Map<String, Value>) -> ThresholdConfig {
    let defaults = ThresholdConfig::default();
    let low = document.get(KEY_LOW_THRESHOLD);
    let medium = document.get(KEY_MEDIUM_THRESHOLD);

    // A present key that is not an integer poisons the whole pair.
    let non_integer = |value: Option<&Value>| value.map_or(false, |v| v.as_i64().is_none());
    if non_integer(low) || non_integer(medium) {
        warn!("Non-integer threshold in settings; using defaults");
        return defaults;
    }

    let config = ThresholdConfig {
        low_threshold: low.and_then(Value::as_i64).unwrap_or(defaults.low_threshold),
        medium_threshold: medium
            .and_then(Value::as_i64)
            .unwrap_or(defaults.medium_threshold),
    };
    if config.is_valid() {
        config
    } else {
        warn!(
            "Invalid thresholds in settings (low={}, medium={}); using defaults",
            config.low_threshold, config.medium_threshold
        );
        defaults
    }
}

/// Reads the exclusion keys out of a settings document.
fn exclusions_from_document(document: &Map<String, Value>) -> ExclusionConfig {
    ExclusionConfig {
        groups: string_set(document, KEY_EXCLUDED_GROUPS),
        categories: string_set(document, KEY_EXCLUDED_CATEGORIES),
        product_codes: string_set(document, KEY_EXCLUDED_PRODUCT_CODES),
    }
}

/// Reads one key as a set of strings.
///
/// A missing key reads as empty; a non-array value or non-string entry is
/// skipped with a warning.
fn string_set(document: &Map<String, Value>, key: &str) -> BTreeSet<String> {
    match document.get(key) {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| match entry {
                Value::String(text) => Some(text.clone()),
                other => {
                    warn!("Skipping non-string entry in {}: {}", key, other);
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!("Expected an array for {}; found {}", key, other);
            BTreeSet::new()
        }
        None => BTreeSet::new(),
    }
}

/// Writes the threshold keys into a settings document.
fn write_thresholds(document: &mut Map<String, Value>, thresholds: &ThresholdConfig) {
    document.insert(
        KEY_LOW_THRESHOLD.to_string(),
        Value::from(thresholds.low_threshold),
    );
    document.insert(
        KEY_MEDIUM_THRESHOLD.to_string(),
        Value::from(thresholds.medium_threshold),
    );
}

/// Writes the exclusion keys into a settings document.
fn write_exclusions(document: &mut Map<String, Value>, exclusions: &ExclusionConfig) {
    document.insert(KEY_EXCLUDED_GROUPS.to_string(), string_array(&exclusions.groups));
    document.insert(
        KEY_EXCLUDED_CATEGORIES.to_string(),
        string_array(&exclusions.categories),
    );
    document.insert(
        KEY_EXCLUDED_PRODUCT_CODES.to_string(),
        string_array(&exclusions.product_codes),
    );
}

/// Renders a string set as a JSON array.
fn string_array(set: &BTreeSet<String>) -> Value {
    Value::Array(set.iter().map(|entry| Value::String(entry.clone())).collect())
}

/// Settings store backed by a JSON file on disk.
///
/// Saves rewrite the file atomically through a temp-file rename, so a crash
/// mid-save leaves the previous document intact. Concurrent writers are not
/// coordinated; the last completed save wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given settings file path.
    ///
    /// The file does not need to exist; loads from a missing file return
    /// defaults and the first save creates it.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings document, degrading to empty on any problem.
    fn read_document(&self) -> Map<String, Value> {
        if !self.path.exists() {
            return Map::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Failed to read settings file {}: {}; using defaults",
                    self.path.display(),
                    e
                );
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(document)) => document,
            Ok(_) => {
                warn!(
                    "Settings file {} is not a JSON object; using defaults",
                    self.path.display()
                );
                Map::new()
            }
            Err(e) => {
                warn!(
                    "Settings file {} is corrupt: {}; using defaults",
                    self.path.display(),
                    e
                );
                Map::new()
            }
        }
    }

    /// Writes the settings document atomically.
    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        let temp_path = self.path.with_extension("json.tmp");

        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn load_thresholds(&self) -> ThresholdConfig {
        thresholds_from_document(&self.read_document())
    }

    fn save_thresholds(&self, low_threshold: i64, medium_threshold: i64) -> Result<()> {
        let thresholds = ThresholdConfig::new(low_threshold, medium_threshold);
        thresholds.validate()?;

        let mut document = self.read_document();
        write_thresholds(&mut document, &thresholds);
        self.write_document(&document)
    }

    fn load_exclusions(&self) -> ExclusionConfig {
        exclusions_from_document(&self.read_document())
    }

    fn save_exclusions(&self, exclusions: &ExclusionConfig) -> Result<()> {
        let mut document = self.read_document();
        write_exclusions(&mut document, exclusions);
        self.write_document(&document)
    }
}

/// In-memory settings store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Map<String, Value>>,
}

impl MemoryStore {
    /// Creates an empty store; loads return defaults until a save lands.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Map<String, Value>> {
        self.document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SettingsStore for MemoryStore {
    fn load_thresholds(&self) -> ThresholdConfig {
        thresholds_from_document(&self.lock())
    }

    fn save_thresholds(&self, low_threshold: i64, medium_threshold: i64) -> Result<()> {
        let thresholds = ThresholdConfig::new(low_threshold, medium_threshold);
        thresholds.validate()?;

        let mut document = self.lock();
        write_thresholds(&mut document, &thresholds);
        Ok(())
    }

    fn load_exclusions(&self) -> ExclusionConfig {
        exclusions_from_document(&self.lock())
    }

    fn save_exclusions(&self, exclusions: &ExclusionConfig) -> Result<()> {
        let mut document = self.lock();
        write_exclusions(&mut document, exclusions);
        Ok(())
    }
}
