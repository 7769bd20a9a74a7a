// Rust guideline compliant 2026-02-06

//! Record selection: subtotal removal, configured exclusions, and
//! display-side filtering.

use crate::ledger::LedgerFormat;
use crate::models::ProductRecord;
use crate::settings::ExclusionConfig;
use rayon::prelude::*;

/// Record count above which filtering switches to parallel iteration.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Returns true when the description marks a Category- or Group-total row.
pub(crate) fn is_subtotal_row(description: &str, format: &LedgerFormat) -> bool {
    let trimmed = description.trim();
    trimmed.starts_with(format.category_marker.as_str())
        || trimmed.starts_with(format.group_marker.as_str())
}

/// Removes records matching the configured exclusion sets.
///
/// Membership is exact and case-sensitive. A record with an unresolved
/// Category or Group never matches a category/group exclusion. An empty
/// configuration returns the input unchanged.
///
/// # Arguments
///
/// * `records` - The records to filter
/// * `exclusions` - The configured exclusion sets
///
/// # Returns
///
/// The surviving records, in their original order.
pub fn apply_exclusions(
    records: Vec<ProductRecord>,
    exclusions: &ExclusionConfig,
) -> Vec<ProductRecord> {
    if exclusions.is_empty() {
        return records;
    }

    if records.len() >= PARALLEL_THRESHOLD {
        records
            .into_par_iter()
            .filter(|record| !exclusions.excludes(record))
            .collect()
    } else {
        records
            .into_iter()
            .filter(|record| !exclusions.excludes(record))
            .collect()
    }
}

/// Display-side selection criteria.
///
/// Unlike exclusions, these select rather than remove: a record passes when
/// it matches every populated field. Category and Group match exactly; the
/// name filter is a case-insensitive substring match. Blank filter text is
/// treated as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayFilter {
    /// Keep records whose resolved category equals this value.
    pub category: Option<String>,
    /// Keep records whose resolved group equals this value.
    pub group: Option<String>,
    /// Keep records whose name contains this text, ignoring case.
    pub name_contains: Option<String>,
}

impl DisplayFilter {
    /// Returns true when no criterion is populated.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.group.is_none()
            && self.name_contains.as_deref().map_or(true, |n| n.trim().is_empty())
    }

    /// Returns true when the record satisfies every populated criterion.
    fn matches(&self, record: &ProductRecord) -> bool {
        if let Some(category) = &self.category {
            if record.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(group) = &self.group {
            if record.group.as_deref() != Some(group.as_str()) {
                return false;
            }
        }
        if let Some(needle) = &self.name_contains {
            let needle = needle.trim();
            if !needle.is_empty()
                && !record.name.to_lowercase().contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Applies display criteria, preserving record order.
///
/// The source records are never mutated elsewhere by this: each call starts
/// from whatever view the caller passes in, so stacked calls compose.
pub fn apply_display_filter(
    records: Vec<ProductRecord>,
    filter: &DisplayFilter,
) -> Vec<ProductRecord> {
    if filter.is_empty() {
        return records;
    }

    if records.len() >= PARALLEL_THRESHOLD {
        records
            .into_par_iter()
            .filter(|record| filter.matches(record))
            .collect()
    } else {
        records
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect()
    }
}
