// Rust guideline compliant 2026-02-06

//! Backward propagation of Category and Group labels.
//!
//! The export carries no hierarchy column. Instead, a subtotal marker row
//! closes the segment of rows above it, so a product's labels live in the
//! nearest marker row at or after it. Resolution runs in two passes per
//! dimension: collect the ordered marker boundaries, then assign each row by
//! binary search over the boundary positions. Rows past the last boundary of
//! a dimension stay unresolved.

use crate::ledger::{LedgerFormat, RawRow};

/// Resolves the `(category, group)` labels for every row position.
///
/// The returned vector is parallel to `rows`. The two dimensions resolve
/// independently; a marker row resolves to its own label because a boundary
/// covers its own position.
pub(crate) fn resolve_labels(
    rows: &[RawRow],
    format: &LedgerFormat,
) -> Vec<(Option<String>, Option<String>)> {
    let categories = assign(rows.len(), &boundaries(rows, &format.category_marker));
    let groups = assign(rows.len(), &boundaries(rows, &format.group_marker));
    categories.into_iter().zip(groups).collect()
}

/// Extracts the label from a marker description.
///
/// Returns `None` when the trimmed description does not start with the
/// marker prefix.
pub(crate) fn marker_label(description: &str, prefix: &str) -> Option<String> {
    description
        .trim()
        .strip_prefix(prefix)
        .map(|rest| rest.trim().to_string())
}

/// First pass: ordered `(position, label)` boundaries for one marker prefix.
fn boundaries(rows: &[RawRow], prefix: &str) -> Vec<(usize, String)> {
    rows.iter()
        .enumerate()
        .filter_map(|(position, row)| {
            marker_label(&row.description, prefix).map(|label| (position, label))
        })
        .collect()
}

/// Second pass: each row takes the nearest boundary at or after its position.
fn assign(row_count: usize, boundaries: &[(usize, String)]) -> Vec<Option<String>> {
    (0..row_count)
        .map(|position| {
            let next = boundaries.partition_point(|(boundary, _)| *boundary < position);
            boundaries.get(next).map(|(_, label)| label.clone())
        })
        .collect()
}
