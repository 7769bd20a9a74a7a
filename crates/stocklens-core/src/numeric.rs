// Rust guideline compliant 2026-02-06

//! Quantity normalization for locale-formatted ledger values.
//!
//! Source exports format quantities with `.` as the thousands separator and
//! `,` as the decimal separator (e.g. `"1.234,50"`). Normalization strips the
//! thousands separators, swaps the decimal separator, and parses the result.
//! Anything unparseable becomes `None`; callers must treat `None` as
//! "unknown", never as zero.

/// Parses a locale-formatted quantity string into a numeric value.
///
/// Leading and trailing whitespace is ignored. Non-finite results (NaN,
/// infinities) are treated as missing so they never leak into arithmetic.
///
/// # Arguments
///
/// * `raw` - The raw quantity text from the ledger
///
/// # Returns
///
/// The parsed value, or `None` if the text does not represent a number.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace('.', "").replace(',', ".");
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}
