// File: crates/graph-core/src/numeric.rs
// Summary: Strict numeric parsing for cells that feed chart values.

use thiserror::Error;

/// Raised when a cell does not read as a bare numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value '{0}' is not a valid number")]
pub struct NotNumeric(pub String);

/// Interpret a single cell as a 64-bit float.
///
/// Accepts standard decimal notation: optional sign, digits, optional
/// fractional part, optional exponent. The cell must be a bare literal —
/// surrounding whitespace, locale formats, and thousands separators all fail.
pub fn parse_numeric(cell: &str) -> Result<f64, NotNumeric> {
    cell.parse::<f64>().map_err(|_| NotNumeric(cell.to_string()))
}
