// File: crates/graph-core/src/error.rs
// Summary: Typed failures for column selection, row projection, and shaping.

use thiserror::Error;

use crate::extract::AxisRole;
use crate::kind::ChartKind;

/// Failures raised while resolving axis columns and projecting rows.
///
/// Both kinds are deterministic input-validation failures: they abort the
/// whole extraction with no partial result, and retrying cannot help.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A requested axis name has no matching header column.
    #[error("no column named '{name}' for the {axis} axis")]
    AxisNotFound { axis: AxisRole, name: String },

    /// A required numeric cell failed to parse. `row` is 1-based and does not
    /// count the header.
    #[error("row {row}: value '{value}' is not a valid number")]
    InvalidNumericValue { row: usize, value: String },
}

/// Failures raised while shaping a projected matrix into chart series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The matrix has no data rows under its header.
    #[error("insufficient data for {0} chart")]
    InsufficientData(ChartKind),

    /// The header row is narrower than the kind's column layout.
    #[error("{kind} chart requires at least {needed} columns: {roles}")]
    NotEnoughColumns {
        kind: ChartKind,
        needed: usize,
        roles: &'static str,
    },

    /// Every data row was skipped; there is nothing to chart.
    #[error("no valid data for {0} chart")]
    NoValidData(ChartKind),
}
