// File: crates/graph-core/src/extract.rs
// Summary: Axis resolution and row projection over header/row matrices.

use std::collections::HashMap;
use std::fmt;

use crate::error::ExtractError;
use crate::numeric::parse_numeric;

/// Named role an axis plays for a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    X,
    Y,
    Z,
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::X => f.write_str("X"),
            AxisRole::Y => f.write_str("Y"),
            AxisRole::Z => f.write_str("Z"),
        }
    }
}

/// User-chosen header names for each axis role. `z` stays unset for 2D charts
/// and is then never checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisSelection {
    pub x: String,
    pub y: String,
    pub z: Option<String>,
}

impl AxisSelection {
    /// Selection for a 2D chart (X and Y only).
    pub fn xy(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: None,
        }
    }

    /// Selection for a 3D chart (X, Y and Z).
    pub fn xyz(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: Some(z.into()),
        }
    }

    /// The synthetic header row handed onward with the projected rows.
    fn header(&self) -> Vec<String> {
        let mut header = vec![self.x.clone(), self.y.clone()];
        if let Some(z) = &self.z {
            header.push(z.clone());
        }
        header
    }
}

/// Per-key output row caps as supplied by the UI collaborator. Only the
/// `"X"` key is consulted; an absent or non-positive entry means no limit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowLimits(HashMap<String, i64>);

impl RowLimits {
    /// No caps at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single `"X"` cap.
    pub fn x(limit: i64) -> Self {
        let mut limits = Self::default();
        limits.insert("X", limit);
        limits
    }

    pub fn insert(&mut self, key: impl Into<String>, limit: i64) {
        self.0.insert(key.into(), limit);
    }

    /// Effective cap for `row_count` input rows: the `"X"` entry when it is
    /// strictly positive and strictly below the input size, otherwise the
    /// input size.
    pub fn effective_cap(&self, row_count: usize) -> usize {
        match self.0.get("X") {
            Some(&limit) if limit > 0 && (limit as usize) < row_count => limit as usize,
            _ => row_count,
        }
    }
}

/// Zero-based column positions for the selected axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisIndices {
    pub x: usize,
    pub y: usize,
    pub z: Option<usize>,
}

/// Resolve each selected axis to the first matching header column.
///
/// One left-to-right pass covers all axes, and each axis resolves
/// independently: coinciding axis names land on the same column, and with
/// duplicate header names the first occurrence wins. Fails with
/// [`ExtractError::AxisNotFound`] when any requested axis matches nothing;
/// there is no partial resolution.
pub fn resolve_columns(
    headers: &[String],
    selection: &AxisSelection,
) -> Result<AxisIndices, ExtractError> {
    let mut x = None;
    let mut y = None;
    let mut z = None;

    for (i, header) in headers.iter().enumerate() {
        if x.is_none() && *header == selection.x {
            x = Some(i);
        }
        if y.is_none() && *header == selection.y {
            y = Some(i);
        }
        if let Some(want) = &selection.z {
            if z.is_none() && header == want {
                z = Some(i);
            }
        }
    }

    let x = x.ok_or_else(|| ExtractError::AxisNotFound {
        axis: AxisRole::X,
        name: selection.x.clone(),
    })?;
    let y = y.ok_or_else(|| ExtractError::AxisNotFound {
        axis: AxisRole::Y,
        name: selection.y.clone(),
    })?;
    let z = match &selection.z {
        Some(want) => Some(z.ok_or_else(|| ExtractError::AxisNotFound {
            axis: AxisRole::Z,
            name: want.clone(),
        })?),
        None => None,
    };

    Ok(AxisIndices { x, y, z })
}

/// Rows reduced to the selected axis columns, plus the synthetic header row
/// the shaping layer expects in front of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Projection {
    /// Matrix form consumed by the shapers: header first, then data rows.
    pub fn into_matrix(self) -> Vec<Vec<String>> {
        let mut matrix = Vec::with_capacity(self.rows.len() + 1);
        matrix.push(self.header);
        matrix.extend(self.rows);
        matrix
    }
}

/// Project `rows` down to the resolved axis columns.
///
/// Iterates in order and stops once the effective cap is reached; the cap is
/// positional, so rows past it are never scanned. The Y cell (and Z cell when
/// present) must parse as a number — the first bad cell aborts the whole call
/// with [`ExtractError::InvalidNumericValue`] rather than skipping the row.
/// The X cell is never validated; it may be categorical.
///
/// Rows are expected to be as wide as the header they came with; ragged input
/// is a caller error.
pub fn project_rows(
    indices: AxisIndices,
    rows: &[Vec<String>],
    limits: &RowLimits,
) -> Result<Vec<Vec<String>>, ExtractError> {
    let cap = limits.effective_cap(rows.len());
    let mut selected = Vec::with_capacity(cap);

    for (i, row) in rows.iter().take(cap).enumerate() {
        if let Err(bad) = parse_numeric(&row[indices.y]) {
            return Err(ExtractError::InvalidNumericValue {
                row: i + 1,
                value: bad.0,
            });
        }
        if let Some(zi) = indices.z {
            if let Err(bad) = parse_numeric(&row[zi]) {
                return Err(ExtractError::InvalidNumericValue {
                    row: i + 1,
                    value: bad.0,
                });
            }
        }

        let mut cells = Vec::with_capacity(if indices.z.is_some() { 3 } else { 2 });
        cells.push(row[indices.x].clone());
        cells.push(row[indices.y].clone());
        if let Some(zi) = indices.z {
            cells.push(row[zi].clone());
        }
        selected.push(cells);
    }

    Ok(selected)
}

/// Resolve the selection, project the rows, and attach the synthetic header.
///
/// Resolution failures short-circuit before any row is scanned.
pub fn extract_selected(
    headers: &[String],
    rows: &[Vec<String>],
    selection: &AxisSelection,
    limits: &RowLimits,
) -> Result<Projection, ExtractError> {
    let indices = resolve_columns(headers, selection)?;
    let rows = project_rows(indices, rows, limits)?;
    Ok(Projection {
        header: selection.header(),
        rows,
    })
}
