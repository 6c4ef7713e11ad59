// File: crates/graph-core/src/shape.rs
// Summary: Per-kind shaping of a projected matrix into typed chart series.

use std::collections::HashSet;

use tracing::warn;

use crate::error::ShapeError;
use crate::kind::ChartKind;
use crate::numeric::parse_numeric;
use crate::series::{
    BarSeries, ChartData, HeatCell, HeatmapGrid, KlineSeries, Ohlc, OverlapSeries, PieSlice,
    Point3, RiverPoint, SankeyGraph, SankeyLink,
};

/// Shape a matrix (header row first, data rows after) into series for `kind`.
///
/// Shaping is lenient where projection is strict: a row whose required cells
/// fail numeric parsing is skipped with a diagnostic instead of aborting the
/// call, and rows too short for the kind are skipped silently. Only a matrix
/// that yields nothing at all is an error.
pub fn shape(kind: ChartKind, data: &[Vec<String>]) -> Result<ChartData, ShapeError> {
    if data.len() < 2 {
        return Err(ShapeError::InsufficientData(kind));
    }
    if let Some((needed, roles)) = required_columns(kind) {
        if data[0].len() < needed {
            return Err(ShapeError::NotEnoughColumns {
                kind,
                needed,
                roles,
            });
        }
    }

    match kind {
        ChartKind::Bar => shape_bar(data).map(ChartData::Bar),
        ChartKind::Heatmap => shape_heatmap(data).map(ChartData::Heatmap),
        ChartKind::Kline => shape_kline(data).map(ChartData::Kline),
        ChartKind::Pie => shape_pie(data).map(ChartData::Pie),
        ChartKind::Sankey => shape_sankey(data).map(ChartData::Sankey),
        ChartKind::Overlap => shape_overlap(data).map(ChartData::Overlap),
        ChartKind::Scatter3d => shape_points3(ChartKind::Scatter3d, data).map(ChartData::Scatter3d),
        ChartKind::Bar3d => shape_points3(ChartKind::Bar3d, data).map(ChartData::Bar3d),
        ChartKind::ThemeRiver => shape_theme_river(data).map(ChartData::ThemeRiver),
    }
}

/// Minimum header width a kind's column layout needs, with the role wording
/// surfaced in the error. Bar and Heatmap take whatever is there.
fn required_columns(kind: ChartKind) -> Option<(usize, &'static str)> {
    match kind {
        ChartKind::Bar | ChartKind::Heatmap => None,
        ChartKind::Kline => Some((5, "Date, Open, Close, Low, High")),
        ChartKind::Pie => Some((2, "Category, Value")),
        ChartKind::Sankey => Some((3, "Source, Target, Value")),
        ChartKind::Overlap => Some((3, "X, Y1, Y2")),
        ChartKind::Scatter3d | ChartKind::Bar3d => Some((3, "X, Y, Z")),
        ChartKind::ThemeRiver => Some((3, "Time, Value, Category")),
    }
}

// Row numbers in skip diagnostics are 1-based and do not count the header,
// matching the projector's error rows.

fn shape_bar(data: &[Vec<String>]) -> Result<BarSeries, ShapeError> {
    let mut series = BarSeries::default();

    for (i, row) in data[1..].iter().enumerate() {
        if row.len() < 2 {
            continue;
        }
        let value = match parse_numeric(&row[1]) {
            Ok(value) => value,
            Err(bad) => {
                warn!("skipping invalid row {}: {}", i + 1, bad);
                continue;
            }
        };
        series.labels.push(row[0].clone());
        series.values.push(value);
    }

    if series.labels.is_empty() {
        return Err(ShapeError::NoValidData(ChartKind::Bar));
    }
    Ok(series)
}

fn shape_heatmap(data: &[Vec<String>]) -> Result<HeatmapGrid, ShapeError> {
    let columns = data[0].clone();
    let mut cells = Vec::new();

    for (i, row) in data[1..].iter().enumerate() {
        // Only full-width rows keep cell positions meaningful.
        if row.len() != columns.len() {
            continue;
        }
        for (j, cell) in row.iter().enumerate() {
            match parse_numeric(cell) {
                Ok(value) => cells.push(HeatCell {
                    col: j,
                    row: i,
                    value,
                }),
                Err(bad) => {
                    warn!("skipping invalid cell at row {}, col {}: {}", i + 1, j + 1, bad);
                }
            }
        }
    }

    if cells.is_empty() {
        return Err(ShapeError::NoValidData(ChartKind::Heatmap));
    }
    Ok(HeatmapGrid { columns, cells })
}

fn shape_kline(data: &[Vec<String>]) -> Result<KlineSeries, ShapeError> {
    let mut series = KlineSeries::default();

    for (i, row) in data[1..].iter().enumerate() {
        if row.len() < 5 {
            continue;
        }
        let parsed = (
            parse_numeric(&row[1]),
            parse_numeric(&row[2]),
            parse_numeric(&row[3]),
            parse_numeric(&row[4]),
        );
        let (open, close, low, high) = match parsed {
            (Ok(open), Ok(close), Ok(low), Ok(high)) => (open, close, low, high),
            _ => {
                warn!("skipping invalid row {}: bad open/close/low/high", i + 1);
                continue;
            }
        };
        series.dates.push(row[0].clone());
        series.candles.push(Ohlc {
            open,
            close,
            low,
            high,
        });
    }

    if series.candles.is_empty() {
        return Err(ShapeError::NoValidData(ChartKind::Kline));
    }
    Ok(series)
}

fn shape_pie(data: &[Vec<String>]) -> Result<Vec<PieSlice>, ShapeError> {
    let mut slices = Vec::new();

    for (i, row) in data[1..].iter().enumerate() {
        if row.len() < 2 {
            continue;
        }
        match parse_numeric(&row[1]) {
            Ok(value) => slices.push(PieSlice {
                name: row[0].clone(),
                value,
            }),
            Err(bad) => warn!("skipping invalid row {}: {}", i + 1, bad),
        }
    }

    if slices.is_empty() {
        return Err(ShapeError::NoValidData(ChartKind::Pie));
    }
    Ok(slices)
}

fn shape_sankey(data: &[Vec<String>]) -> Result<SankeyGraph, ShapeError> {
    let mut graph = SankeyGraph::default();
    let mut seen = HashSet::new();

    for (i, row) in data[1..].iter().enumerate() {
        if row.len() < 3 {
            continue;
        }
        let value = match parse_numeric(&row[2]) {
            Ok(value) => value,
            Err(bad) => {
                warn!("skipping invalid row {}: {}", i + 1, bad);
                continue;
            }
        };
        for endpoint in [&row[0], &row[1]] {
            if seen.insert(endpoint.clone()) {
                graph.nodes.push(endpoint.clone());
            }
        }
        graph.links.push(SankeyLink {
            source: row[0].clone(),
            target: row[1].clone(),
            value,
        });
    }

    if graph.links.is_empty() {
        return Err(ShapeError::NoValidData(ChartKind::Sankey));
    }
    Ok(graph)
}

fn shape_overlap(data: &[Vec<String>]) -> Result<OverlapSeries, ShapeError> {
    let mut series = OverlapSeries::default();

    for (i, row) in data[1..].iter().enumerate() {
        if row.len() < 3 {
            continue;
        }
        let (bar, line) = match (parse_numeric(&row[1]), parse_numeric(&row[2])) {
            (Ok(bar), Ok(line)) => (bar, line),
            _ => {
                warn!("skipping invalid row {}: bad Y1/Y2", i + 1);
                continue;
            }
        };
        series.labels.push(row[0].clone());
        series.bars.push(bar);
        series.lines.push(line);
    }

    if series.labels.is_empty() {
        return Err(ShapeError::NoValidData(ChartKind::Overlap));
    }
    Ok(series)
}

fn shape_points3(kind: ChartKind, data: &[Vec<String>]) -> Result<Vec<Point3>, ShapeError> {
    let mut points = Vec::new();

    for (i, row) in data[1..].iter().enumerate() {
        if row.len() < 3 {
            continue;
        }
        let parsed = (
            parse_numeric(&row[0]),
            parse_numeric(&row[1]),
            parse_numeric(&row[2]),
        );
        match parsed {
            (Ok(x), Ok(y), Ok(z)) => points.push(Point3 { x, y, z }),
            _ => warn!("skipping invalid row {}: bad X/Y/Z", i + 1),
        }
    }

    if points.is_empty() {
        return Err(ShapeError::NoValidData(kind));
    }
    Ok(points)
}

fn shape_theme_river(data: &[Vec<String>]) -> Result<Vec<RiverPoint>, ShapeError> {
    let mut points = Vec::new();

    for (i, row) in data[1..].iter().enumerate() {
        if row.len() < 3 {
            continue;
        }
        match parse_numeric(&row[1]) {
            Ok(value) => points.push(RiverPoint {
                date: row[0].clone(),
                name: row[2].clone(),
                value,
            }),
            Err(bad) => warn!("skipping invalid row {}: {}", i + 1, bad),
        }
    }

    if points.is_empty() {
        return Err(ShapeError::NoValidData(ChartKind::ThemeRiver));
    }
    Ok(points)
}
