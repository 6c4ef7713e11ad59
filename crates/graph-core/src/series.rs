// File: crates/graph-core/src/series.rs
// Summary: Typed series models the shapers emit for each chart kind.

use crate::kind::ChartKind;

/// Category labels with one numeric value per label. Labels and values stay
/// index-aligned; a skipped row contributes to neither.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// One parsed heatmap cell: column position (x), row position (y), value (z).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatCell {
    pub col: usize,
    pub row: usize,
    pub value: f64,
}

/// Heatmap over the full matrix: header names become the column axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeatmapGrid {
    pub columns: Vec<String>,
    pub cells: Vec<HeatCell>,
}

/// Open/close/low/high tuple for one candlestick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ohlc {
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub high: f64,
}

/// Candlesticks with their date labels, index-aligned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KlineSeries {
    pub dates: Vec<String>,
    pub candles: Vec<Ohlc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SankeyLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

/// Flow graph: node names in first-appearance order plus weighted links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SankeyGraph {
    pub nodes: Vec<String>,
    pub links: Vec<SankeyLink>,
}

/// Bar and line series sharing one category axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlapSeries {
    pub labels: Vec<String>,
    pub bars: Vec<f64>,
    pub lines: Vec<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One themed flow sample: date label, category name, numeric value.
#[derive(Clone, Debug, PartialEq)]
pub struct RiverPoint {
    pub date: String,
    pub name: String,
    pub value: f64,
}

/// Shaped data for one chart, ready to hand to a rendering collaborator.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Bar(BarSeries),
    Heatmap(HeatmapGrid),
    Kline(KlineSeries),
    Pie(Vec<PieSlice>),
    Sankey(SankeyGraph),
    Overlap(OverlapSeries),
    Scatter3d(Vec<Point3>),
    Bar3d(Vec<Point3>),
    ThemeRiver(Vec<RiverPoint>),
}

impl ChartData {
    /// Kind this data was shaped for.
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartData::Bar(_) => ChartKind::Bar,
            ChartData::Heatmap(_) => ChartKind::Heatmap,
            ChartData::Kline(_) => ChartKind::Kline,
            ChartData::Pie(_) => ChartKind::Pie,
            ChartData::Sankey(_) => ChartKind::Sankey,
            ChartData::Overlap(_) => ChartKind::Overlap,
            ChartData::Scatter3d(_) => ChartKind::Scatter3d,
            ChartData::Bar3d(_) => ChartKind::Bar3d,
            ChartData::ThemeRiver(_) => ChartKind::ThemeRiver,
        }
    }

    /// Number of emitted points, rows, or links.
    pub fn len(&self) -> usize {
        match self {
            ChartData::Bar(series) => series.labels.len(),
            ChartData::Heatmap(grid) => grid.cells.len(),
            ChartData::Kline(series) => series.candles.len(),
            ChartData::Pie(slices) => slices.len(),
            ChartData::Sankey(graph) => graph.links.len(),
            ChartData::Overlap(series) => series.labels.len(),
            ChartData::Scatter3d(points) | ChartData::Bar3d(points) => points.len(),
            ChartData::ThemeRiver(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
