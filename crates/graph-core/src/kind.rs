// File: crates/graph-core/src/kind.rs
// Summary: Closed set of supported chart kinds with axis arity and dialog metadata.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A chart the viewer can produce.
///
/// Each kind knows its axis arity and the wording the selection dialog shows,
/// so callers resolve everything kind-specific before invoking extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Heatmap,
    Kline,
    Pie,
    Sankey,
    Overlap,
    Scatter3d,
    Bar3d,
    ThemeRiver,
}

/// Raised when a chart tag at a process boundary names no known kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported graph type: {0}")]
pub struct UnknownKind(pub String);

impl ChartKind {
    /// Every supported kind, in menu order.
    pub const ALL: [ChartKind; 9] = [
        ChartKind::Bar,
        ChartKind::Heatmap,
        ChartKind::Kline,
        ChartKind::Pie,
        ChartKind::Sankey,
        ChartKind::Overlap,
        ChartKind::Scatter3d,
        ChartKind::Bar3d,
        ChartKind::ThemeRiver,
    ];

    /// Stable tag used at process boundaries.
    pub fn tag(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Heatmap => "Heatmap",
            ChartKind::Kline => "Kline",
            ChartKind::Pie => "Pie",
            ChartKind::Sankey => "Sankey",
            ChartKind::Overlap => "Overlap",
            ChartKind::Scatter3d => "Scatter3D",
            ChartKind::Bar3d => "Bar3D",
            ChartKind::ThemeRiver => "ThemeRiver",
        }
    }

    /// Human-readable name for selection menus.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Heatmap => "Heat Map",
            ChartKind::Kline => "Kline Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Sankey => "Sankey Diagram",
            ChartKind::Overlap => "Overlap Chart",
            ChartKind::Scatter3d => "3D Scatter Plot",
            ChartKind::Bar3d => "3D Bar Chart",
            ChartKind::ThemeRiver => "Theme River",
        }
    }

    /// One-line description for selection menus.
    pub fn description(self) -> &'static str {
        match self {
            ChartKind::Bar => "Simple bar chart for comparing categories",
            ChartKind::Heatmap => "Visualize data density and patterns",
            ChartKind::Kline => "Candlestick chart for open/close ranges",
            ChartKind::Pie => "Show proportion between categories",
            ChartKind::Sankey => "Visualize flow between categories",
            ChartKind::Overlap => "Bar and line series on a shared axis",
            ChartKind::Scatter3d => "Three-dimensional scatter visualization",
            ChartKind::Bar3d => "Three-dimensional bar visualization",
            ChartKind::ThemeRiver => "Show changes over time",
        }
    }

    /// Whether extraction needs a Z axis (3D kinds) on top of X and Y.
    pub fn needs_z(self) -> bool {
        matches!(self, ChartKind::Scatter3d | ChartKind::Bar3d)
    }

    /// Number of axis columns extraction selects for this kind.
    pub fn axis_arity(self) -> usize {
        if self.needs_z() {
            3
        } else {
            2
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ChartKind {
    type Err = UnknownKind;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| UnknownKind(tag.to_string()))
    }
}
