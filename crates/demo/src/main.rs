// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV, extracts the selected axis columns, and shapes them for a chart kind.

use std::path::Path;

use anyhow::{bail, Context, Result};
use graph_core::{extract_selected, shape, AxisSelection, ChartData, ChartKind, RowLimits};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let run = parse_args(&args)?;

    info!(
        "graph type: {}, X: {}, Y: {}, Z: {}",
        run.kind,
        run.selection.x,
        run.selection.y,
        run.selection.z.as_deref().unwrap_or("-"),
    );

    let path = Path::new(&run.path);
    let (headers, rows) = load_table(path)?;
    println!(
        "Loaded {} rows x {} columns from {}",
        rows.len(),
        headers.len(),
        path.display()
    );

    let projection = extract_selected(&headers, &rows, &run.selection, &run.limits)
        .context("extracting selected data")?;
    println!(
        "Projected {} rows for axes {:?}",
        projection.rows.len(),
        projection.header
    );

    let data = shape(run.kind, &projection.into_matrix())
        .with_context(|| format!("shaping data for {}", run.kind.label()))?;
    summarize(&data);

    Ok(())
}

struct Invocation {
    path: String,
    kind: ChartKind,
    selection: AxisSelection,
    limits: RowLimits,
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    if args.len() < 4 {
        bail!("{}", usage());
    }

    let path = args[0].clone();
    let kind: ChartKind = args[1].parse()?;
    let mut rest = args[4..].iter();

    let selection = if kind.needs_z() {
        let z = rest
            .next()
            .with_context(|| format!("{} needs a Z axis column", kind.label()))?;
        AxisSelection::xyz(args[2].as_str(), args[3].as_str(), z.as_str())
    } else {
        AxisSelection::xy(args[2].as_str(), args[3].as_str())
    };

    let limits = match rest.next() {
        Some(raw) => {
            let limit: i64 = raw
                .parse()
                .with_context(|| format!("bad row limit '{raw}'"))?;
            RowLimits::x(limit)
        }
        None => RowLimits::none(),
    };

    if rest.next().is_some() {
        bail!("{}", usage());
    }

    Ok(Invocation {
        path,
        kind,
        selection,
        limits,
    })
}

fn usage() -> String {
    let mut text = String::from(
        "usage: graph-demo <data.csv> <graph-type> <x-axis> <y-axis> [z-axis] [row-limit]\n\ngraph types:\n",
    );
    for kind in ChartKind::ALL {
        text.push_str(&format!(
            "  {:<11} {} - {}\n",
            kind.tag(),
            kind.label(),
            kind.description()
        ));
    }
    text
}

/// Read the table the way the charting layer expects it: first record is the
/// header row, every data row must be exactly as wide.
fn load_table(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        bail!("file contains no headers");
    }

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != headers.len() {
            bail!(
                "row {} has {} columns, expected {}",
                i + 1,
                record.len(),
                headers.len()
            );
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    if rows.is_empty() {
        bail!("insufficient rows in file");
    }

    Ok((headers, rows))
}

fn summarize(data: &ChartData) {
    println!("Shaped {} entries for {}", data.len(), data.kind().label());

    match data {
        ChartData::Bar(series) => {
            for (label, value) in series.labels.iter().zip(&series.values).take(5) {
                println!("  {label}: {value}");
            }
        }
        ChartData::Heatmap(grid) => {
            println!("  columns: {:?}", grid.columns);
            for cell in grid.cells.iter().take(5) {
                println!("  ({}, {}) = {}", cell.col, cell.row, cell.value);
            }
        }
        ChartData::Kline(series) => {
            for (date, candle) in series.dates.iter().zip(&series.candles).take(5) {
                println!(
                    "  {date}: o={} c={} l={} h={}",
                    candle.open, candle.close, candle.low, candle.high
                );
            }
        }
        ChartData::Pie(slices) => {
            for slice in slices.iter().take(5) {
                println!("  {}: {}", slice.name, slice.value);
            }
        }
        ChartData::Sankey(graph) => {
            println!("  {} nodes, {} links", graph.nodes.len(), graph.links.len());
            for link in graph.links.iter().take(5) {
                println!("  {} -> {}: {}", link.source, link.target, link.value);
            }
        }
        ChartData::Overlap(series) => {
            for ((label, bar), line) in series
                .labels
                .iter()
                .zip(&series.bars)
                .zip(&series.lines)
                .take(5)
            {
                println!("  {label}: bar={bar} line={line}");
            }
        }
        ChartData::Scatter3d(points) | ChartData::Bar3d(points) => {
            for point in points.iter().take(5) {
                println!("  ({}, {}, {})", point.x, point.y, point.z);
            }
        }
        ChartData::ThemeRiver(points) => {
            for point in points.iter().take(5) {
                println!("  {} [{}]: {}", point.date, point.name, point.value);
            }
        }
    }
}
