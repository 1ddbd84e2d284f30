// File: crates/trade-plots/src/render.rs
// Summary: Load one table, validate requested columns, plot them and save the PNG.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{Axis, Chart, RenderOptions, Series};

use crate::request::PlotRequest;
use crate::table::Table;

/// What happened to one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlotOutcome {
    /// Image written to `output`. `plotted` and `missing` partition the requested y columns.
    Saved {
        output: PathBuf,
        plotted: Vec<String>,
        missing: Vec<String>,
    },
    /// The x column was absent, so nothing was drawn.
    Skipped { missing_x: String },
}

impl PlotOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, PlotOutcome::Saved { .. })
    }
}

/// Render `req` to its output PNG, writing human-readable diagnostics to `out`.
///
/// Missing columns are reported and tolerated: an absent x column skips the
/// request, an absent y column drops that one series. Unreadable input and
/// failures writing the image are returned as errors.
pub fn plot_csv<W: Write>(req: &PlotRequest, opts: &RenderOptions, out: &mut W) -> Result<PlotOutcome> {
    let table = Table::load(&req.input)?;
    let file = table.path().display();
    writeln!(out, "\n{} columns: {}", file, list_repr(table.columns()))?;

    if !table.has_column(&req.x_column) {
        writeln!(out, "Error: X column \"{}\" not found in {}. Skipping plot.", req.x_column, file)?;
        return Ok(PlotOutcome::Skipped { missing_x: req.x_column.clone() });
    }
    let xs = table.axis_values(&req.x_column).unwrap_or_default();

    let mut chart = Chart::new().with_title(req.title.as_str());
    let mut plotted = Vec::new();
    let mut missing = Vec::new();
    for col in &req.y_columns {
        match table.values(col) {
            Some(ys) => {
                chart.add_series(Series::from_columns(col.as_str(), &xs, &ys));
                plotted.push(col.clone());
            }
            None => {
                writeln!(out, "Warning: Y column \"{}\" not found in {}.", col, file)?;
                missing.push(col.clone());
            }
        }
    }

    chart.x_axis = Axis::new(req.x_label.as_str(), 0.0, 1.0);
    chart.y_axis = Axis::new(req.y_label.as_str(), 0.0, 1.0);
    chart.autoscale();
    log::debug!(
        "{}: {} series over {} rows, x [{}, {}], y [{}, {}]",
        file, plotted.len(), table.len(),
        chart.x_axis.min, chart.x_axis.max, chart.y_axis.min, chart.y_axis.max
    );

    chart
        .render_to_png(opts, &req.output)
        .with_context(|| format!("failed to write chart '{}'", req.output.display()))?;
    writeln!(out, "Plot saved as {}", req.output.display())?;

    Ok(PlotOutcome::Saved { output: req.output.clone(), plotted, missing })
}

/// Column names in the bracketed, single-quoted list form of the report
/// console, e.g. `['Time', 'Price']`.
fn list_repr(names: &[String]) -> String {
    let items: Vec<String> = names.iter().map(|n| quote(n)).collect();
    format!("[{}]", items.join(", "))
}

/// Quote a name: single quotes unless it contains one and no double quote.
fn quote(name: &str) -> String {
    let q = if name.contains('\'') && !name.contains('"') { '"' } else { '\'' };
    let mut s = String::with_capacity(name.len() + 2);
    s.push(q);
    for c in name.chars() {
        match c {
            '\\' => s.push_str("\\\\"),
            '\n' => s.push_str("\\n"),
            '\r' => s.push_str("\\r"),
            '\t' => s.push_str("\\t"),
            c if c == q => {
                s.push('\\');
                s.push(c);
            }
            c if c.is_control() => s.push_str(&format!("\\x{:02x}", c as u32)),
            c => s.push(c),
        }
    }
    s.push(q);
    s
}
