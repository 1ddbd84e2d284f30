// File: crates/chart-core/src/legend.rs
// Summary: Legend layout: one swatch + label row per series, boxed in the plot's upper-right corner.

use crate::geometry::RectI32;

pub const FONT_SIZE: f32 = 13.0;
const PAD: f32 = 8.0;
const ROW_HEIGHT: f32 = 20.0;
const SWATCH_LEN: f32 = 24.0;
const SWATCH_GAP: f32 = 8.0;
const MARGIN: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    /// Start and end of the color swatch line.
    pub swatch: ((f32, f32), (f32, f32)),
    /// Left edge and baseline of the label.
    pub text_origin: (f32, f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    /// (left, top, right, bottom) of the legend frame.
    pub frame: (f32, f32, f32, f32),
    pub entries: Vec<LegendEntry>,
}

/// Lay out `labels` inside `plot`. `measure` returns the rendered width of a label.
/// Returns `None` when there is nothing to show.
pub fn layout<F>(plot: &RectI32, labels: &[&str], measure: F) -> Option<LegendLayout>
where
    F: Fn(&str) -> f32,
{
    if labels.is_empty() {
        return None;
    }
    let text_w = labels.iter().map(|l| measure(l)).fold(0.0f32, f32::max);
    let width = PAD + SWATCH_LEN + SWATCH_GAP + text_w + PAD;
    let height = PAD * 2.0 + ROW_HEIGHT * labels.len() as f32;

    let right = plot.right as f32 - MARGIN;
    let left = right - width;
    let top = plot.top as f32 + MARGIN;
    let bottom = top + height;

    let entries = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let row_mid = top + PAD + ROW_HEIGHT * (i as f32 + 0.5);
            let sx = left + PAD;
            LegendEntry {
                label: (*label).to_string(),
                swatch: ((sx, row_mid), (sx + SWATCH_LEN, row_mid)),
                text_origin: (sx + SWATCH_LEN + SWATCH_GAP, row_mid + FONT_SIZE * 0.35),
            }
        })
        .collect();

    Some(LegendLayout { frame: (left, top, right, bottom), entries })
}
