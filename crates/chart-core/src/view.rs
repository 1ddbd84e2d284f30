// File: crates/chart-core/src/view.rs
// Visible data ranges derived from chart contents (autoscale).

use crate::Chart;

/// Fraction of the data span added on each side when autoscaling.
pub const DEFAULT_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Extents over all finite points, widened by `margin` of the span on
    /// each side. Charts without any finite point get the unit square.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for (x, y) in s.finite_points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        let (x_min, x_max) = widen(x_min, x_max, margin);
        let (y_min, y_max) = widen(y_min, y_max, margin);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

fn widen(min: f64, max: f64, margin: f64) -> (f64, f64) {
    // flat only when the span is below float resolution at this magnitude,
    // so tiny but distinct values keep their own range
    if max - min <= f64::EPSILON * min.abs().max(max.abs()) {
        return (min - 0.5, max + 0.5);
    }
    let m = (max - min) * margin.max(0.0);
    (min - m, max + m)
}
