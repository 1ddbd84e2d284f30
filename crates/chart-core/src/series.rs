// File: crates/chart-core/src/series.rs
// Summary: Named line series of (x, y) points.
// Notes:
// - Points with a non-finite coordinate are kept in `data_xy` and rendered as
//   gaps, so a blank cell in the source data breaks the line instead of
//   connecting across it.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend label.
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
    /// Explicit stroke color; `None` picks the next theme palette color.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn line(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data, color: None }
    }

    /// Zip separate x and y columns into a series; the shorter column wins.
    pub fn from_columns(name: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::line(name, data)
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Iterate over finite points only.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Maximal runs of consecutive finite points.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        self.data_xy
            .split(|(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_on_gaps() {
        let s = Series::line(
            "Price",
            vec![(0.0, 1.0), (1.0, 2.0), (2.0, f64::NAN), (3.0, 3.0), (f64::NAN, 1.0), (5.0, 4.0), (6.0, 5.0)],
        );
        let segs = s.segments();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].len(), 2);
        assert_eq!(segs[1], &[(3.0, 3.0)]);
        assert_eq!(segs[2].len(), 2);
        assert_eq!(s.finite_points().count(), 5);
    }

    #[test]
    fn from_columns_truncates_to_shorter() {
        let s = Series::from_columns("PnL", &[0.0, 1.0, 2.0], &[5.0, 6.0]);
        assert_eq!(s.data_xy, vec![(0.0, 5.0), (1.0, 6.0)]);
        assert_eq!(s.name, "PnL");
        assert!(s.color.is_none());
    }
}
