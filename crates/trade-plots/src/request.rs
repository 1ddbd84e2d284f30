// File: crates/trade-plots/src/request.rs
// Summary: Plot request configuration and the fixed report table.

use std::path::{Path, PathBuf};

/// One chart to produce: which file, which columns, where to save, how to label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotRequest {
    pub input: PathBuf,
    pub x_column: String,
    pub y_columns: Vec<String>,
    pub output: PathBuf,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl PlotRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        x_column: impl Into<String>,
        y_columns: &[&str],
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            x_column: x_column.into(),
            y_columns: y_columns.iter().map(|c| c.to_string()).collect(),
            output: output.into(),
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn labeled(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Resolve relative input and output paths against `dir`.
    pub fn rooted_at(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        if self.input.is_relative() {
            self.input = dir.join(&self.input);
        }
        if self.output.is_relative() {
            self.output = dir.join(&self.output);
        }
        self
    }
}

/// The report's five charts, in run order. Paths are relative to the working directory.
pub fn default_requests() -> Vec<PlotRequest> {
    vec![
        PlotRequest::new("dashboard_timeseries.csv", "Time", &["Price", "MovingAvg", "Volume", "CumPnL"], "dashboard_metrics.png")
            .titled("Trading Dashboard Metrics")
            .labeled("Time", "Value"),
        PlotRequest::new("price_series.csv", "Time", &["Price"], "price_over_time.png")
            .titled("Price Over Time")
            .labeled("Time", "Price"),
        PlotRequest::new("Synthetic_Price_data.csv", "Time", &["Price"], "synthetic_price.png")
            .titled("Synthetic Price")
            .labeled("Time", "Price"),
        PlotRequest::new("Cumulative_PnL_data.csv", "Time", &["PnL"], "cumulative_pnl.png")
            .titled("Cumulative P&L Over Time")
            .labeled("Time", "P&L"),
        PlotRequest::new("Moving_Average_data.csv", "Time", &["MovingAvg"], "moving_average.png")
            .titled("Moving Average Over Time")
            .labeled("Time", "Moving Average"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_five_requests_in_order() {
        let reqs = default_requests();
        let outputs: Vec<_> = reqs.iter().map(|r| r.output.to_str().unwrap_or_default()).collect();
        assert_eq!(
            outputs,
            ["dashboard_metrics.png", "price_over_time.png", "synthetic_price.png", "cumulative_pnl.png", "moving_average.png"]
        );
        assert!(reqs.iter().all(|r| r.x_column == "Time" && r.x_label == "Time"));
        assert_eq!(reqs[0].y_columns, ["Price", "MovingAvg", "Volume", "CumPnL"]);
        assert_eq!(reqs[3].title, "Cumulative P&L Over Time");
        assert_eq!(reqs[4].y_label, "Moving Average");
    }

    #[test]
    fn rooted_at_only_touches_relative_paths() {
        let r = PlotRequest::new("in.csv", "Time", &[], "/abs/out.png").rooted_at("/data");
        assert_eq!(r.input, PathBuf::from("/data/in.csv"));
        assert_eq!(r.output, PathBuf::from("/abs/out.png"));
        assert!(r.y_columns.is_empty());
    }
}
