// File: crates/trade-plots/src/sample.rs
// Summary: Simulated trading session and the CSV exports the report reads.
//
// The exports keep the header quirks of the session recorder: the dashboard
// file's first column is `X` and the moving-average file is headed `Price`.
// Running the report on them exercises both missing-column paths.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_SEED: u64 = 42;
const START_PRICE: f64 = 100.0;

/// Column-oriented session ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub time: Vec<f64>,
    pub price: Vec<f64>,
    pub moving_avg: Vec<f64>,
    pub volume: Vec<f64>,
    pub cum_pnl: Vec<f64>,
}

impl Session {
    pub fn len(&self) -> usize { self.time.len() }
    pub fn is_empty(&self) -> bool { self.time.is_empty() }
}

/// Simulate `rows` ticks: a sine-driven random walk in price, random volume,
/// a running-mean moving average and an alternating long/short P&L.
pub fn simulate_session(rows: usize, seed: u64) -> Session {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s = Session::default();
    let mut prev = START_PRICE;
    let mut running_sum = 0.0;
    let mut pnl = 0.0;

    for i in 0..rows {
        let price = prev + 4.0 * (0.2 * i as f64).sin() + rng.gen_range(-2.0f64..2.0);
        let volume = 10.0 + rng.gen_range(0..30u32) as f64;
        running_sum += price;
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        pnl += (price - prev) * side * volume;

        s.time.push(i as f64);
        s.price.push(price);
        s.moving_avg.push(running_sum / (i + 1) as f64);
        s.volume.push(volume);
        s.cum_pnl.push(pnl);
        prev = price;
    }
    s
}

fn write_columns(path: &Path, headers: &[&str], columns: &[&[f64]]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(headers)?;
    let rows = columns.iter().map(|c| c.len()).min().unwrap_or(0);
    for i in 0..rows {
        wtr.write_record(columns.iter().map(|c| format!("{:.6}", c[i])))?;
    }
    wtr.flush().with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// One written export file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub path: PathBuf,
    /// More than one value column next to the axis column.
    pub multi_series: bool,
}

impl Export {
    /// Console line announcing the file, worded like the session recorder.
    pub fn message(&self) -> String {
        if self.multi_series {
            format!("Multi-series data exported to: {}", self.path.display())
        } else {
            format!("Data exported to: {}", self.path.display())
        }
    }
}

/// Write the five report inputs into `dir`; returns the written files in report order.
pub fn write_exports(session: &Session, dir: impl AsRef<Path>) -> Result<Vec<Export>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let s = session;
    let (time, price, ma, volume, pnl) =
        (s.time.as_slice(), s.price.as_slice(), s.moving_avg.as_slice(), s.volume.as_slice(), s.cum_pnl.as_slice());
    let files: [(&str, &[&str], Vec<&[f64]>); 5] = [
        ("dashboard_timeseries.csv", &["X", "Price", "MovingAvg", "Volume", "CumPnL"], vec![time, price, ma, volume, pnl]),
        ("price_series.csv", &["Time", "Price"], vec![time, price]),
        ("Synthetic_Price_data.csv", &["Time", "Price"], vec![time, price]),
        ("Cumulative_PnL_data.csv", &["Time", "PnL"], vec![time, pnl]),
        ("Moving_Average_data.csv", &["Time", "Price"], vec![time, ma]),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, headers, columns) in files {
        let path = dir.join(name);
        write_columns(&path, headers, &columns)?;
        log::debug!("exported {} rows to {}", s.len(), path.display());
        written.push(Export { path, multi_series: headers.len() > 2 });
    }
    Ok(written)
}
