// File: crates/trade-plots/src/main.rs
// Summary: Renders the five trading report charts from CSV files in the working directory.

use anyhow::Result;
use chart_core::RenderOptions;
use trade_plots::{default_requests, run};

fn main() -> Result<()> {
    env_logger::init();

    let requests = default_requests();
    let opts = RenderOptions::default();
    let stdout = std::io::stdout();
    run(&requests, &opts, &mut stdout.lock())?;
    Ok(())
}
