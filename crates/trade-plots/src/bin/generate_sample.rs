// File: crates/trade-plots/src/bin/generate_sample.rs
// Summary: Writes a simulated session's CSV exports (the report inputs) to a directory.

use anyhow::Result;
use trade_plots::sample::{simulate_session, write_exports, DEFAULT_ROWS, DEFAULT_SEED};

fn main() -> Result<()> {
    env_logger::init();

    // Arg: output directory (defaults to the working directory)
    let dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let session = simulate_session(DEFAULT_ROWS, DEFAULT_SEED);
    for export in write_exports(&session, &dir)? {
        println!("{}", export.message());
    }
    Ok(())
}
