// File: crates/trade-plots/src/driver.rs
// Summary: Run plot requests strictly in order; the first fatal error stops the run.

use std::io::Write;

use anyhow::{Context, Result};
use chart_core::RenderOptions;

use crate::render::{plot_csv, PlotOutcome};
use crate::request::PlotRequest;

pub fn run<W: Write>(requests: &[PlotRequest], opts: &RenderOptions, out: &mut W) -> Result<Vec<PlotOutcome>> {
    let mut outcomes = Vec::with_capacity(requests.len());
    for (i, req) in requests.iter().enumerate() {
        log::info!("request {}/{}: {} -> {}", i + 1, requests.len(), req.input.display(), req.output.display());
        let outcome = plot_csv(req, opts, out)
            .with_context(|| format!("plot request {} ({}) failed", i + 1, req.input.display()))?;
        outcomes.push(outcome);
    }
    let saved = outcomes.iter().filter(|o| o.is_saved()).count();
    log::info!("{saved} of {} charts written", requests.len());
    Ok(outcomes)
}
