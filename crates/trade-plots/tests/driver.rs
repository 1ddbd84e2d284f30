// File: crates/trade-plots/tests/driver.rs
// Purpose: Run the fixed report against a generated session and check ordering and failure handling.

use std::path::PathBuf;

use chart_core::RenderOptions;
use trade_plots::sample::{simulate_session, write_exports};
use trade_plots::{default_requests, run, PlotOutcome, PlotRequest};

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("driver").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn opts() -> RenderOptions {
    RenderOptions { width: 400, height: 300, ..RenderOptions::default() }
}

#[test]
fn default_report_over_generated_session() {
    let dir = scratch("report");
    let written = write_exports(&simulate_session(20, 42), &dir).expect("export sample data");
    assert_eq!(written.len(), 5);

    let requests: Vec<PlotRequest> = default_requests().into_iter().map(|r| r.rooted_at(&dir)).collect();
    let mut out = Vec::new();
    let outcomes = run(&requests, &opts(), &mut out).expect("report run");
    let text = String::from_utf8(out).expect("utf8");

    assert_eq!(outcomes.len(), 5);
    // dashboard export names its first column X
    assert_eq!(outcomes[0], PlotOutcome::Skipped { missing_x: "Time".into() });
    assert!(!dir.join("dashboard_metrics.png").exists());

    for (outcome, name) in outcomes[1..4].iter().zip(["price_over_time.png", "synthetic_price.png", "cumulative_pnl.png"]) {
        match outcome {
            PlotOutcome::Saved { output, missing, .. } => {
                assert_eq!(output, &dir.join(name));
                assert!(missing.is_empty());
                assert!(output.exists());
            }
            other => panic!("{name}: expected saved, got {other:?}"),
        }
    }

    // moving-average export is headed Price, so the chart has no series
    assert_eq!(
        outcomes[4],
        PlotOutcome::Saved { output: dir.join("moving_average.png"), plotted: vec![], missing: vec!["MovingAvg".into()] }
    );

    assert_eq!(text.lines().filter(|l| l.contains(" columns: ")).count(), 5);
    assert_eq!(text.lines().filter(|l| l.starts_with("Plot saved as ")).count(), 4);
    assert_eq!(text.lines().filter(|l| l.starts_with("Warning:")).count(), 1);
    assert_eq!(text.lines().filter(|l| l.starts_with("Error:")).count(), 1);

    // diagnostics follow request order
    let first_saved = text.find("price_over_time.png").expect("price chart reported");
    let last_saved = text.find("moving_average.png").expect("moving average reported");
    assert!(first_saved < last_saved);
}

#[test]
fn fatal_error_stops_the_run() {
    let dir = scratch("fatal");
    std::fs::write(dir.join("ok.csv"), "Time,Price\n0,1\n1,2\n").expect("write csv");
    let requests = vec![
        PlotRequest::new("ok.csv", "Time", &["Price"], "first.png").rooted_at(&dir),
        PlotRequest::new("missing.csv", "Time", &["Price"], "second.png").rooted_at(&dir),
        PlotRequest::new("ok.csv", "Time", &["Price"], "third.png").rooted_at(&dir),
    ];

    let mut out = Vec::new();
    let err = run(&requests, &opts(), &mut out).expect_err("missing input is fatal");

    let chain = format!("{err:#}");
    assert!(chain.contains("plot request 2"), "{chain}");
    assert!(chain.contains("missing.csv"), "{chain}");
    assert!(dir.join("first.png").exists());
    assert!(!dir.join("second.png").exists());
    assert!(!dir.join("third.png").exists(), "requests after a fatal error must not run");
}

#[test]
fn empty_request_list_does_nothing() {
    let mut out = Vec::new();
    let outcomes = run(&[], &opts(), &mut out).expect("empty run");
    assert!(outcomes.is_empty());
    assert!(out.is_empty());
}
