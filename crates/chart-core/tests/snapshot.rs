// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic two-series chart to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, or the snapshot file is absent, (re)writes it.
// - Otherwise compares decoded pixels for exact match.
// - Independently of the golden file, checks the series strokes land where the data puts them.

use chart_core::{Axis, Chart, RenderOptions, Series};

fn render_bytes() -> Vec<u8> {
    let mut chart = Chart::new().with_title("Snapshot");
    chart.x_axis = Axis::new("Time", 0.0, 4.0);
    chart.y_axis = Axis::new("Value", 0.0, 4.0);
    chart.add_series(Series::line(
        "Price",
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 2.0), (3.0, 1.5), (4.0, 1.0)],
    ));
    chart.add_series(Series::line("MovingAvg", vec![(0.0, 0.5), (4.0, 0.5)]));

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() }; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_basic_chart() {
    let bytes = render_bytes();
    let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
    assert_eq!(got_img.dimensions(), (1000, 600));

    // Plot rect (88, 48)-(976, 536): x = 1.5 -> 421, y = 2 -> 292, y = 0.5 -> 475.
    assert_eq!(got_img.get_pixel(421, 292).0, [0x1f, 0x77, 0xb4, 255], "Price stroke");
    assert_eq!(got_img.get_pixel(421, 475).0, [0xff, 0x7f, 0x0e, 255], "MovingAvg stroke");
    assert_eq!(got_img.get_pixel(3, 3).0, [255, 255, 255, 255], "background");

    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update || !snap_path.exists() {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Wrote {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    let want = std::fs::read(&snap_path).expect("read snapshot");
    // Compare decoded pixel buffers to avoid PNG encoder variance
    let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
    assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode a").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode b").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
