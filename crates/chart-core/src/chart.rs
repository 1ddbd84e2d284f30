// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::{PlotArea, RectI32};
use crate::grid::linspace;
use crate::legend;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::{ViewState, DEFAULT_MARGIN};

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 4.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels, tick labels and legend text. Off gives
    /// font-independent output for pixel comparisons.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_grid: true,
            show_legend: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the series data, keeping the axis labels.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Autoscale with the default margin.
    pub fn autoscale(&mut self) {
        self.autoscale_axes(DEFAULT_MARGIN);
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        log::debug!(
            "rendering {}x{} chart '{}' with {} series",
            opts.width, opts.height, self.title, self.series.len()
        );

        self.draw(surface.canvas(), opts);

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = RectI32::inset(opts.width, opts.height, &opts.insets);
        let area = PlotArea::new(rect, &self.x_axis, &self.y_axis);
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        let mut fill = skia::Paint::default();
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.plot_background);
        canvas.draw_rect(rect.to_skia(), &fill);

        if self.show_grid {
            draw_grid(canvas, &area, &self.x_axis, &self.y_axis, theme);
        }

        // Series, clipped to the plot rectangle
        canvas.save();
        canvas.clip_rect(rect.to_skia(), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = s.color.unwrap_or_else(|| theme.series_color(i));
            draw_line_series(canvas, &area, s, color);
        }
        canvas.restore();

        draw_frame(canvas, &rect, theme);
        if let Some(shaper) = &shaper {
            draw_ticks(canvas, shaper, &area, &self.x_axis, &self.y_axis, theme);
            draw_labels(canvas, shaper, &rect, opts, &self.title, &self.x_axis, &self.y_axis);
        }

        if self.show_legend {
            self.draw_legend(canvas, shaper.as_ref(), &rect, theme);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, shaper: Option<&TextShaper>, rect: &RectI32, theme: &Theme) {
        let labels: Vec<&str> = self.series.iter().map(|s| s.name.as_str()).collect();
        // Without a shaper, reserve a fixed per-character width so the box still renders.
        let measure = |text: &str| match shaper {
            Some(sh) => sh.measure_width(text, legend::FONT_SIZE),
            None => text.chars().count() as f32 * legend::FONT_SIZE * 0.6,
        };
        let Some(layout) = legend::layout(rect, &labels, measure) else {
            return;
        };

        let (l, t, r, b) = layout.frame;
        let frame = skia::Rect::from_ltrb(l, t, r, b);
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_style(skia::paint::Style::Fill);
        bg.set_color(theme.legend_background);
        canvas.draw_round_rect(frame, 3.0, 3.0, &bg);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        canvas.draw_round_rect(frame, 3.0, 3.0, &border);

        let mut swatch = line_paint(theme.series_color(0));
        for (i, (entry, s)) in layout.entries.iter().zip(&self.series).enumerate() {
            swatch.set_color(s.color.unwrap_or_else(|| theme.series_color(i)));
            canvas.draw_line(entry.swatch.0, entry.swatch.1, &swatch);
            if let Some(sh) = shaper {
                let (x, y) = entry.text_origin;
                sh.draw_left(canvas, &entry.label, x, y, legend::FONT_SIZE, theme.axis_label);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn line_paint(color: skia::Color) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(color);
    stroke
}

/// Grid positions: the axis ticks, or evenly spaced lines when the range yields too few.
fn grid_positions(axis: &Axis) -> Vec<f64> {
    let ticks: Vec<f64> = axis.ticks().into_iter().map(|t| t.value).collect();
    if ticks.len() >= 2 { ticks } else { linspace(axis.min, axis.max, 6) }
}

fn draw_grid(canvas: &skia::Canvas, area: &PlotArea, x: &Axis, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let r = &area.rect;
    // verticals
    for v in grid_positions(x) {
        let px = area.to_px_x(v);
        canvas.draw_line((px, r.top as f32), (px, r.bottom as f32), &paint);
    }
    // horizontals
    for v in grid_positions(y) {
        let py = area.to_px_y(v);
        canvas.draw_line((r.left as f32, py), (r.right as f32, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, rect: &RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(rect.to_skia(), &axis_paint);
}

fn draw_ticks(canvas: &skia::Canvas, shaper: &TextShaper, area: &PlotArea, x: &Axis, y: &Axis, theme: &Theme) {
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let r = &area.rect;
    for t in x.ticks() {
        let px = area.to_px_x(t.value);
        canvas.draw_line((px, r.bottom as f32), (px, r.bottom as f32 + TICK_LEN), &tick_paint);
        shaper.draw_centered(canvas, &t.label, px, r.bottom as f32 + TICK_LEN + TICK_SIZE + 2.0, TICK_SIZE, theme.tick, false);
    }
    for t in y.ticks() {
        let py = area.to_px_y(t.value);
        canvas.draw_line((r.left as f32 - TICK_LEN, py), (r.left as f32, py), &tick_paint);
        shaper.draw_right(canvas, &t.label, r.left as f32 - TICK_LEN - 3.0, py + TICK_SIZE * 0.35, TICK_SIZE, theme.tick);
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    rect: &RectI32,
    opts: &RenderOptions,
    title: &str,
    x: &Axis,
    y: &Axis,
) {
    let theme = &opts.theme;
    let cx = (rect.left + rect.right) as f32 * 0.5;
    let cy = (rect.top + rect.bottom) as f32 * 0.5;

    if !title.is_empty() {
        shaper.draw_centered(canvas, title, cx, rect.top as f32 - 16.0, TITLE_SIZE, theme.title, true);
    }
    if !x.label.is_empty() {
        shaper.draw_centered(canvas, &x.label, cx, opts.height as f32 - 14.0, LABEL_SIZE, theme.axis_label, false);
    }
    if !y.label.is_empty() {
        shaper.draw_vertical(canvas, &y.label, 22.0, cy, LABEL_SIZE, theme.axis_label);
    }
}

fn draw_line_series(canvas: &skia::Canvas, area: &PlotArea, series: &Series, color: skia::Color) {
    let stroke = line_paint(color);
    let mut drawn = 0usize;
    for seg in series.segments() {
        // a lone point has no line to stroke
        if seg.len() < 2 {
            continue;
        }
        let mut path = skia::PathBuilder::new();
        let (x0, y0) = seg[0];
        path.move_to((area.to_px_x(x0), area.to_px_y(y0)));
        for &(x, y) in seg.iter().skip(1) {
            path.line_to((area.to_px_x(x), area.to_px_y(y)));
        }
        canvas.draw_path(&path.detach(), &stroke);
        drawn += seg.len();
    }
    log::trace!("series '{}': stroked {} of {} points", series.name, drawn, series.len());
}
