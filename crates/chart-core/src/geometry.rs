// File: crates/chart-core/src/geometry.rs
// Summary: Pixel rectangles and the data-to-pixel mapping of the plot area.

use crate::types::Insets;
use crate::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Surface rectangle shrunk by `insets`. Never inverted: a too-small
    /// surface collapses to a zero-sized rectangle at the inset origin.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left);
        let bottom = (height - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

/// Plot rectangle plus the axis ranges it displays.
#[derive(Clone, Copy, Debug)]
pub struct PlotArea {
    pub rect: RectI32,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotArea {
    pub fn new(rect: RectI32, x: &Axis, y: &Axis) -> Self {
        Self { rect, x_min: x.min, x_max: x.max, y_min: y.min, y_max: y.max }
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f32 {
        let span = (self.x_max - self.x_min).max(1e-9);
        self.rect.left as f32 + ((x - self.x_min) / span) as f32 * self.rect.width() as f32
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f32 {
        let span = (self.y_max - self.y_min).max(1e-9);
        self.rect.bottom as f32 - ((y - self.y_min) / span) as f32 * self.rect.height() as f32
    }
}
