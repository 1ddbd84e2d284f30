// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for line chart construction and PNG rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod view;
pub mod theme;
pub mod text;
pub mod legend;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::{Axis, Tick};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
