// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick layout.

use crate::grid::{format_tick, nice_step, nice_ticks};

/// Roughly how many tick intervals an axis aims for.
pub const TARGET_TICKS: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

/// A tick position with its rendered label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("Time", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn ticks(&self) -> Vec<Tick> {
        let step = nice_step(self.span(), TARGET_TICKS);
        nice_ticks(self.min, self.max, TARGET_TICKS)
            .into_iter()
            .map(|value| Tick { value, label: format_tick(value, step) })
            .collect()
    }
}
