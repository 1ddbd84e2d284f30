// File: crates/trade-plots/src/lib.rs
// Summary: Trading report library: CSV tables, plot requests, chart rendering and the request driver.

pub mod table;
pub mod request;
pub mod render;
pub mod driver;
pub mod sample;

pub use driver::run;
pub use render::{plot_csv, PlotOutcome};
pub use request::{default_requests, PlotRequest};
pub use table::{Table, TableError};
