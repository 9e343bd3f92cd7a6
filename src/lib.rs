//! chart-highlight: pointer-to-value selection for charts.
//!
//! Given a pointer position over a rendered chart, the highlighters in
//! [`interaction`] decide which data point the user means, across series
//! bound to a primary or secondary y-axis, and report it as a [`Highlight`].
//! Cartesian, stacked-bar and pie layouts are supported.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{Chart, ChartConfig, PieChart};
pub use error::{ChartError, ChartResult};
pub use interaction::{CartesianHighlighter, Highlight, Highlighter, RadialHighlighter};
