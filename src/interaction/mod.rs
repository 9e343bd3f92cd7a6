//! Pointer-to-value resolution.
//!
//! Highlighters borrow their chart through [`ChartDataProvider`] and re-read
//! its data and transforms on every call, so they never observe stale state
//! and never mutate anything.

pub mod cartesian;
pub mod highlight;
pub mod radial;

pub use cartesian::{Candidate, CandidatePolicy, Candidates, CartesianHighlighter};
pub use highlight::Highlight;
pub use radial::{PieLayout, RadialHighlighter, RadialLayout};

use crate::core::{AxisDependency, ChartData, Transformer};

/// Read-only view of a chart that highlighters query.
pub trait ChartDataProvider {
    /// Current data, or `None` before any data was set.
    fn data(&self) -> Option<&ChartData>;

    /// Transformer for `axis`, or `None` before the first layout.
    fn transformer(&self, axis: AxisDependency) -> Option<&dyn Transformer>;

    /// Candidates at or beyond this pixel distance from the pointer are rejected.
    fn max_highlight_distance(&self) -> f64;
}

/// Shared contract of all chart-variant highlighters.
pub trait Highlighter {
    /// Returns the highlight for a pointer position in pixels, if any.
    fn highlight(&self, pixel_x: f64, pixel_y: f64) -> Option<Highlight>;
}
