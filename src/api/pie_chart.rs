use tracing::debug;

use crate::core::{AxisDependency, ChartData, Transformer};
use crate::interaction::{ChartDataProvider, Highlight, PieLayout, RadialHighlighter};

/// Pie chart selection context.
///
/// Radial selection is index-driven, so no coordinate transformer is exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    layout: PieLayout,
    data: Option<ChartData>,
    highlight_per_tap_enabled: bool,
}

impl PieChart {
    #[must_use]
    pub fn new(layout: PieLayout) -> Self {
        Self {
            layout,
            data: None,
            highlight_per_tap_enabled: true,
        }
    }

    #[must_use]
    pub fn layout(&self) -> PieLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: PieLayout) {
        self.layout = layout;
    }

    pub fn set_data(&mut self, data: ChartData) {
        debug!(entries = data.entry_count(), "set pie data");
        self.data = Some(data);
    }

    pub fn set_highlight_per_tap_enabled(&mut self, enabled: bool) {
        self.highlight_per_tap_enabled = enabled;
    }

    #[must_use]
    pub fn highlighter(&self) -> RadialHighlighter<'_, Self> {
        RadialHighlighter::new(self, self.layout)
    }

    pub fn highlight_by_touch_point(&self, pixel_x: f64, pixel_y: f64) -> Option<Highlight> {
        if !self.highlight_per_tap_enabled {
            return None;
        }
        self.highlighter().resolve(pixel_x, pixel_y)
    }
}

impl ChartDataProvider for PieChart {
    fn data(&self) -> Option<&ChartData> {
        self.data.as_ref()
    }

    fn transformer(&self, _axis: AxisDependency) -> Option<&dyn Transformer> {
        None
    }

    /// Radial selection is index-driven, so no distance limit applies.
    fn max_highlight_distance(&self) -> f64 {
        f64::INFINITY
    }
}
