use serde::{Deserialize, Serialize};

use crate::core::AxisDependency;

/// A resolved selection.
///
/// `x`/`y` are in data space; `x_px`/`y_px` are the matching pixel position.
/// `stack_index` is set only when the selected entry is stacked and names the
/// selected segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub x: f64,
    pub y: f64,
    pub x_px: f64,
    pub y_px: f64,
    pub data_set_index: usize,
    pub axis: AxisDependency,
    #[serde(default)]
    pub stack_index: Option<usize>,
}

impl Highlight {
    #[must_use]
    pub fn new(
        x: f64,
        y: f64,
        x_px: f64,
        y_px: f64,
        data_set_index: usize,
        axis: AxisDependency,
    ) -> Self {
        Self {
            x,
            y,
            x_px,
            y_px,
            data_set_index,
            axis,
            stack_index: None,
        }
    }

    #[must_use]
    pub fn with_stack_index(mut self, stack_index: usize) -> Self {
        self.stack_index = Some(stack_index);
        self
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stack_index.is_some()
    }

    /// Whether both highlights point at the same value, ignoring pixel positions.
    #[must_use]
    pub fn same_selection(&self, other: &Highlight) -> bool {
        self.x == other.x
            && self.data_set_index == other.data_set_index
            && self.stack_index == other.stack_index
    }
}
