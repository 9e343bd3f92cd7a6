use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, PlotRect};
use crate::error::ChartResult;
use crate::interaction::CandidatePolicy;

use super::validation::validate_chart_config;

/// Default rejection distance for highlights, in pixels.
pub const DEFAULT_MAX_HIGHLIGHT_DISTANCE: f64 = 500.0;

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist and reload the selection
/// setup alongside their own layout state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub plot: PlotRect,
    pub x_range: AxisRange,
    pub primary_range: AxisRange,
    #[serde(default)]
    pub secondary_range: Option<AxisRange>,
    #[serde(default = "default_max_highlight_distance")]
    pub max_highlight_distance: f64,
    #[serde(default)]
    pub candidate_policy: CandidatePolicy,
    #[serde(default = "default_highlight_per_tap_enabled")]
    pub highlight_per_tap_enabled: bool,
}

impl ChartConfig {
    /// Creates a config with a single primary axis and default highlight policy.
    #[must_use]
    pub fn new(plot: PlotRect, x_range: AxisRange, primary_range: AxisRange) -> Self {
        Self {
            plot,
            x_range,
            primary_range,
            secondary_range: None,
            max_highlight_distance: default_max_highlight_distance(),
            candidate_policy: CandidatePolicy::default(),
            highlight_per_tap_enabled: default_highlight_per_tap_enabled(),
        }
    }

    #[must_use]
    pub fn with_secondary_range(mut self, range: AxisRange) -> Self {
        self.secondary_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_max_highlight_distance(mut self, distance_px: f64) -> Self {
        self.max_highlight_distance = distance_px;
        self
    }

    #[must_use]
    pub fn with_candidate_policy(mut self, policy: CandidatePolicy) -> Self {
        self.candidate_policy = policy;
        self
    }

    #[must_use]
    pub fn with_highlight_per_tap_enabled(mut self, enabled: bool) -> Self {
        self.highlight_per_tap_enabled = enabled;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_chart_config(self)
    }
}

fn default_max_highlight_distance() -> f64 {
    DEFAULT_MAX_HIGHLIGHT_DISTANCE
}

fn default_highlight_per_tap_enabled() -> bool {
    true
}
