use tracing::{debug, warn};

use crate::core::{AxisDependency, AxisRange, ChartData, ChartTransformer, Transformer};
use crate::error::ChartResult;
use crate::interaction::{CartesianHighlighter, ChartDataProvider, Highlight};

use super::ChartConfig;
use super::validation::validate_max_highlight_distance;

/// Cartesian chart selection context.
///
/// Owns the data and the coordinate transform; highlighters borrow it
/// read-only through [`ChartDataProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    config: ChartConfig,
    transformer: ChartTransformer,
    data: Option<ChartData>,
}

impl Chart {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let transformer = build_transformer(&config)?;
        Ok(Self {
            config,
            transformer,
            data: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn chart_transformer(&self) -> &ChartTransformer {
        &self.transformer
    }

    pub fn set_data(&mut self, data: ChartData) {
        debug!(
            data_sets = data.data_set_count(),
            entries = data.entry_count(),
            "set chart data"
        );
        self.data = Some(data);
    }

    pub fn clear_data(&mut self) {
        self.data = None;
    }

    pub fn data_mut(&mut self) -> Option<&mut ChartData> {
        self.data.as_mut()
    }

    pub fn set_max_highlight_distance(&mut self, distance_px: f64) -> ChartResult<()> {
        self.config.max_highlight_distance = validate_max_highlight_distance(distance_px)?;
        Ok(())
    }

    pub fn set_highlight_per_tap_enabled(&mut self, enabled: bool) {
        self.config.highlight_per_tap_enabled = enabled;
    }

    /// Refits the y ranges of both axes to the data bound to them.
    ///
    /// Axes without data keep their configured range. The x range is refit
    /// to the union of all data sets.
    pub fn fit_axes_to_data(&mut self) -> ChartResult<()> {
        let Some(data) = &self.data else {
            return Ok(());
        };

        let mut config = self.config;
        if let Some(bounds) = data.bounds() {
            config.x_range = fitted_range(config.x_range, bounds.x_min, bounds.x_max);
        }
        if let Some(bounds) = data.bounds_for_axis(AxisDependency::Primary) {
            config.primary_range = fitted_range(config.primary_range, bounds.y_min, bounds.y_max);
        }
        if let Some(bounds) = data.bounds_for_axis(AxisDependency::Secondary) {
            let current = config.secondary_range.unwrap_or(config.primary_range);
            config.secondary_range = Some(fitted_range(current, bounds.y_min, bounds.y_max));
        }

        let config = config.validate()?;
        self.transformer = build_transformer(&config)?;
        self.config = config;
        Ok(())
    }

    /// Highlighter configured with this chart's candidate policy.
    #[must_use]
    pub fn highlighter(&self) -> CartesianHighlighter<'_, Self> {
        CartesianHighlighter::with_policy(self, self.config.candidate_policy)
    }

    /// Resolves a tap or pointer position into a highlight.
    pub fn highlight_by_touch_point(&self, pixel_x: f64, pixel_y: f64) -> Option<Highlight> {
        if !self.config.highlight_per_tap_enabled {
            return None;
        }
        if self.data.is_none() {
            warn!("cannot select by touch: no data set");
            return None;
        }
        self.highlighter().resolve(pixel_x, pixel_y)
    }
}

impl ChartDataProvider for Chart {
    fn data(&self) -> Option<&ChartData> {
        self.data.as_ref()
    }

    fn transformer(&self, _axis: AxisDependency) -> Option<&dyn Transformer> {
        Some(&self.transformer)
    }

    fn max_highlight_distance(&self) -> f64 {
        self.config.max_highlight_distance
    }
}

fn build_transformer(config: &ChartConfig) -> ChartResult<ChartTransformer> {
    let transformer = ChartTransformer::new(config.plot, config.x_range, config.primary_range)?;
    match config.secondary_range {
        Some(range) => transformer.with_secondary(range),
        None => Ok(transformer),
    }
}

/// Range spanning `[min, max]`, widened around the value when the data is flat.
fn fitted_range(current: AxisRange, min: f64, max: f64) -> AxisRange {
    if !min.is_finite() || !max.is_finite() {
        return current;
    }
    let (min, max) = if max > min {
        (min, max)
    } else {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.5 };
        (min - pad, max + pad)
    };
    AxisRange::new(min, max).inverted(current.inverted)
}
