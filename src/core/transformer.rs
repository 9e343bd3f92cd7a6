use serde::{Deserialize, Serialize};

use crate::core::{AxisDependency, LinearScale, PlotRect, Point};
use crate::error::{ChartError, ChartResult};

/// Pixel <-> data conversion contract, parameterized by y-axis binding.
///
/// Implementations must be side-effect free: highlighters call them on every
/// pointer event.
pub trait Transformer {
    fn pixel_to_value(&self, pixel_x: f64, pixel_y: f64, axis: AxisDependency)
    -> ChartResult<Point>;

    fn value_to_pixel(&self, x: f64, y: f64, axis: AxisDependency) -> ChartResult<Point>;
}

/// Data range covered by one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub inverted: bool,
}

impl AxisRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inverted: false,
        }
    }

    #[must_use]
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

/// Linear transformer for a cartesian plot area with one shared x-axis and
/// up to two y-axes.
///
/// When no secondary range is configured, the secondary axis reuses the
/// primary mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartTransformer {
    plot: PlotRect,
    x_scale: LinearScale,
    primary_scale: LinearScale,
    secondary_scale: Option<LinearScale>,
}

impl ChartTransformer {
    pub fn new(plot: PlotRect, x_range: AxisRange, primary: AxisRange) -> ChartResult<Self> {
        let plot = plot.validate()?;
        let x_scale = if x_range.inverted {
            LinearScale::new(x_range.min, x_range.max, plot.right(), plot.left)?
        } else {
            LinearScale::new(x_range.min, x_range.max, plot.left, plot.right())?
        };
        Ok(Self {
            plot,
            x_scale,
            primary_scale: y_scale(plot, primary)?,
            secondary_scale: None,
        })
    }

    pub fn with_secondary(mut self, secondary: AxisRange) -> ChartResult<Self> {
        self.secondary_scale = Some(y_scale(self.plot, secondary)?);
        Ok(self)
    }

    #[must_use]
    pub fn plot(&self) -> PlotRect {
        self.plot
    }

    #[must_use]
    pub fn y_scale(&self, axis: AxisDependency) -> LinearScale {
        match axis {
            AxisDependency::Primary => self.primary_scale,
            AxisDependency::Secondary => self.secondary_scale.unwrap_or(self.primary_scale),
        }
    }
}

impl Transformer for ChartTransformer {
    fn pixel_to_value(
        &self,
        pixel_x: f64,
        pixel_y: f64,
        axis: AxisDependency,
    ) -> ChartResult<Point> {
        Ok(Point::new(
            self.x_scale.pixel_to_domain(pixel_x)?,
            self.y_scale(axis).pixel_to_domain(pixel_y)?,
        ))
    }

    fn value_to_pixel(&self, x: f64, y: f64, axis: AxisDependency) -> ChartResult<Point> {
        Ok(Point::new(
            self.x_scale.domain_to_pixel(x)?,
            self.y_scale(axis).domain_to_pixel(y)?,
        ))
    }
}

fn y_scale(plot: PlotRect, range: AxisRange) -> ChartResult<LinearScale> {
    if !(range.max > range.min) {
        return Err(ChartError::InvalidData(
            "axis range max must be greater than min".to_owned(),
        ));
    }
    // Screen y grows downwards, so the default orientation maps `min` to the bottom edge.
    if range.inverted {
        LinearScale::new(range.min, range.max, plot.top, plot.bottom())
    } else {
        LinearScale::new(range.min, range.max, plot.bottom(), plot.top)
    }
}
