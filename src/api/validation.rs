use crate::core::AxisRange;
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

pub(super) fn validate_chart_config(config: ChartConfig) -> ChartResult<ChartConfig> {
    config.plot.validate()?;
    validate_axis_range(config.x_range, "x")?;
    validate_axis_range(config.primary_range, "primary")?;
    if let Some(secondary) = config.secondary_range {
        validate_axis_range(secondary, "secondary")?;
    }
    validate_max_highlight_distance(config.max_highlight_distance)?;
    Ok(config)
}

pub(super) fn validate_max_highlight_distance(distance_px: f64) -> ChartResult<f64> {
    if distance_px.is_nan() || distance_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "max highlight distance must be > 0".to_owned(),
        ));
    }
    Ok(distance_px)
}

fn validate_axis_range(range: AxisRange, name: &str) -> ChartResult<AxisRange> {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{name} axis range must be finite"
        )));
    }
    if range.max <= range.min {
        return Err(ChartError::InvalidData(format!(
            "{name} axis range max must be greater than min"
        )));
    }
    Ok(range)
}
