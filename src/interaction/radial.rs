use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartData, ChartDataSet, Point};

use super::{ChartDataProvider, Highlight, Highlighter};

/// Maps a pointer position onto a sector index of a radial chart.
pub trait RadialLayout {
    /// Sector under the pointer, or `None` when the pointer misses the chart.
    fn index_for_point(&self, data: &ChartData, pixel_x: f64, pixel_y: f64) -> Option<usize>;
}

/// Pie geometry: sectors sized by each entry's share of `|y|`, laid out
/// clockwise (in screen space) starting at `rotation_degrees` from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center: Point,
    pub radius: f64,
    #[serde(default)]
    pub rotation_degrees: f64,
}

impl PieLayout {
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            rotation_degrees: 0.0,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_degrees: f64) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    /// Clockwise screen-space angle of the pointer around the center, in `[0, 360)`.
    #[must_use]
    pub fn angle_for_point(&self, pixel_x: f64, pixel_y: f64) -> f64 {
        let degrees = (pixel_y - self.center.y)
            .atan2(pixel_x - self.center.x)
            .to_degrees();
        degrees.rem_euclid(360.0)
    }
}

impl RadialLayout for PieLayout {
    fn index_for_point(&self, data: &ChartData, pixel_x: f64, pixel_y: f64) -> Option<usize> {
        let distance = self.center.distance_to(Point::new(pixel_x, pixel_y));
        if !(distance <= self.radius) {
            return None;
        }

        let set = data.data_set(0)?;
        let total: f64 = (0..set.entry_count())
            .filter_map(|index| set.entry_for_index(index))
            .map(|entry| entry.y.abs())
            .sum();
        if !(total > 0.0) {
            return None;
        }

        let angle =
            (self.angle_for_point(pixel_x, pixel_y) - self.rotation_degrees).rem_euclid(360.0);
        let mut end_angle = 0.0;
        for index in 0..set.entry_count() {
            let entry = set.entry_for_index(index)?;
            end_angle += 360.0 * entry.y.abs() / total;
            if angle < end_angle {
                return Some(index);
            }
        }
        // Rounding can leave the last sector ending just short of 360.
        set.entry_count().checked_sub(1)
    }
}

/// Index-driven highlighter for pie/radial charts.
///
/// Radial charts render a single data set, so highlights always come from
/// data set 0 and carry the sector index as their x.
#[derive(Debug)]
pub struct RadialHighlighter<'a, P: ChartDataProvider + ?Sized, L = PieLayout> {
    chart: &'a P,
    layout: L,
}

impl<'a, P: ChartDataProvider + ?Sized, L: RadialLayout> RadialHighlighter<'a, P, L> {
    #[must_use]
    pub fn new(chart: &'a P, layout: L) -> Self {
        Self { chart, layout }
    }

    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Resolves a pointer position through the layout's sector mapping.
    pub fn resolve(&self, pixel_x: f64, pixel_y: f64) -> Option<Highlight> {
        let data = self.chart.data()?;
        let index = self.layout.index_for_point(data, pixel_x, pixel_y)?;
        self.resolve_by_index(index, pixel_x, pixel_y)
    }

    /// Packages entry `index` of data set 0; the pixel position is passed through.
    pub fn resolve_by_index(&self, index: usize, pixel_x: f64, pixel_y: f64) -> Option<Highlight> {
        let Some(set) = self.chart.data().and_then(|data| data.data_set(0)) else {
            debug!("cannot highlight: radial chart has no data set");
            return None;
        };
        let entry = set.entry_for_index(index)?;
        Some(Highlight::new(
            index as f64,
            entry.y,
            pixel_x,
            pixel_y,
            0,
            set.axis_dependency(),
        ))
    }
}

impl<P: ChartDataProvider + ?Sized, L: Clone> Clone for RadialHighlighter<'_, P, L> {
    fn clone(&self) -> Self {
        Self {
            chart: self.chart,
            layout: self.layout.clone(),
        }
    }
}

impl<P: ChartDataProvider + ?Sized, L: Copy> Copy for RadialHighlighter<'_, P, L> {}

impl<P: ChartDataProvider + ?Sized, L: RadialLayout> Highlighter for RadialHighlighter<'_, P, L> {
    fn highlight(&self, pixel_x: f64, pixel_y: f64) -> Option<Highlight> {
        self.resolve(pixel_x, pixel_y)
    }
}
