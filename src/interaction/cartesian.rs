use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{AxisDependency, ChartData, ChartDataSet, DataSet, Entry, Point, Rounding};

use super::{ChartDataProvider, Highlight, Highlighter};

/// How an entry found at the pointer's x turns into selection candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CandidatePolicy {
    /// One candidate per entry (line, scatter, candle, bubble, plain bar).
    #[default]
    Entry,
    /// One candidate per segment of a stacked entry; other entries as `Entry`.
    BarStack,
}

/// A selection candidate together with the pixel position it is ranked by.
///
/// For whole entries `hit` equals the highlight's pixel position. For stacked
/// segments it is the pointer's y clamped into the segment's pixel span, so a
/// pointer inside a segment ranks that segment at zero vertical distance.
/// The distance limit is always measured to the reported pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub highlight: Highlight,
    pub hit: Point,
}

impl Candidate {
    /// Pixel position reported by the highlight.
    #[must_use]
    pub fn pixel(&self) -> Point {
        Point::new(self.highlight.x_px, self.highlight.y_px)
    }
}

/// Inline buffer sized for two roundings over a few data sets.
pub type Candidates = SmallVec<[Candidate; 8]>;

/// Nearest-value highlighter for axis-aligned charts.
#[derive(Debug)]
pub struct CartesianHighlighter<'a, P: ChartDataProvider + ?Sized> {
    chart: &'a P,
    policy: CandidatePolicy,
}

impl<'a, P: ChartDataProvider + ?Sized> CartesianHighlighter<'a, P> {
    #[must_use]
    pub fn new(chart: &'a P) -> Self {
        Self::with_policy(chart, CandidatePolicy::Entry)
    }

    /// Highlighter that selects individual segments of stacked bars.
    #[must_use]
    pub fn bar_stack(chart: &'a P) -> Self {
        Self::with_policy(chart, CandidatePolicy::BarStack)
    }

    #[must_use]
    pub fn with_policy(chart: &'a P, policy: CandidatePolicy) -> Self {
        Self { chart, policy }
    }

    #[must_use]
    pub fn policy(&self) -> CandidatePolicy {
        self.policy
    }

    /// Resolves a pointer position in pixels to at most one highlight.
    pub fn resolve(&self, pixel_x: f64, pixel_y: f64) -> Option<Highlight> {
        let value = self.value_for_touch(pixel_x, pixel_y)?;
        self.resolve_for_x_value(value.x, pixel_x, pixel_y)
    }

    /// Data-space position under the pointer.
    ///
    /// The x mapping is shared by both axes, so the primary transformer is used.
    pub fn value_for_touch(&self, pixel_x: f64, pixel_y: f64) -> Option<Point> {
        let transformer = self.chart.transformer(AxisDependency::Primary)?;
        match transformer.pixel_to_value(pixel_x, pixel_y, AxisDependency::Primary) {
            Ok(value) => Some(value),
            Err(err) => {
                trace!(error = %err, pixel_x, pixel_y, "pointer is not mappable to data");
                None
            }
        }
    }

    /// Resolves the highlight for an already-mapped data x and the raw pointer position.
    pub fn resolve_for_x_value(
        &self,
        x_value: f64,
        pixel_x: f64,
        pixel_y: f64,
    ) -> Option<Highlight> {
        let Some(data) = self.chart.data() else {
            debug!("cannot highlight: chart has no data");
            return None;
        };

        let candidates = self.candidates_for_x_value(data, x_value, pixel_y);
        let axis = preferred_axis(&candidates, pixel_y);
        let selected = closest_by_pixel(
            &candidates,
            Point::new(pixel_x, pixel_y),
            Some(axis),
            self.chart.max_highlight_distance(),
        );
        trace!(
            x_value,
            candidates = candidates.len(),
            ?axis,
            selected = selected.is_some(),
            "resolved highlight"
        );
        selected
    }

    /// Candidates closest to `x_value`: for every highlight-enabled data set,
    /// the entry rounding up and the entry rounding down.
    ///
    /// `pointer_y` is only used to position stacked-segment hits.
    pub fn candidates_for_x_value(
        &self,
        data: &ChartData,
        x_value: f64,
        pointer_y: f64,
    ) -> Candidates {
        let mut candidates = Candidates::new();
        for (index, set) in data.data_sets().iter().enumerate() {
            if !set.is_highlight_enabled() {
                continue;
            }
            for rounding in [Rounding::Up, Rounding::Down] {
                if let Some(entry) = set.entry_for_x(x_value, rounding) {
                    self.push_entry_candidates(set, index, entry, pointer_y, &mut candidates);
                }
            }
        }
        candidates
    }

    fn push_entry_candidates(
        &self,
        set: &DataSet,
        data_set_index: usize,
        entry: &Entry,
        pointer_y: f64,
        out: &mut Candidates,
    ) {
        let axis = set.axis_dependency();
        let Some(transformer) = self.chart.transformer(axis) else {
            return;
        };
        let pixel = match transformer.value_to_pixel(entry.x, entry.y, axis) {
            Ok(pixel) => pixel,
            Err(err) => {
                trace!(error = %err, data_set_index, x = entry.x, "skipping unmappable entry");
                return;
            }
        };
        let whole = Highlight::new(entry.x, entry.y, pixel.x, pixel.y, data_set_index, axis);

        let ranges = match self.policy {
            CandidatePolicy::BarStack => entry.stack_ranges(),
            CandidatePolicy::Entry => Vec::new(),
        };
        if ranges.is_empty() {
            out.push(Candidate {
                highlight: whole,
                hit: pixel,
            });
            return;
        }

        for (stack_index, range) in ranges.into_iter().enumerate() {
            let from = transformer.value_to_pixel(entry.x, range.from, axis);
            let to = transformer.value_to_pixel(entry.x, range.to, axis);
            let (Ok(from), Ok(to)) = (from, to) else {
                continue;
            };
            let (top, bottom) = if from.y <= to.y {
                (from.y, to.y)
            } else {
                (to.y, from.y)
            };
            let hit_y = if pointer_y.is_nan() {
                to.y
            } else {
                pointer_y.clamp(top, bottom)
            };
            out.push(Candidate {
                highlight: Highlight {
                    y_px: to.y,
                    ..whole
                }
                .with_stack_index(stack_index),
                hit: Point::new(pixel.x, hit_y),
            });
        }
    }
}

impl<P: ChartDataProvider + ?Sized> Clone for CartesianHighlighter<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ChartDataProvider + ?Sized> Copy for CartesianHighlighter<'_, P> {}

impl<P: ChartDataProvider + ?Sized> Highlighter for CartesianHighlighter<'_, P> {
    fn highlight(&self, pixel_x: f64, pixel_y: f64) -> Option<Highlight> {
        self.resolve(pixel_x, pixel_y)
    }
}

/// Smallest vertical pixel distance between `pointer_y` and a candidate on `axis`.
///
/// Returns `f64::INFINITY` when no candidate is bound to `axis`.
#[must_use]
pub fn minimum_y_distance(candidates: &[Candidate], pointer_y: f64, axis: AxisDependency) -> f64 {
    candidates
        .iter()
        .filter(|candidate| candidate.highlight.axis == axis)
        .map(|candidate| (candidate.hit.y - pointer_y).abs())
        .fold(f64::INFINITY, f64::min)
}

/// Axis whose candidates come vertically closest to the pointer; ties go to primary.
#[must_use]
pub fn preferred_axis(candidates: &[Candidate], pointer_y: f64) -> AxisDependency {
    let primary = minimum_y_distance(candidates, pointer_y, AxisDependency::Primary);
    let secondary = minimum_y_distance(candidates, pointer_y, AxisDependency::Secondary);
    if primary <= secondary {
        AxisDependency::Primary
    } else {
        AxisDependency::Secondary
    }
}

/// Candidate nearest to `pointer` (2-D pixel distance to its hit position)
/// among those on `axis` (all candidates when `axis` is `None`).
///
/// A candidate is accepted only when the distance from `pointer` to its
/// reported pixel position is strictly below `max_distance`. Equal distances
/// keep the earlier candidate.
#[must_use]
pub fn closest_by_pixel(
    candidates: &[Candidate],
    pointer: Point,
    axis: Option<AxisDependency>,
    max_distance: f64,
) -> Option<Highlight> {
    candidates
        .iter()
        .filter(|candidate| axis.is_none_or(|axis| candidate.highlight.axis == axis))
        .filter(|candidate| candidate.pixel().distance_to(pointer) < max_distance)
        .map(|candidate| (OrderedFloat(candidate.hit.distance_to(pointer)), candidate))
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.highlight)
}
