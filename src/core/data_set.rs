use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisDependency, Entry};

/// Policy for resolving an x lookup that falls between entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Rounding {
    /// First entry with `x >= value`; the last entry when `value` is past the data.
    Up,
    /// Entry with the largest `x <= value`; the first entry when `value` is before the data.
    Down,
    /// Entry with the smallest `|x - value|`; ties go to the larger x.
    #[default]
    Closest,
}

/// Read-only query contract a highlighter needs from one data series.
///
/// Entries are ordered by x (non-decreasing, duplicates allowed). When several
/// entries share the resolved x, lookups return the first of them.
pub trait ChartDataSet {
    fn entry_count(&self) -> usize;

    fn entry_for_index(&self, index: usize) -> Option<&Entry>;

    /// Index of the entry matching `x` under `rounding`, or `None` when empty.
    fn entry_index(&self, x: f64, rounding: Rounding) -> Option<usize>;

    fn entry_for_x(&self, x: f64, rounding: Rounding) -> Option<&Entry> {
        self.entry_index(x, rounding)
            .and_then(|index| self.entry_for_index(index))
    }

    /// All entries whose x equals `x` exactly.
    fn entries_for_x(&self, x: f64) -> &[Entry];

    fn is_highlight_enabled(&self) -> bool;

    fn axis_dependency(&self) -> AxisDependency;

    fn x_min(&self) -> Option<f64>;

    fn x_max(&self) -> Option<f64>;

    fn y_min(&self) -> Option<f64>;

    fn y_max(&self) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    fn of(entries: &[Entry]) -> Option<Self> {
        let first = entries.first()?;
        let last = entries.last()?;
        let mut bounds = Self {
            x_min: first.x,
            x_max: last.x,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for entry in entries {
            let (low, high) = if entry.is_stacked() {
                (-entry.negative_sum(), entry.positive_sum())
            } else {
                (entry.y, entry.y)
            };
            bounds.y_min = bounds.y_min.min(low);
            bounds.y_max = bounds.y_max.max(high);
        }
        Some(bounds)
    }

    /// Union of two bounds, used for per-axis extrema across data sets.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

/// Owned, x-ordered series of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    label: Option<String>,
    entries: Vec<Entry>,
    axis: AxisDependency,
    highlight_enabled: bool,
    bounds: Option<DataBounds>,
}

impl DataSet {
    /// Builds a data set, dropping non-finite entries and stably sorting by x.
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        let entries = canonicalize_entries(entries);
        let bounds = DataBounds::of(&entries);
        Self {
            label: None,
            entries,
            axis: AxisDependency::Primary,
            highlight_enabled: true,
            bounds,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisDependency) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_highlight_enabled(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    pub fn set_highlight_enabled(&mut self, enabled: bool) {
        self.highlight_enabled = enabled;
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn bounds(&self) -> Option<DataBounds> {
        self.bounds
    }

    /// Moves back to the first entry of a run sharing `index`'s x.
    fn first_of_run(&self, mut index: usize) -> usize {
        let x = self.entries[index].x;
        while index > 0 && self.entries[index - 1].x == x {
            index -= 1;
        }
        index
    }
}

impl ChartDataSet for DataSet {
    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn entry_for_index(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    fn entry_index(&self, x: f64, rounding: Rounding) -> Option<usize> {
        if self.entries.is_empty() || x.is_nan() {
            return None;
        }
        let last = self.entries.len() - 1;
        // First index whose x is >= the query.
        let upper = self.entries.partition_point(|entry| entry.x < x);

        let index = match rounding {
            Rounding::Up => upper.min(last),
            Rounding::Down => {
                let after = self.entries.partition_point(|entry| entry.x <= x);
                after.saturating_sub(1)
            }
            Rounding::Closest => {
                if upper == 0 {
                    0
                } else if upper > last {
                    last
                } else {
                    let below = self.entries[upper - 1].x;
                    let above = self.entries[upper].x;
                    if (x - below) < (above - x) {
                        upper - 1
                    } else {
                        upper
                    }
                }
            }
        };
        Some(self.first_of_run(index))
    }

    fn entries_for_x(&self, x: f64) -> &[Entry] {
        let start = self.entries.partition_point(|entry| entry.x < x);
        let end = self.entries.partition_point(|entry| entry.x <= x);
        &self.entries[start..end.max(start)]
    }

    fn is_highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    fn axis_dependency(&self) -> AxisDependency {
        self.axis
    }

    fn x_min(&self) -> Option<f64> {
        self.bounds.map(|b| b.x_min)
    }

    fn x_max(&self) -> Option<f64> {
        self.bounds.map(|b| b.x_max)
    }

    fn y_min(&self) -> Option<f64> {
        self.bounds.map(|b| b.y_min)
    }

    fn y_max(&self) -> Option<f64> {
        self.bounds.map(|b| b.y_max)
    }
}

fn canonicalize_entries(entries: Vec<Entry>) -> Vec<Entry> {
    let original_count = entries.len();
    let mut entries: Vec<Entry> = entries.into_iter().filter(Entry::is_finite).collect();
    if entries.len() != original_count {
        debug!(
            original_count,
            finite_count = entries.len(),
            "dropped non-finite entries"
        );
    }
    entries.sort_by(|left, right| left.x.total_cmp(&right.x));
    entries
}
