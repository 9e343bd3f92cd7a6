use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Value span covered by one segment of a stacked entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackRange {
    pub from: f64,
    pub to: f64,
}

impl StackRange {
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let (low, high) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        value >= low && value <= high
    }
}

/// One data point.
///
/// A stacked entry carries its ordered sub-values; its `y` is their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stack_values: Option<Vec<f64>>,
}

impl Entry {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            stack_values: None,
        }
    }

    /// Creates a stacked entry; `y` becomes the sum of `values`.
    #[must_use]
    pub fn stacked(x: f64, values: Vec<f64>) -> Self {
        Self {
            x,
            y: values.iter().sum(),
            stack_values: Some(values),
        }
    }

    /// Builds a time-series entry: `x` is unix seconds with millisecond precision.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        let y = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData("entry value cannot be represented as f64".to_owned())
        })?;
        Ok(Self::new(time.timestamp_millis() as f64 / 1000.0, y))
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stack_values.is_some()
    }

    #[must_use]
    pub fn stack_values(&self) -> Option<&[f64]> {
        self.stack_values.as_deref()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self
                .stack_values()
                .is_none_or(|values| values.iter().all(|v| v.is_finite()))
    }

    /// Sum of the positive sub-values (0 when not stacked).
    #[must_use]
    pub fn positive_sum(&self) -> f64 {
        self.stack_values()
            .map(|values| values.iter().filter(|v| **v >= 0.0).sum())
            .unwrap_or(0.0)
    }

    /// Magnitude of the negative sub-values (0 when not stacked).
    #[must_use]
    pub fn negative_sum(&self) -> f64 {
        self.stack_values()
            .map(|values| values.iter().filter(|v| **v < 0.0).map(|v| -v).sum())
            .unwrap_or(0.0)
    }

    /// Sum of the sub-values stacked after `stack_index`.
    #[must_use]
    pub fn below_sum(&self, stack_index: usize) -> f64 {
        self.stack_values()
            .map(|values| values.iter().skip(stack_index + 1).sum())
            .unwrap_or(0.0)
    }

    /// Per-segment value ranges.
    ///
    /// Positive values stack upwards from zero and negative values stack
    /// downwards from zero, each in sub-value order.
    #[must_use]
    pub fn stack_ranges(&self) -> Vec<StackRange> {
        let Some(values) = self.stack_values() else {
            return Vec::new();
        };

        let mut positive = 0.0;
        let mut negative = 0.0;
        values
            .iter()
            .map(|&value| {
                if value < 0.0 {
                    let from = negative;
                    negative += value;
                    StackRange { from, to: negative }
                } else {
                    let from = positive;
                    positive += value;
                    StackRange { from, to: positive }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::Entry;

    #[test]
    fn decimal_time_entry_uses_unix_seconds() {
        let time = Utc.timestamp_millis_opt(1_700_000_000_500).single().expect("time");
        let entry = Entry::from_decimal_time(time, Decimal::new(12_345, 2)).expect("entry");
        assert!((entry.x - 1_700_000_000.5).abs() <= 1e-6);
        assert!((entry.y - 123.45).abs() <= 1e-9);
    }

    #[test]
    fn stacked_entry_sums_values_and_splits_signs() {
        let entry = Entry::stacked(1.0, vec![2.0, -1.0, 3.0, -4.0]);
        assert!(entry.is_stacked());
        assert!((entry.y - 0.0).abs() <= 1e-12);
        assert!((entry.positive_sum() - 5.0).abs() <= 1e-12);
        assert!((entry.negative_sum() - 5.0).abs() <= 1e-12);
    }

    #[test]
    fn stack_ranges_grow_away_from_zero_per_sign() {
        let entry = Entry::stacked(0.0, vec![2.0, -1.0, 3.0, -4.0]);
        let ranges = entry.stack_ranges();
        let spans: Vec<(f64, f64)> = ranges.iter().map(|r| (r.from, r.to)).collect();
        assert_eq!(spans, vec![(0.0, 2.0), (0.0, -1.0), (2.0, 5.0), (-1.0, -5.0)]);
        assert!(ranges[3].contains(-3.0));
        assert!(!ranges[2].contains(1.0));
    }

    #[test]
    fn below_sum_accumulates_later_segments() {
        let entry = Entry::stacked(0.0, vec![1.0, 2.0, 4.0]);
        assert!((entry.below_sum(0) - 6.0).abs() <= 1e-12);
        assert!((entry.below_sum(2) - 0.0).abs() <= 1e-12);
        assert!((Entry::new(0.0, 3.0).below_sum(0) - 0.0).abs() <= 1e-12);
    }

    #[test]
    fn plain_entry_has_no_ranges() {
        let entry = Entry::new(1.0, 5.0);
        assert!(!entry.is_stacked());
        assert!(entry.stack_ranges().is_empty());
    }
}
