use crate::core::{AxisDependency, ChartDataSet, DataBounds, DataSet};

/// The data sets rendered by one chart, in draw order.
///
/// A data set's index in this collection is the `data_set_index` reported by
/// highlights.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    data_sets: Vec<DataSet>,
}

impl ChartData {
    #[must_use]
    pub fn new(data_sets: Vec<DataSet>) -> Self {
        Self { data_sets }
    }

    #[must_use]
    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    #[must_use]
    pub fn data_sets(&self) -> &[DataSet] {
        &self.data_sets
    }

    #[must_use]
    pub fn data_set(&self, index: usize) -> Option<&DataSet> {
        self.data_sets.get(index)
    }

    pub fn data_set_mut(&mut self, index: usize) -> Option<&mut DataSet> {
        self.data_sets.get_mut(index)
    }

    #[must_use]
    pub fn data_set_by_label(&self, label: &str) -> Option<(usize, &DataSet)> {
        self.data_sets
            .iter()
            .enumerate()
            .find(|(_, set)| set.label() == Some(label))
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(ChartDataSet::entry_count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Combined extrema of all data sets bound to `axis`.
    #[must_use]
    pub fn bounds_for_axis(&self, axis: AxisDependency) -> Option<DataBounds> {
        self.data_sets
            .iter()
            .filter(|set| set.axis_dependency() == axis)
            .filter_map(DataSet::bounds)
            .reduce(DataBounds::union)
    }

    #[must_use]
    pub fn bounds(&self) -> Option<DataBounds> {
        self.data_sets
            .iter()
            .filter_map(DataSet::bounds)
            .reduce(DataBounds::union)
    }
}
