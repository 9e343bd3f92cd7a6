pub mod chart_data;
pub mod data_set;
pub mod entry;
pub mod scale;
pub mod transformer;
pub mod types;

pub use chart_data::ChartData;
pub use data_set::{ChartDataSet, DataBounds, DataSet, Rounding};
pub use entry::{Entry, StackRange};
pub use scale::LinearScale;
pub use transformer::{AxisRange, ChartTransformer, Transformer};
pub use types::{AxisDependency, PlotRect, Point};
