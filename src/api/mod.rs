mod chart;
mod chart_config;
mod json_contract;
mod pie_chart;
mod validation;

pub use chart::Chart;
pub use chart_config::{ChartConfig, DEFAULT_MAX_HIGHLIGHT_DISTANCE};
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
pub use pie_chart::PieChart;
