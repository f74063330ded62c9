mod bounded_column;
mod outlier_config;
pub mod outlier_ops;

pub use bounded_column::BoundedColumn;
pub use outlier_config::OutlierConfig;
