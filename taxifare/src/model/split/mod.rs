mod dataset_split;
mod split_config;

pub use dataset_split::DatasetSplit;
pub use split_config::SplitConfig;
