pub mod dataset_ops;
