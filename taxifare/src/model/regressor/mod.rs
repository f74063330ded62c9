mod decision_tree_regressor;
mod estimator_config;
mod fitted_regressor;
mod linear_regressor;
mod tree_node;

pub use decision_tree_regressor::DecisionTreeRegressor;
pub use estimator_config::EstimatorConfig;
pub use fitted_regressor::Regressor;
pub use linear_regressor::LinearRegressor;
pub use tree_node::TreeNode;
