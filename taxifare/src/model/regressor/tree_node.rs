use serde::{Deserialize, Serialize};

/// a node stored in a [`super::DecisionTreeRegressor`] arena. child fields are
/// indices into the same arena.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum TreeNode {
    /// rows with `row[feature] <= threshold` continue to `left`, all others to `right`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// mean target of the training rows that reached this node
    Leaf { value: f64, samples: usize },
}
