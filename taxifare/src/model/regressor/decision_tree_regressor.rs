use super::TreeNode;
use crate::model::TaxiFareError;
use ndarray::{ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

const MIN_SAMPLES_SPLIT: usize = 2;

/// CART regression tree using the squared error criterion.
///
/// nodes are stored in a flat arena with the root at index 0. a node is only
/// split when it holds at least two rows, sits above `max_depth`, is not pure,
/// and some threshold reduces the summed squared error. thresholds are placed
/// halfway between consecutive distinct feature values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DecisionTreeRegressor {
    max_depth: usize,
    n_features: usize,
    nodes: Vec<TreeNode>,
}

struct CandidateSplit {
    feature: usize,
    threshold: f64,
    sse: f64,
}

struct TreeBuilder<'a> {
    records: ArrayView2<'a, f64>,
    targets: ArrayView1<'a, f64>,
    max_depth: usize,
    nodes: Vec<TreeNode>,
}

impl DecisionTreeRegressor {
    pub fn fit(
        records: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        max_depth: usize,
    ) -> Result<DecisionTreeRegressor, TaxiFareError> {
        if records.nrows() == 0 {
            return Err(TaxiFareError::TrainingError(String::from(
                "cannot fit a decision tree to zero rows",
            )));
        }
        if records.nrows() != targets.len() {
            return Err(TaxiFareError::TrainingError(format!(
                "decision tree given {} rows but {} targets",
                records.nrows(),
                targets.len()
            )));
        }
        if records.iter().chain(targets.iter()).any(|v| !v.is_finite()) {
            return Err(TaxiFareError::TrainingError(String::from(
                "decision tree training data contains non-finite values",
            )));
        }
        let mut builder = TreeBuilder {
            records,
            targets,
            max_depth,
            nodes: vec![],
        };
        let mut indices = (0..records.nrows()).collect::<Vec<_>>();
        builder.grow(&mut indices, 0);
        let tree = DecisionTreeRegressor {
            max_depth,
            n_features: records.ncols(),
            nodes: builder.nodes,
        };
        log::debug!(
            "fit decision tree with {} nodes, depth {}",
            tree.nodes.len(),
            tree.depth()
        );
        Ok(tree)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(0, 0)];
        while let Some((idx, depth)) = stack.pop() {
            if let Some(TreeNode::Split { left, right, .. }) = self.nodes.get(idx) {
                stack.push((*left, depth + 1));
                stack.push((*right, depth + 1));
            } else {
                deepest = deepest.max(depth);
            }
        }
        deepest
    }

    pub fn predict_row(&self, row: &[f64]) -> Result<f64, TaxiFareError> {
        if row.len() != self.n_features {
            return Err(TaxiFareError::PredictionError(format!(
                "decision tree expects {} features, found {}",
                self.n_features,
                row.len()
            )));
        }
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value, .. }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = row.get(*feature).ok_or_else(|| {
                        TaxiFareError::PredictionError(format!(
                            "split references feature {feature} outside of the row"
                        ))
                    })?;
                    idx = if value <= threshold { *left } else { *right };
                }
                None => {
                    return Err(TaxiFareError::PredictionError(format!(
                        "decision tree has no node {idx}"
                    )))
                }
            }
        }
    }
}

impl TreeBuilder<'_> {
    /// appends the subtree for `indices` and returns the index of its root
    fn grow(&mut self, indices: &mut [usize], depth: usize) -> usize {
        let n = indices.len();
        let (sum, sum_sq) = self.sums(indices);
        let sse = sum_sq - sum * sum / n as f64;
        let node_id = self.nodes.len();
        self.nodes.push(TreeNode::Leaf {
            value: sum / n as f64,
            samples: n,
        });

        if depth >= self.max_depth || n < MIN_SAMPLES_SPLIT || sse <= f64::EPSILON {
            return node_id;
        }
        let best = match self.best_split(indices, sse) {
            Some(split) => split,
            None => return node_id,
        };

        let feature = best.feature;
        indices.sort_by(|a, b| {
            self.records[[*a, feature]].total_cmp(&self.records[[*b, feature]])
        });
        let n_left = indices
            .iter()
            .take_while(|i| self.records[[**i, feature]] <= best.threshold)
            .count();
        let (left_indices, right_indices) = indices.split_at_mut(n_left);
        let left = self.grow(left_indices, depth + 1);
        let right = self.grow(right_indices, depth + 1);
        self.nodes[node_id] = TreeNode::Split {
            feature,
            threshold: best.threshold,
            left,
            right,
        };
        node_id
    }

    fn sums(&self, indices: &[usize]) -> (f64, f64) {
        indices.iter().fold((0.0, 0.0), |(s, sq), i| {
            let y = self.targets[*i];
            (s + y, sq + y * y)
        })
    }

    /// scans every feature for the threshold with the lowest summed squared error
    fn best_split(&self, indices: &[usize], parent_sse: f64) -> Option<CandidateSplit> {
        let n = indices.len();
        let (total_sum, total_sq) = self.sums(indices);
        let mut sorted = indices.to_vec();
        let mut best: Option<CandidateSplit> = None;

        for feature in 0..self.records.ncols() {
            let x = |i: usize| self.records[[i, feature]];
            sorted.sort_by(|a, b| x(*a).total_cmp(&x(*b)));

            let mut left_sum = 0.0;
            let mut left_sq = 0.0;
            for pos in 0..n - 1 {
                let y = self.targets[sorted[pos]];
                left_sum += y;
                left_sq += y * y;

                let here = x(sorted[pos]);
                let next = x(sorted[pos + 1]);
                if here >= next {
                    continue;
                }
                let n_left = (pos + 1) as f64;
                let n_right = (n - pos - 1) as f64;
                let right_sum = total_sum - left_sum;
                let right_sq = total_sq - left_sq;
                let sse = (left_sq - left_sum * left_sum / n_left)
                    + (right_sq - right_sum * right_sum / n_right);

                if best.as_ref().map(|b| sse < b.sse).unwrap_or(true) {
                    let mut threshold = here + (next - here) / 2.0;
                    if threshold >= next {
                        threshold = here;
                    }
                    best = Some(CandidateSplit {
                        feature,
                        threshold,
                        sse,
                    });
                }
            }
        }
        best.filter(|b| b.sse < parent_sse)
    }
}
