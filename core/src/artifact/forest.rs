//! Regression forest made of binary decision trees.
//!
//! Each tree is a flat node list with the root at index 0. A split sends a row
//! left when its feature value is `<=` the threshold, right otherwise. The
//! forest predicts the mean of its trees.

use lustre_common::ModelError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ForestRegressor {
    pub trees: Vec<Tree>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl ForestRegressor {
    pub(super) fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|e| format!("tree {idx}: {e}"))?;
        }
        Ok(())
    }

    pub(super) fn evaluate(&self, row: &[f64]) -> Result<f64, ModelError> {
        let mut total = 0.0;
        for (idx, tree) in self.trees.iter().enumerate() {
            total += tree.evaluate(row, idx)?;
        }
        Ok(total / self.trees.len() as f64)
    }

    pub fn node_count(&self) -> usize {
        self.trees.iter().map(|tree| tree.nodes.len()).sum()
    }
}

impl Tree {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("no nodes".to_string());
        }
        let n_nodes = self.nodes.len();
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!(
                            "node {idx} splits on feature {feature}, only {n_features} exist"
                        ));
                    }
                    if *left >= n_nodes || *right >= n_nodes {
                        return Err(format!("node {idx} points outside the tree"));
                    }
                    if threshold.is_nan() {
                        return Err(format!("node {idx} has a NaN threshold"));
                    }
                }
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {idx} holds a non-finite value"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks from the root to a leaf.
    ///
    /// A root-to-leaf path never visits more nodes than the tree has, so a
    /// longer walk means the node links form a cycle.
    fn evaluate(&self, row: &[f64], tree: usize) -> Result<f64, ModelError> {
        let limit = self.nodes.len();
        let mut idx = 0;
        for _ in 0..limit {
            let node = self.nodes.get(idx).ok_or_else(|| {
                ModelError::Backend(format!("tree {tree} has no node {idx}"))
            })?;
            match node {
                Node::Leaf { value } => return Ok(*value),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = row.get(*feature).ok_or_else(|| {
                        ModelError::Backend(format!("tree {tree} reads missing feature {feature}"))
                    })?;
                    idx = if *value <= *threshold { *left } else { *right };
                }
            }
        }
        Err(ModelError::UnterminatedTree { tree, limit })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
