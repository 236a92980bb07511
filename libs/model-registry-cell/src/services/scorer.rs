use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ModelRegistryError;
use crate::models::FeatureVector;

/// Opaque scoring capability over a fixed-schema numeric vector.
///
/// Scorers are read-only after load and safe to share across concurrent
/// forecast runs.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelRegistryError>;
}

/// Persisted form of one regression ensemble, as exported by the training
/// pipeline. Node indices are positions into the flat `nodes` array.
#[derive(Debug, Clone, Deserialize)]
pub struct EnsembleArtifact {
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeArtifact {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: f64,
    },
}

/// Gradient-boosted tree ensemble evaluator.
///
/// Scores a feature vector by walking every tree from its root and summing
/// the reached leaf values onto the base score.
#[derive(Debug)]
pub struct TreeEnsembleScorer {
    name: String,
    n_features: usize,
    base_score: f64,
    trees: Vec<TreeArtifact>,
}

impl TreeEnsembleScorer {
    pub fn from_artifact(
        name: &str,
        artifact: EnsembleArtifact,
        n_features: usize,
    ) -> Result<Self, ModelRegistryError> {
        for (tree_index, tree) in artifact.trees.iter().enumerate() {
            validate_tree(name, tree_index, tree, n_features)?;
        }

        debug!(
            "Validated ensemble '{}': {} trees over {} features",
            name,
            artifact.trees.len(),
            n_features
        );

        Ok(Self {
            name: name.to_string(),
            n_features,
            base_score: artifact.base_score,
            trees: artifact.trees,
        })
    }

    pub fn from_file(
        name: &str,
        path: impl AsRef<Path>,
        n_features: usize,
    ) -> Result<Self, ModelRegistryError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let artifact: EnsembleArtifact = serde_json::from_str(&raw)?;
        Self::from_artifact(name, artifact, n_features)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }
}

impl Predictor for TreeEnsembleScorer {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelRegistryError> {
        if features.len() != self.n_features {
            return Err(ModelRegistryError::FeatureLength {
                name: self.name.clone(),
                expected: self.n_features,
                got: features.len(),
            });
        }

        let values = features.values();
        let mut score = self.base_score;
        for tree in &self.trees {
            score += score_tree(tree, values);
        }

        if !score.is_finite() {
            return Err(ModelRegistryError::NonFinite {
                name: self.name.clone(),
            });
        }

        Ok(score)
    }
}

fn score_tree(tree: &TreeArtifact, values: &[f64]) -> f64 {
    let mut cursor = 0;
    loop {
        match &tree.nodes[cursor] {
            TreeNode::Leaf { leaf } => return *leaf,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                cursor = if values[*feature] < *threshold {
                    *left
                } else {
                    *right
                };
            }
        }
    }
}

// Child edges must point strictly forward so traversal terminates; checked
// once at load so scoring can index without bounds handling.
fn validate_tree(
    name: &str,
    tree_index: usize,
    tree: &TreeArtifact,
    n_features: usize,
) -> Result<(), ModelRegistryError> {
    let malformed = |reason: String| ModelRegistryError::Malformed {
        name: name.to_string(),
        reason,
    };

    if tree.nodes.is_empty() {
        return Err(malformed(format!("tree {} has no nodes", tree_index)));
    }

    for (node_index, node) in tree.nodes.iter().enumerate() {
        if let TreeNode::Split {
            feature,
            threshold,
            left,
            right,
        } = node
        {
            if *feature >= n_features {
                return Err(malformed(format!(
                    "tree {} node {} splits on feature {} but the schema has {} columns",
                    tree_index, node_index, feature, n_features
                )));
            }
            if !threshold.is_finite() {
                return Err(malformed(format!(
                    "tree {} node {} has a non-finite threshold",
                    tree_index, node_index
                )));
            }
            for child in [*left, *right] {
                if child <= node_index || child >= tree.nodes.len() {
                    return Err(malformed(format!(
                        "tree {} node {} has an invalid child index {}",
                        tree_index, node_index, child
                    )));
                }
            }
        }
    }

    Ok(())
}
