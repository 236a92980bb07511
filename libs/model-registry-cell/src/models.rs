use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelRegistryError;

/// Ordered list of feature column names a trained model expects as input.
///
/// The order is fixed at training time and persisted alongside the model;
/// vectors built against a schema must keep exactly this field order.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Result<Self, ModelRegistryError> {
        if columns.is_empty() {
            return Err(ModelRegistryError::Malformed {
                name: "schema".to_string(),
                reason: "column list is empty".to_string(),
            });
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if index.insert(column.clone(), position).is_some() {
                return Err(ModelRegistryError::Malformed {
                    name: "schema".to_string(),
                    reason: format!("duplicate column '{}'", column),
                });
            }
        }

        Ok(Self { columns, index })
    }

    /// Load a persisted column-list artifact (a JSON array of names).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelRegistryError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let columns: Vec<String> = serde_json::from_str(&raw)?;
        Self::new(columns)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// All-zero vector shaped by this schema.
    pub fn zeroed(&self) -> FeatureVector {
        FeatureVector {
            values: vec![0.0; self.columns.len()],
        }
    }
}

/// Numeric input vector aligned to a [`FeatureSchema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Assign a named field. Returns `false` when the schema does not carry
    /// the field, leaving the vector untouched.
    pub fn set(&mut self, schema: &FeatureSchema, name: &str, value: f64) -> bool {
        match schema.position(name) {
            Some(position) if position < self.values.len() => {
                self.values[position] = value;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, schema: &FeatureSchema, name: &str) -> Option<f64> {
        schema.position(name).and_then(|p| self.values.get(p)).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
