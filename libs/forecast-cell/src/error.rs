use thiserror::Error;

use model_registry_cell::ModelRegistryError;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required feature '{field}' is missing from the model schema")]
    SchemaMismatch { field: String },

    #[error("Predictor failure: {0}")]
    Predictor(#[from] ModelRegistryError),
}
