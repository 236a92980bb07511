use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelRegistryError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed artifact '{name}': {reason}")]
    Malformed { name: String, reason: String },

    #[error("Feature vector length mismatch for model '{name}': expected {expected}, got {got}")]
    FeatureLength {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("Model '{name}' produced a non-finite prediction")]
    NonFinite { name: String },
}
