use tracing::info;

use shared_config::AppConfig;

use crate::error::ModelRegistryError;
use crate::models::FeatureSchema;
use crate::services::scorer::TreeEnsembleScorer;

/// The three trained regression scorers and the two feature schemas their
/// input vectors must follow.
///
/// Loaded once at startup; read-only afterwards, so a single registry is
/// shared across concurrent forecast runs.
#[derive(Debug)]
pub struct ModelRegistry {
    pub arrival_schema: FeatureSchema,
    pub queue_wait_schema: FeatureSchema,
    pub arrival_model: TreeEnsembleScorer,
    pub queue_model: TreeEnsembleScorer,
    pub wait_model: TreeEnsembleScorer,
}

impl ModelRegistry {
    pub fn new(
        arrival_schema: FeatureSchema,
        queue_wait_schema: FeatureSchema,
        arrival_model: TreeEnsembleScorer,
        queue_model: TreeEnsembleScorer,
        wait_model: TreeEnsembleScorer,
    ) -> Self {
        Self {
            arrival_schema,
            queue_wait_schema,
            arrival_model,
            queue_model,
            wait_model,
        }
    }

    /// Load every artifact named in the configuration. Any missing or
    /// malformed artifact fails the whole load; a partially usable registry
    /// is never returned.
    pub fn load(config: &AppConfig) -> Result<Self, ModelRegistryError> {
        info!("Loading forecast model artifacts");

        let arrival_schema = FeatureSchema::from_file(&config.arrival_columns_path)?;
        let queue_wait_schema = FeatureSchema::from_file(&config.multi_columns_path)?;

        let arrival_model = TreeEnsembleScorer::from_file(
            "arrival_count",
            &config.arrival_model_path,
            arrival_schema.len(),
        )?;
        let queue_model = TreeEnsembleScorer::from_file(
            "queue_size",
            &config.queue_model_path,
            queue_wait_schema.len(),
        )?;
        let wait_model = TreeEnsembleScorer::from_file(
            "wait_time",
            &config.wait_model_path,
            queue_wait_schema.len(),
        )?;

        info!(
            "Loaded 3 scorers ({} arrival features, {} queue/wait features)",
            arrival_schema.len(),
            queue_wait_schema.len()
        );

        Ok(Self::new(
            arrival_schema,
            queue_wait_schema,
            arrival_model,
            queue_model,
            wait_model,
        ))
    }
}
