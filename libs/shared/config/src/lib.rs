use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub arrival_model_path: String,
    pub queue_model_path: String,
    pub wait_model_path: String,
    pub arrival_columns_path: String,
    pub multi_columns_path: String,
    pub holiday_data_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| {
                    warn!("BIND_ADDRESS not set, using default");
                    "0.0.0.0:3000".to_string()
                }),
            arrival_model_path: env::var("ARRIVAL_MODEL_PATH")
                .unwrap_or_else(|_| {
                    warn!("ARRIVAL_MODEL_PATH not set, using default");
                    "models/arrival_count.json".to_string()
                }),
            queue_model_path: env::var("QUEUE_MODEL_PATH")
                .unwrap_or_else(|_| {
                    warn!("QUEUE_MODEL_PATH not set, using default");
                    "models/queue_30min.json".to_string()
                }),
            wait_model_path: env::var("WAIT_MODEL_PATH")
                .unwrap_or_else(|_| {
                    warn!("WAIT_MODEL_PATH not set, using default");
                    "models/wait_time_30min.json".to_string()
                }),
            arrival_columns_path: env::var("ARRIVAL_COLUMNS_PATH")
                .unwrap_or_else(|_| {
                    warn!("ARRIVAL_COLUMNS_PATH not set, using default");
                    "models/columns_arrival.json".to_string()
                }),
            multi_columns_path: env::var("MULTI_COLUMNS_PATH")
                .unwrap_or_else(|_| {
                    warn!("MULTI_COLUMNS_PATH not set, using default");
                    "models/columns_multi.json".to_string()
                }),
            holiday_data_path: env::var("HOLIDAY_DATA_PATH")
                .unwrap_or_else(|_| {
                    warn!("HOLIDAY_DATA_PATH not set, using default");
                    "data/holidays.json".to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.arrival_model_path.is_empty()
            && !self.queue_model_path.is_empty()
            && !self.wait_model_path.is_empty()
            && !self.arrival_columns_path.is_empty()
            && !self.multi_columns_path.is_empty()
    }
}
