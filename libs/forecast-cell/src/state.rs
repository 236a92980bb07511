use model_registry_cell::ModelRegistry;
use shared_config::AppConfig;

use crate::services::calendar::HolidayCalendar;

/// Shared application state: everything loaded once at startup and read-only
/// while serving requests.
pub struct AppState {
    pub config: AppConfig,
    pub registry: ModelRegistry,
    pub calendar: HolidayCalendar,
}
