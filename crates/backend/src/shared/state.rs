use std::sync::Arc;

use crate::shared::config::Config;
use crate::shared::gateway::SheetGateway;

/// Built once in `main` and cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn SheetGateway>,
}

impl AppState {
    pub fn new(config: Config, gateway: Arc<dyn SheetGateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }

    pub fn gateway(&self) -> &dyn SheetGateway {
        self.gateway.as_ref()
    }

    pub fn sheets(&self) -> &crate::shared::config::SheetsConfig {
        &self.config.sheets
    }
}
