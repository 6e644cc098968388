use crate::modules::occurrences::adapters::outbound::settings_store::SettingsStore;
use crate::modules::occurrences::use_cases::application_error::ApplicationError;
use serde_json::Value;
use std::sync::Arc;

pub struct ListCommandsHandler {
    settings: Arc<dyn SettingsStore>,
}

impl ListCommandsHandler {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    pub async fn handle(&self) -> Result<Vec<Value>, ApplicationError> {
        let catalog = self.settings.command_catalog().await?;
        Ok(catalog.into_entries())
    }
}
