use crate::modules::occurrences::adapters::outbound::settings_store::{
    SettingsStore, SettingsStoreError,
};
use crate::modules::occurrences::core::command_catalog::CommandCatalog;
use crate::modules::occurrences::core::password::PasswordConfig;
use crate::shared::infrastructure::json_file::load_or_init;
use async_trait::async_trait;
use std::path::PathBuf;

pub const PASSWORD_FILE: &str = "senhaConfig.json";
pub const COMMANDS_FILE: &str = "comandos.json";

pub struct JsonFileSettingsStore {
    data_dir: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn password_config(&self) -> Result<PasswordConfig, SettingsStoreError> {
        let config: PasswordConfig = load_or_init(&self.data_dir.join(PASSWORD_FILE)).await?;
        Ok(config)
    }

    async fn command_catalog(&self) -> Result<CommandCatalog, SettingsStoreError> {
        let catalog: CommandCatalog = load_or_init(&self.data_dir.join(COMMANDS_FILE)).await?;
        Ok(catalog)
    }
}
