use crate::modules::occurrences::adapters::outbound::settings_store::{
    SettingsStore, SettingsStoreError,
};
use crate::modules::occurrences::core::command_catalog::CommandCatalog;
use crate::modules::occurrences::core::password::PasswordConfig;
use async_trait::async_trait;

#[derive(Default)]
pub struct InMemorySettingsStore {
    password: PasswordConfig,
    catalog: CommandCatalog,
    offline: bool,
}

impl InMemorySettingsStore {
    pub fn new(password: PasswordConfig, catalog: CommandCatalog) -> Self {
        Self {
            password,
            catalog,
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), SettingsStoreError> {
        if self.offline {
            return Err(SettingsStoreError::Backend("Settings store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn password_config(&self) -> Result<PasswordConfig, SettingsStoreError> {
        self.ensure_online()?;
        Ok(self.password.clone())
    }

    async fn command_catalog(&self) -> Result<CommandCatalog, SettingsStoreError> {
        self.ensure_online()?;
        Ok(self.catalog.clone())
    }
}
