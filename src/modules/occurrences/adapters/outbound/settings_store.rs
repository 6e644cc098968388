use crate::modules::occurrences::core::command_catalog::CommandCatalog;
use crate::modules::occurrences::core::password::PasswordConfig;
use crate::shared::infrastructure::json_file::JsonFileError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsStoreError {
    #[error("corrupt settings: {0}")]
    Corrupt(String),

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<JsonFileError> for SettingsStoreError {
    fn from(err: JsonFileError) -> Self {
        match err {
            JsonFileError::Corrupt { .. } => Self::Corrupt(err.to_string()),
            other => Self::Backend(other.to_string()),
        }
    }
}

/// Read-only shared settings: the write password and the command catalog.
/// Both are re-read on every call so edits on disk apply without a restart.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn password_config(&self) -> Result<PasswordConfig, SettingsStoreError>;
    async fn command_catalog(&self) -> Result<CommandCatalog, SettingsStoreError>;
}
