use crate::modules::occurrences::adapters::outbound::occurrence_store::{
    OccurrenceStore, OccurrenceStoreError,
};
use crate::modules::occurrences::core::document::OccurrenceDocument;
use crate::shared::infrastructure::json_file::{load_or_init, save_pretty};
use async_trait::async_trait;
use std::path::PathBuf;

pub const BANK_FILE_PREFIX: &str = "ocorrencias";

/// Keeps each bank in `<data_dir>/ocorrencias<bank_id>.json`.
pub struct JsonFileOccurrenceStore {
    data_dir: PathBuf,
}

impl JsonFileOccurrenceStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn bank_file_path(&self, bank_id: &str) -> Result<PathBuf, OccurrenceStoreError> {
        if bank_id.is_empty() || bank_id.contains(['/', '\\', '\0']) {
            return Err(OccurrenceStoreError::InvalidBankId(bank_id.to_string()));
        }
        Ok(self
            .data_dir
            .join(format!("{BANK_FILE_PREFIX}{bank_id}.json")))
    }
}

#[async_trait]
impl OccurrenceStore for JsonFileOccurrenceStore {
    async fn load(&self, bank_id: &str) -> Result<OccurrenceDocument, OccurrenceStoreError> {
        let path = self.bank_file_path(bank_id)?;
        tracing::debug!(bank_id, path = %path.display(), "loading occurrence document");
        load_or_init(&path)
            .await
            .map_err(|e| OccurrenceStoreError::from_json_file(bank_id, e))
    }

    async fn save(
        &self,
        bank_id: &str,
        document: &OccurrenceDocument,
    ) -> Result<(), OccurrenceStoreError> {
        let path = self.bank_file_path(bank_id)?;
        save_pretty(&path, document)
            .await
            .map_err(|e| OccurrenceStoreError::from_json_file(bank_id, e))
    }
}
