use crate::modules::occurrences::core::document::OccurrenceDocument;
use crate::shared::infrastructure::json_file::JsonFileError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OccurrenceStoreError {
    #[error("invalid bank id: {0:?}")]
    InvalidBankId(String),

    #[error("corrupt document for bank {bank_id}: {reason}")]
    Corrupt { bank_id: String, reason: String },

    #[error("backend error: {0}")]
    Backend(String),
}

impl OccurrenceStoreError {
    pub fn from_json_file(bank_id: &str, err: JsonFileError) -> Self {
        match err {
            JsonFileError::Corrupt { .. } => Self::Corrupt {
                bank_id: bank_id.to_string(),
                reason: err.to_string(),
            },
            other => Self::Backend(other.to_string()),
        }
    }
}

/// Persistence of one document per bank.
///
/// `load` of a bank that was never written creates it empty, so a later
/// listing sees the bank with no entries. `save` replaces the whole document.
#[async_trait]
pub trait OccurrenceStore: Send + Sync {
    async fn load(&self, bank_id: &str) -> Result<OccurrenceDocument, OccurrenceStoreError>;
    async fn save(
        &self,
        bank_id: &str,
        document: &OccurrenceDocument,
    ) -> Result<(), OccurrenceStoreError>;
}
