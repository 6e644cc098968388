use crate::modules::occurrences::adapters::outbound::occurrence_store::OccurrenceStore;
use crate::modules::occurrences::use_cases::application_error::{ApplicationError, required};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccurrenceView {
    #[serde(rename = "chave")]
    pub key: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

pub struct GetOccurrenceHandler {
    store: Arc<dyn OccurrenceStore>,
}

impl GetOccurrenceHandler {
    pub fn new(store: Arc<dyn OccurrenceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        bank_id: Option<String>,
        key: Option<String>,
    ) -> Result<OccurrenceView, ApplicationError> {
        let bank_id = required(bank_id, "banco")?;
        let key = required(key, "chave")?;

        let document = self.store.load(&bank_id).await?;
        tracing::debug!(bank_id = %bank_id, entries = document.len(), "document loaded");

        match document.get(&key) {
            Some(description) => Ok(OccurrenceView {
                description: description.to_string(),
                key,
            }),
            None => Err(ApplicationError::NotFound { bank_id, key }),
        }
    }
}
