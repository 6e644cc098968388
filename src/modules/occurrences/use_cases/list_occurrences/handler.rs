use crate::modules::occurrences::adapters::outbound::occurrence_store::OccurrenceStore;
use crate::modules::occurrences::core::document::OccurrenceDocument;
use crate::modules::occurrences::use_cases::application_error::{ApplicationError, required};
use std::sync::Arc;

pub struct ListOccurrencesHandler {
    store: Arc<dyn OccurrenceStore>,
}

impl ListOccurrencesHandler {
    pub fn new(store: Arc<dyn OccurrenceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        bank_id: Option<String>,
    ) -> Result<OccurrenceDocument, ApplicationError> {
        let bank_id = required(bank_id, "banco")?;
        Ok(self.store.load(&bank_id).await?)
    }
}
