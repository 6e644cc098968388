// In memory implementation of the OccurrenceStore port.
//
// Supports handler tests and local runs without touching the filesystem.
// `toggle_offline` makes every call fail, `set_delay_save_ms` widens the gap
// between load and save so concurrent writers can overlap.

use crate::modules::occurrences::adapters::outbound::occurrence_store::{
    OccurrenceStore, OccurrenceStoreError,
};
use crate::modules::occurrences::core::document::OccurrenceDocument;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryOccurrenceStore {
    documents: RwLock<HashMap<String, OccurrenceDocument>>,
    offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryOccurrenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }

    /// The stored document, or `None` when the bank was never touched.
    pub async fn snapshot(&self, bank_id: &str) -> Option<OccurrenceDocument> {
        self.documents.read().await.get(bank_id).cloned()
    }

    fn ensure_online(&self) -> Result<(), OccurrenceStoreError> {
        if self.offline {
            return Err(OccurrenceStoreError::Backend(
                "Occurrence store offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl OccurrenceStore for InMemoryOccurrenceStore {
    async fn load(&self, bank_id: &str) -> Result<OccurrenceDocument, OccurrenceStoreError> {
        self.ensure_online()?;
        let mut guard = self.documents.write().await;
        Ok(guard.entry(bank_id.to_string()).or_default().clone())
    }

    async fn save(
        &self,
        bank_id: &str,
        document: &OccurrenceDocument,
    ) -> Result<(), OccurrenceStoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.documents
            .write()
            .await
            .insert(bank_id.to_string(), document.clone());
        Ok(())
    }
}
