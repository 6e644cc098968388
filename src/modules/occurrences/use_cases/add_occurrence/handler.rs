use crate::modules::occurrences::adapters::outbound::occurrence_store::OccurrenceStore;
use crate::modules::occurrences::adapters::outbound::settings_store::SettingsStore;
use crate::modules::occurrences::use_cases::add_occurrence::command::{
    AddOccurrence, AddOccurrenceRequest,
};
use crate::modules::occurrences::use_cases::add_occurrence::decide::decide_add;
use crate::modules::occurrences::use_cases::add_occurrence::decision::Decision;
use crate::modules::occurrences::use_cases::application_error::ApplicationError;
use crate::shared::infrastructure::bank_locks::BankLocks;
use std::sync::Arc;

pub struct AddOccurrenceHandler {
    store: Arc<dyn OccurrenceStore>,
    settings: Arc<dyn SettingsStore>,
    locks: BankLocks,
}

impl AddOccurrenceHandler {
    pub fn new(store: Arc<dyn OccurrenceStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            store,
            settings,
            locks: BankLocks::new(),
        }
    }

    /// Password first, then presence of fields, then the duplicate check.
    /// The load, decide and save steps run under the bank's lock.
    pub async fn handle(&self, request: AddOccurrenceRequest) -> Result<(), ApplicationError> {
        let password = self.settings.password_config().await?;
        if !password.accepts(request.password.as_deref()) {
            return Err(ApplicationError::Forbidden);
        }

        let command = AddOccurrence::try_from(request)?;
        let bank_id = command.bank_id.clone();

        let _guard = self.locks.lock(&bank_id).await;
        let document = self.store.load(&bank_id).await?;

        match decide_add(document, command) {
            Decision::Accepted { document } => {
                self.store.save(&bank_id, &document).await?;
                tracing::info!(bank_id = %bank_id, entries = document.len(), "occurrence added");
                Ok(())
            }
            Decision::Rejected { reason } => Err(ApplicationError::Conflict(reason.to_string())),
        }
    }
}
