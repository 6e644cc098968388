use crate::modules::occurrences::adapters::outbound::occurrence_store::OccurrenceStore;
use crate::modules::occurrences::adapters::outbound::settings_store::SettingsStore;
use crate::modules::occurrences::use_cases::add_occurrence::handler::AddOccurrenceHandler;
use crate::modules::occurrences::use_cases::get_occurrence::handler::GetOccurrenceHandler;
use crate::modules::occurrences::use_cases::list_commands::handler::ListCommandsHandler;
use crate::modules::occurrences::use_cases::list_occurrences::handler::ListOccurrencesHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub add_occurrence: Arc<AddOccurrenceHandler>,
    pub get_occurrence: Arc<GetOccurrenceHandler>,
    pub list_occurrences: Arc<ListOccurrencesHandler>,
    pub list_commands: Arc<ListCommandsHandler>,
}

impl AppState {
    pub fn new(occurrences: Arc<dyn OccurrenceStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            add_occurrence: Arc::new(AddOccurrenceHandler::new(
                occurrences.clone(),
                settings.clone(),
            )),
            get_occurrence: Arc::new(GetOccurrenceHandler::new(occurrences.clone())),
            list_occurrences: Arc::new(ListOccurrencesHandler::new(occurrences)),
            list_commands: Arc::new(ListCommandsHandler::new(settings)),
        }
    }
}
