use crate::modules::occurrences::core::document::OccurrenceDocument;
use crate::modules::occurrences::use_cases::add_occurrence::command::AddOccurrence;
use crate::modules::occurrences::use_cases::add_occurrence::decision::{DecideError, Decision};

pub fn decide_add(document: OccurrenceDocument, command: AddOccurrence) -> Decision {
    let mut document = document;
    if document.insert_new(command.key, command.description) {
        Decision::Accepted { document }
    } else {
        Decision::Rejected {
            reason: DecideError::AlreadyExists,
        }
    }
}
