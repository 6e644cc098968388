use crate::modules::occurrences::core::document::OccurrenceDocument;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("occurrence already exists")]
    AlreadyExists,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { document: OccurrenceDocument },
    Rejected { reason: DecideError },
}
