use crate::modules::occurrences::adapters::outbound::occurrence_store::OccurrenceStoreError;
use crate::modules::occurrences::adapters::outbound::settings_store::SettingsStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("invalid password")]
    Forbidden,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid bank id: {0:?}")]
    InvalidBank(String),

    #[error("domain rejected: {0}")]
    Conflict(String),

    #[error("occurrence {key:?} not found for bank {bank_id:?}")]
    NotFound { bank_id: String, key: String },

    #[error(transparent)]
    Store(OccurrenceStoreError),

    #[error(transparent)]
    Settings(#[from] SettingsStoreError),
}

impl From<OccurrenceStoreError> for ApplicationError {
    fn from(err: OccurrenceStoreError) -> Self {
        match err {
            OccurrenceStoreError::InvalidBankId(bank_id) => Self::InvalidBank(bank_id),
            other => Self::Store(other),
        }
    }
}

/// Presence check shared by every operation: absent and empty are the same.
pub fn required(value: Option<String>, field: &'static str) -> Result<String, ApplicationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApplicationError::MissingField(field)),
    }
}
