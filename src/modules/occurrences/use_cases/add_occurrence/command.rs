use crate::modules::occurrences::use_cases::application_error::{ApplicationError, required};

/// Raw add request as received, before any check.
#[derive(Debug, Clone, Default)]
pub struct AddOccurrenceRequest {
    pub bank_id: Option<String>,
    pub key: Option<String>,
    pub description: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOccurrence {
    pub bank_id: String,
    pub key: String,
    pub description: String,
}

impl TryFrom<AddOccurrenceRequest> for AddOccurrence {
    type Error = ApplicationError;

    fn try_from(request: AddOccurrenceRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            bank_id: required(request.bank_id, "banco")?,
            key: required(request.key, "chave")?,
            description: required(request.description, "descricao")?,
        })
    }
}
