use axum::http::StatusCode;

use crate::modules::occurrences::use_cases::application_error::ApplicationError;
use crate::shared::http::json_error::JsonError;

pub const INVALID_BANK: &str = "Banco inválido.";

/// Logs the failure and hides it behind the operation's generic message.
pub fn internal(err: &ApplicationError, message: &'static str) -> JsonError {
    tracing::error!(error = %err, "{message}");
    JsonError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
}

pub fn invalid_bank(bank_id: &str) -> JsonError {
    tracing::warn!(bank_id, "rejected bank id");
    JsonError::new(StatusCode::BAD_REQUEST, INVALID_BANK)
}
