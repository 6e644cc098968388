use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::occurrences::adapters::inbound::http_errors::{internal, invalid_bank};
use crate::modules::occurrences::use_cases::application_error::ApplicationError;
use crate::shared::http::json_error::JsonError;
use crate::shell::state::AppState;

const MISSING_BANK: &str = "Banco é obrigatório.";
const INTERNAL: &str = "Erro ao carregar ocorrências.";

#[derive(Debug, Deserialize)]
pub struct ListOccurrencesParams {
    pub banco: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListOccurrencesParams>, QueryRejection>,
) -> impl IntoResponse {
    let Ok(Query(params)) = params.inspect_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "listing rejected: unreadable query");
    }) else {
        return JsonError::new(StatusCode::BAD_REQUEST, MISSING_BANK).into_response();
    };
    match state.list_occurrences.handle(params.banco).await {
        Ok(document) => Json(document).into_response(),
        Err(ApplicationError::MissingField(_)) => {
            JsonError::new(StatusCode::BAD_REQUEST, MISSING_BANK).into_response()
        }
        Err(ApplicationError::InvalidBank(bank_id)) => invalid_bank(&bank_id).into_response(),
        Err(e) => internal(&e, INTERNAL).into_response(),
    }
}
