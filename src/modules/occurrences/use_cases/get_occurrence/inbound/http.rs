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

const MISSING_PARAMS: &str = "Banco e chave são obrigatórios para consulta.";
const NOT_FOUND: &str = "Ocorrência não encontrada.";
const INTERNAL: &str = "Erro interno ao consultar a ocorrência.";

#[derive(Debug, Deserialize)]
pub struct GetOccurrenceParams {
    pub banco: Option<String>,
    pub chave: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<GetOccurrenceParams>, QueryRejection>,
) -> impl IntoResponse {
    let Ok(Query(params)) = params.inspect_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "lookup rejected: unreadable query");
    }) else {
        return JsonError::new(StatusCode::BAD_REQUEST, MISSING_PARAMS).into_response();
    };
    tracing::debug!(banco = ?params.banco, chave = ?params.chave, "lookup requested");

    match state
        .get_occurrence
        .handle(params.banco, params.chave)
        .await
    {
        Ok(view) => Json(view).into_response(),
        Err(ApplicationError::MissingField(field)) => {
            tracing::warn!(field, "lookup rejected: missing parameter");
            JsonError::new(StatusCode::BAD_REQUEST, MISSING_PARAMS).into_response()
        }
        Err(ApplicationError::NotFound { bank_id, key }) => {
            tracing::warn!(bank_id = %bank_id, key = %key, "occurrence not found");
            JsonError::new(StatusCode::NOT_FOUND, NOT_FOUND).into_response()
        }
        Err(ApplicationError::InvalidBank(bank_id)) => invalid_bank(&bank_id).into_response(),
        Err(e) => internal(&e, INTERNAL).into_response(),
    }
}
