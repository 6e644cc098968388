use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Map, Value};

use crate::modules::occurrences::adapters::inbound::http_errors::{internal, invalid_bank};
use crate::modules::occurrences::use_cases::add_occurrence::command::AddOccurrenceRequest;
use crate::modules::occurrences::use_cases::application_error::ApplicationError;
use crate::shared::http::json_error::{JsonError, JsonMessage};
use crate::shell::state::AppState;

const ADDED: &str = "Ocorrência adicionada com sucesso!";
const INVALID_PASSWORD: &str = "Senha inválida!";
const MISSING_FIELDS: &str = "Banco, chave e descrição são obrigatórios.";
const ALREADY_EXISTS: &str = "Ocorrência já existe!";
const INTERNAL: &str = "Erro interno ao adicionar a ocorrência.";

/// Loose view of the posted object. Field types are not enforced here so the
/// password check always runs before any shape problem is reported.
pub struct AddOccurrenceBody(Map<String, Value>);

impl AddOccurrenceBody {
    /// A body that cannot be read as a JSON object carries no fields at all.
    pub fn from_extracted(body: Result<Json<Value>, JsonRejection>) -> Self {
        match body {
            Ok(Json(Value::Object(fields))) => Self(fields),
            Ok(Json(other)) => {
                tracing::debug!(kind = json_kind(&other), "add body is not an object");
                Self(Map::new())
            }
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "unreadable add body");
                Self(Map::new())
            }
        }
    }

    /// Strings as-is, numbers in their JSON spelling, anything else absent.
    fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn password(&self) -> Option<String> {
        match self.0.get("senha")? {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl From<AddOccurrenceBody> for AddOccurrenceRequest {
    fn from(body: AddOccurrenceBody) -> Self {
        Self {
            bank_id: body.text("banco"),
            key: body.text("chave"),
            description: body.text("descricao"),
            password: body.password(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let request: AddOccurrenceRequest = AddOccurrenceBody::from_extracted(body).into();

    match state.add_occurrence.handle(request).await {
        Ok(()) => (StatusCode::OK, Json(JsonMessage { message: ADDED })).into_response(),
        Err(ApplicationError::Forbidden) => {
            tracing::warn!("add rejected: invalid password");
            JsonError::new(StatusCode::FORBIDDEN, INVALID_PASSWORD).into_response()
        }
        Err(ApplicationError::MissingField(field)) => {
            tracing::warn!(field, "add rejected: missing field");
            JsonError::new(StatusCode::BAD_REQUEST, MISSING_FIELDS).into_response()
        }
        Err(ApplicationError::Conflict(reason)) => {
            tracing::warn!(reason = %reason, "add rejected: occurrence exists");
            JsonError::new(StatusCode::BAD_REQUEST, ALREADY_EXISTS).into_response()
        }
        Err(ApplicationError::InvalidBank(bank_id)) => invalid_bank(&bank_id).into_response(),
        Err(e) => internal(&e, INTERNAL).into_response(),
    }
}
