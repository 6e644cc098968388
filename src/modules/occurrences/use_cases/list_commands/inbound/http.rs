use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::occurrences::adapters::inbound::http_errors::internal;
use crate::shell::state::AppState;

const INTERNAL: &str = "Erro ao carregar comandos bancários.";

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_commands.handle().await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => internal(&e, INTERNAL).into_response(),
    }
}
