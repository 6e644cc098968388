use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::occurrences::use_cases::add_occurrence::inbound::http as add_http;
use crate::modules::occurrences::use_cases::get_occurrence::inbound::http as get_http;
use crate::modules::occurrences::use_cases::list_commands::inbound::http as commands_http;
use crate::modules::occurrences::use_cases::list_occurrences::inbound::http as list_http;
use crate::shell::cors::{AllowedOrigins, reject_unknown_origins};
use crate::shell::state::AppState;

pub fn router(state: AppState, origins: AllowedOrigins) -> Router {
    Router::new()
        .route("/adicionar-ocorrencia", post(add_http::handle))
        .route("/consultar-ocorrencia", get(get_http::handle))
        .route("/comandos", get(commands_http::handle))
        .route("/todas-ocorrencias", get(list_http::handle))
        .with_state(state)
        .layer(origins.cors_layer())
        .layer(middleware::from_fn_with_state(origins, reject_unknown_origins))
        .layer(TraceLayer::new_for_http())
}
