use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use bank_occurrences::modules::occurrences::adapters::outbound::occurrence_store_json_file::JsonFileOccurrenceStore;
use bank_occurrences::modules::occurrences::adapters::outbound::settings_store_json_file::JsonFileSettingsStore;
use bank_occurrences::shell::config::AppConfig;
use bank_occurrences::shell::cors::AllowedOrigins;
use bank_occurrences::shell::http::router;
use bank_occurrences::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("cannot create data dir {}", config.data_dir.display()))?;

    let occurrences = Arc::new(JsonFileOccurrenceStore::new(&config.data_dir));
    let settings = Arc::new(JsonFileSettingsStore::new(&config.data_dir));
    let state = AppState::new(occurrences, settings);
    let origins = AllowedOrigins::parse(config.allowed_origins.as_slice())?;

    let app = router(state, origins);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, data_dir = %config.data_dir.display(), "occurrence service listening");
    axum::serve(listener, app).await?;
    Ok(())
}
