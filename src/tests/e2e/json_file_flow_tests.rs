use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::rstest;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::occurrences::adapters::outbound::occurrence_store_json_file::JsonFileOccurrenceStore;
use crate::modules::occurrences::adapters::outbound::settings_store_json_file::{
    COMMANDS_FILE, JsonFileSettingsStore, PASSWORD_FILE,
};
use crate::shell::cors::AllowedOrigins;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::TempDataDir;

fn app_over(dir: &TempDataDir) -> Router {
    let state = AppState::new(
        Arc::new(JsonFileOccurrenceStore::new(dir.path())),
        Arc::new(JsonFileSettingsStore::new(dir.path())),
    );
    router(state, AllowedOrigins::parse::<&str>(&[]).unwrap())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn add(body: serde_json::Value) -> Request<Body> {
    Request::post("/adicionar-ocorrencia")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_persist_added_occurrences_as_pretty_json() {
    let dir = TempDataDir::new().await;
    dir.write(PASSWORD_FILE, r#"{"senhaPadrao":"s3nha"}"#).await;

    let (status, _) = send(
        app_over(&dir),
        add(serde_json::json!({"banco":"001","chave":"b","descricao":"dois","senha":"s3nha"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        app_over(&dir),
        add(serde_json::json!({"banco":"001","chave":"a","descricao":"um","senha":"s3nha"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        dir.read("ocorrencias001.json").await,
        "{\n  \"a\": \"um\",\n  \"b\": \"dois\"\n}"
    );
}

#[rstest]
#[tokio::test]
async fn it_should_reject_every_password_when_none_is_configured() {
    let dir = TempDataDir::new().await;

    let (status, _) = send(
        app_over(&dir),
        add(serde_json::json!({"banco":"001","chave":"a","descricao":"um"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(dir.read(PASSWORD_FILE).await, "{}");
    assert!(!dir.path().join("ocorrencias001.json").exists());
}

#[rstest]
#[tokio::test]
async fn it_should_create_the_bank_file_on_first_lookup() {
    let dir = TempDataDir::new().await;

    let (status, _) = send(
        app_over(&dir),
        Request::get("/consultar-ocorrencia?banco=novo&chave=1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(dir.read("ocorrenciasnovo.json").await, "{}");
}

#[rstest]
#[tokio::test]
async fn it_should_surface_a_corrupt_bank_file_as_internal_error() {
    let dir = TempDataDir::new().await;
    dir.write("ocorrenciasquebrado.json", "{\"1\": ").await;

    let (status, json) = send(
        app_over(&dir),
        Request::get("/todas-ocorrencias?banco=quebrado")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({"error": "Erro ao carregar ocorrências."}));
    assert_eq!(dir.read("ocorrenciasquebrado.json").await, "{\"1\": ");
}

#[rstest]
#[case(r#"[{"numero":"1","descricao":"Saque"},{"numero":"2","descricao":"Pix"},{"numero":"3","descricao":"TED"}]"#)]
#[case(r#"{"3":"TED","1":"Saque","2":"Pix"}"#)]
#[tokio::test]
async fn it_should_list_every_catalog_entry_from_disk(#[case] raw: &str) {
    let dir = TempDataDir::new().await;
    dir.write(COMMANDS_FILE, raw).await;

    let (status, json) = send(
        app_over(&dir),
        Request::get("/comandos").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([
            {"numero": "1", "descricao": "Saque"},
            {"numero": "2", "descricao": "Pix"},
            {"numero": "3", "descricao": "TED"},
        ])
    );
}

#[rstest]
#[tokio::test]
async fn it_should_report_a_corrupt_password_file_on_add() {
    let dir = TempDataDir::new().await;
    dir.write(PASSWORD_FILE, "{\"senhaPadrao\": ").await;

    let (status, json) = send(
        app_over(&dir),
        add(serde_json::json!({"banco":"001","chave":"a","descricao":"um","senha":"s3nha"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        serde_json::json!({"error": "Erro interno ao adicionar a ocorrência."})
    );
    assert!(!dir.path().join("ocorrencias001.json").exists());
}

#[rstest]
#[tokio::test]
async fn it_should_report_a_corrupt_bank_file_on_lookup() {
    let dir = TempDataDir::new().await;
    dir.write("ocorrenciasquebrado.json", "[1,").await;

    let (status, json) = send(
        app_over(&dir),
        Request::get("/consultar-ocorrencia?banco=quebrado&chave=1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        serde_json::json!({"error": "Erro interno ao consultar a ocorrência."})
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_keep_every_concurrent_add_on_one_bank_file() {
    let dir = TempDataDir::new().await;
    dir.write(PASSWORD_FILE, r#"{"senhaPadrao":"s3nha"}"#).await;
    let app = app_over(&dir);

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(send(
                app,
                add(serde_json::json!({
                    "banco": "001",
                    "chave": format!("k{i}"),
                    "descricao": format!("ocorrência {i}"),
                    "senha": "s3nha",
                })),
            ))
        })
        .collect();
    for task in tasks {
        let (status, _) = task.await.expect("task panicked");
        assert_eq!(status, StatusCode::OK);
    }

    let stored: serde_json::Value =
        serde_json::from_str(&dir.read("ocorrencias001.json").await).expect("file left corrupt");
    assert_eq!(stored.as_object().map(|o| o.len()), Some(16));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_not_lose_an_add_racing_the_first_lookup_of_a_bank() {
    let dir = TempDataDir::new().await;
    dir.write(PASSWORD_FILE, r#"{"senhaPadrao":"s3nha"}"#).await;
    let app = app_over(&dir);

    for round in 0..100 {
        let bank = format!("novo{round}");
        let lookup = tokio::spawn(send(
            app.clone(),
            Request::get(format!("/consultar-ocorrencia?banco={bank}&chave=k"))
                .body(Body::empty())
                .unwrap(),
        ));
        let write = tokio::spawn(send(
            app.clone(),
            add(serde_json::json!({
                "banco": bank,
                "chave": "k",
                "descricao": "uma descricao longa",
                "senha": "s3nha",
            })),
        ));
        lookup.await.expect("lookup panicked");
        let (status, _) = write.await.expect("add panicked");
        assert_eq!(status, StatusCode::OK, "round {round}");

        let (status, json) = send(
            app.clone(),
            Request::get(format!("/todas-ocorrencias?banco={bank}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "round {round}");
        assert_eq!(json, serde_json::json!({"k": "uma descricao longa"}), "round {round}");
    }
}
