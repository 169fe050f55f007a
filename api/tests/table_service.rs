use api::tables::{
    refresh_tables, upload_and_refresh, CsvFile, TableBackend, TableServiceClient, CSV_GUIDANCE,
    UPLOADED_TABLE,
};
use api::ApiError;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn csv(content_type: &str) -> CsvFile {
    CsvFile {
        name: "payments.csv".to_string(),
        content_type: content_type.to_string(),
        bytes: b"date,amount\n2025-01-01,100\n".to_vec(),
    }
}

async fn mock_tables(server: &MockServer, tables: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/api/tables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tables": tables })))
        .mount(server)
        .await;
}

async fn mock_select(server: &MockServer, table: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/select-table"))
        .and(body_json(json!({ "table": table })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_then_select_first_exactly_once() {
    let server = MockServer::start().await;
    mock_tables(&server, &["sales", "costs"]).await;
    mock_select(&server, "sales", 1).await;
    let client = TableServiceClient::new(server.uri());

    let refresh = refresh_tables(&client, None).await.unwrap();

    assert_eq!(refresh.tables, vec!["sales", "costs"]);
    assert_eq!(refresh.selected.as_deref(), Some("sales"));
    assert!(refresh.selection.unwrap().is_ok());
    // `expect(1)` is verified when the server drops.
}

#[tokio::test]
async fn test_empty_list_selects_nothing() {
    let server = MockServer::start().await;
    mock_tables(&server, &[]).await;
    Mock::given(method("POST"))
        .and(path("/api/select-table"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = TableServiceClient::new(server.uri());

    let refresh = refresh_tables(&client, None).await.unwrap();

    assert!(refresh.tables.is_empty());
    assert!(refresh.selected.is_none());
    assert!(refresh.selection.is_none());
}

#[tokio::test]
async fn test_list_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tables"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "database offline" })))
        .mount(&server)
        .await;
    let client = TableServiceClient::new(server.uri());

    let err = refresh_tables(&client, None).await.unwrap_err();

    assert!(matches!(err, ApiError::Backend { status: 500, .. }));
    assert_eq!(err.user_message(), "database offline");
}

#[tokio::test]
async fn test_select_rejection_surfaces_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/select-table"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Table not found" })))
        .mount(&server)
        .await;
    let client = TableServiceClient::new(format!("{}/", server.uri()));

    let err = client.select_table("ghost").await.unwrap_err();

    assert_eq!(err.user_message(), "Table not found");
}

#[tokio::test]
async fn test_select_rejection_without_body_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/select-table"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;
    let client = TableServiceClient::new(server.uri());

    let err = client.select_table("sales").await.unwrap_err();

    assert_eq!(err.user_message(), "Bad Request");
}

#[tokio::test]
async fn test_non_csv_upload_never_reaches_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = TableServiceClient::new(server.uri());

    let err = client.upload_csv(&csv("application/json")).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput(_)));
    assert_eq!(err.user_message(), CSV_GUIDANCE);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_prefers_uploaded_table() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-csv"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("2025-01-01,100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Stored 1 rows" })))
        .expect(1)
        .mount(&server)
        .await;
    mock_tables(&server, &["sales", UPLOADED_TABLE]).await;
    mock_select(&server, UPLOADED_TABLE, 1).await;
    let client = TableServiceClient::new(server.uri());

    let (message, refresh) = upload_and_refresh(&client, &csv("text/csv")).await.unwrap();

    assert_eq!(message, "Stored 1 rows");
    let refresh = refresh.unwrap();
    assert_eq!(refresh.selected.as_deref(), Some(UPLOADED_TABLE));
}

#[tokio::test]
async fn test_upload_falls_back_to_first_table() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-csv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "done" })))
        .mount(&server)
        .await;
    mock_tables(&server, &["sales", "costs"]).await;
    mock_select(&server, "sales", 1).await;
    let client = TableServiceClient::new(server.uri());

    let (_, refresh) = upload_and_refresh(&client, &csv("text/csv")).await.unwrap();

    assert_eq!(refresh.unwrap().selected.as_deref(), Some("sales"));
}

#[tokio::test]
async fn test_upload_failure_surfaces_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-csv"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "error": "CSV has no header row" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tables"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = TableServiceClient::new(server.uri());

    let err = upload_and_refresh(&client, &csv("text/csv")).await.unwrap_err();

    assert_eq!(err.user_message(), "CSV has no header row");
}
