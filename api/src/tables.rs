//! Client for the backend's table-management endpoints.
//!
//! The backend keeps a set of named tables built from uploaded CSV files and
//! one "active" table that later analysis runs against.

use crate::error::ApiError;
use dioxus_logger::tracing;
use serde::Deserialize;
use serde::Serialize;

/// The table the backend creates from an uploaded CSV file.
pub const UPLOADED_TABLE: &str = "uploaded_csv_data";

/// The only MIME type accepted for upload.
pub const CSV_MIME: &str = "text/csv";

/// Shown when a file of any other type is chosen.
pub const CSV_GUIDANCE: &str = "Please upload a file in .csv format";

/// A file picked by the user, ready for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvFile {
    pub name: String,
    /// The type the browser or OS declared for the file.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CsvFile {
    pub fn is_csv(&self) -> bool {
        self.content_type.eq_ignore_ascii_case(CSV_MIME)
    }
}

#[derive(Deserialize, Debug)]
struct TablesResponse {
    tables: Option<Vec<String>>,
}

#[derive(Serialize, Debug)]
struct SelectTableRequest<'a> {
    table: &'a str,
}

#[derive(Deserialize, Debug, Default)]
struct MessageResponse {
    message: Option<String>,
}

/// Operations the dashboard needs from the table backend.
#[allow(async_fn_in_trait)]
pub trait TableBackend {
    /// Lists the available table names, in backend order.
    async fn list_tables(&self) -> Result<Vec<String>, ApiError>;

    /// Marks `table` as the active table. Returns a confirmation message.
    async fn select_table(&self, table: &str) -> Result<String, ApiError>;

    /// Uploads a CSV file. Returns the backend's success message.
    async fn upload_csv(&self, file: &CsvFile) -> Result<String, ApiError>;
}

/// `TableBackend` over HTTP.
#[derive(Clone, Debug)]
pub struct TableServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl TableServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl TableBackend for TableServiceClient {
    async fn list_tables(&self) -> Result<Vec<String>, ApiError> {
        let resp = self.client.get(self.url("/api/tables")).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }
        let body = resp.json::<TablesResponse>().await?;
        body.tables
            .ok_or_else(|| ApiError::MalformedResponse("No tables in response".to_string()))
    }

    async fn select_table(&self, table: &str) -> Result<String, ApiError> {
        let resp = self
            .client
            .post(self.url("/api/select-table"))
            .json(&SelectTableRequest { table })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }
        tracing::info!("backend accepted table {}", table);
        Ok(format!("Table \"{table}\" selected for analysis"))
    }

    async fn upload_csv(&self, file: &CsvFile) -> Result<String, ApiError> {
        // Rejected before any request is built.
        if !file.is_csv() {
            tracing::warn!(
                "refusing to upload {} with type {:?}",
                file.name,
                file.content_type
            );
            return Err(ApiError::InvalidInput(CSV_GUIDANCE.to_string()));
        }

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(CSV_MIME)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .client
            .post(self.url("/api/upload-csv"))
            .multipart(form)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }

        // A success without a JSON body still counts as success.
        let body = resp.json::<MessageResponse>().await.unwrap_or_default();
        Ok(body
            .message
            .unwrap_or_else(|| "File uploaded successfully".to_string()))
    }
}

/// Picks the table to activate after a (re)load.
///
/// `preferred` wins when the backend lists it; otherwise the first table.
pub fn choose_table<'a>(tables: &'a [String], preferred: Option<&str>) -> Option<&'a str> {
    preferred
        .and_then(|wanted| tables.iter().find(|t| t.as_str() == wanted))
        .or_else(|| tables.first())
        .map(String::as_str)
}

/// What a table reload produced.
#[derive(Debug)]
pub struct TableRefresh {
    pub tables: Vec<String>,
    /// The table chosen for activation, if the list was non-empty.
    pub selected: Option<String>,
    /// Outcome of the select call; `None` when nothing was selected.
    pub selection: Option<Result<String, ApiError>>,
}

/// Lists tables, chooses one and tells the backend about it.
///
/// The select call is issued at most once per refresh. A failed listing is
/// returned as-is and no selection is attempted.
pub async fn refresh_tables<B: TableBackend>(
    backend: &B,
    preferred: Option<&str>,
) -> Result<TableRefresh, ApiError> {
    let tables = backend.list_tables().await?;
    tracing::info!("backend lists {} tables", tables.len());

    let selected = choose_table(&tables, preferred).map(str::to_string);
    let selection = match &selected {
        Some(table) => Some(backend.select_table(table).await),
        None => None,
    };

    Ok(TableRefresh {
        tables,
        selected,
        selection,
    })
}

/// Uploads `file` and, on success, reloads the tables preferring the
/// uploaded-data table.
///
/// Returns the upload message together with the refresh outcome. The refresh
/// may fail independently of the upload.
pub async fn upload_and_refresh<B: TableBackend>(
    backend: &B,
    file: &CsvFile,
) -> Result<(String, Result<TableRefresh, ApiError>), ApiError> {
    let message = backend.upload_csv(file).await?;
    tracing::info!("uploaded {}: {}", file.name, message);
    let refresh = refresh_tables(backend, Some(UPLOADED_TABLE)).await;
    Ok((message, refresh))
}
