//! The dashboard's view state and its transitions.
//!
//! The whole page renders from one `DashboardState` held in a `Signal`. Async
//! work never mutates fields directly: it calls one transition per event
//! (fetch started, fetch finished, selection changed, ...) so every state the
//! view can be in is reachable only through these methods.

use api::currency::Currency;
use api::keywords::Keyword;
use api::rate_map::RateMap;
use api::tables::TableRefresh;
use api::tables::CSV_GUIDANCE;
use api::ApiError;
use chrono::DateTime;
use chrono::Local;
use dioxus_logger::tracing;

#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum StatusKind {
    Pending,
    Info,
    Success,
    Error,
}

/// User-facing outcome of the last operation of one kind. Replaced, never appended.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn pending(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Pending,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Identifies one rate fetch. Only the most recent ticket may store results.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FetchTicket(u64);

/// A short-lived acknowledgement shown in the corner of the page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

pub const NO_TABLES: &str = "No tables available";

#[derive(Clone, PartialEq, Debug)]
pub struct DashboardState {
    pub base: Currency,
    pub auto_refresh: bool,

    pub rates: Option<RateMap>,
    pub rates_loading: bool,
    pub rates_error: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
    current_fetch: u64,

    pub tables: Vec<String>,
    pub selected_table: Option<String>,
    pub table_status: Option<StatusLine>,

    pub uploaded_file: Option<String>,
    pub upload_status: Option<StatusLine>,

    pub toast: Option<Toast>,
    next_toast: u64,
}

impl DashboardState {
    pub fn new(base: Currency, auto_refresh: bool) -> Self {
        Self {
            base,
            auto_refresh,
            rates: None,
            rates_loading: true,
            rates_error: None,
            last_updated: None,
            current_fetch: 0,
            tables: Vec::new(),
            selected_table: None,
            table_status: None,
            uploaded_file: None,
            upload_status: None,
            toast: None,
            next_toast: 0,
        }
    }

    // --- Rates ---

    pub fn set_base(&mut self, base: Currency) {
        self.base = base;
    }

    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
    }

    /// Marks a fetch as in flight and invalidates every earlier ticket.
    pub fn begin_rate_fetch(&mut self) -> FetchTicket {
        self.current_fetch += 1;
        self.rates_loading = true;
        self.rates_error = None;
        FetchTicket(self.current_fetch)
    }

    /// Stores a fetch result. Returns `false` if the result was discarded.
    ///
    /// A failure keeps the previous rates.
    pub fn finish_rate_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<RateMap, ApiError>,
        now: DateTime<Local>,
    ) -> bool {
        if ticket.0 != self.current_fetch {
            tracing::debug!("discarding stale rate fetch {:?}", ticket);
            return false;
        }
        self.rates_loading = false;

        match result {
            Ok(map) if map.base() != self.base => {
                tracing::debug!("discarding rates for old base {}", map.base());
                return false;
            }
            Ok(map) => {
                self.rates = Some(map);
                self.rates_error = None;
                self.last_updated = Some(now);
            }
            Err(e) => {
                tracing::warn!("rate fetch failed: {}", e);
                self.rates_error = Some(rate_error_message(&e));
            }
        }
        true
    }

    /// Units of the base currency per one unit of `currency`.
    pub fn display_rate(&self, currency: Currency) -> Option<f64> {
        if currency == self.base {
            return Some(1.0);
        }
        self.rates
            .as_ref()
            .filter(|map| map.base() == self.base)
            .and_then(|map| map.display_rate_for(currency))
    }

    pub fn relative_max(&self) -> f64 {
        self.rates
            .as_ref()
            .filter(|map| map.base() == self.base)
            .map(RateMap::relative_max)
            .unwrap_or(1.0)
    }

    // --- Tables ---

    pub fn begin_table_load(&mut self) {
        self.table_status = Some(StatusLine::pending("Loading tables..."));
    }

    /// Applies the outcome of a list-and-select cycle.
    ///
    /// A failed listing empties the selector.
    pub fn finish_table_load(&mut self, result: Result<TableRefresh, ApiError>) {
        match result {
            Ok(refresh) => {
                self.tables = refresh.tables;
                self.selected_table = refresh.selected;
                self.table_status = Some(match refresh.selection {
                    Some(Ok(message)) => StatusLine::success(message),
                    Some(Err(e)) => {
                        StatusLine::error(format!("Could not select table: {}", e.user_message()))
                    }
                    None => StatusLine::info(NO_TABLES),
                });
            }
            Err(e) => {
                tracing::warn!("table list failed: {}", e);
                self.tables.clear();
                self.selected_table = None;
                self.table_status = Some(StatusLine::error(format!(
                    "Could not load tables: {}",
                    e.user_message()
                )));
            }
        }
    }

    /// The user picked a table; the selection shows immediately.
    pub fn begin_selection(&mut self, table: &str) {
        self.selected_table = Some(table.to_string());
        self.table_status = Some(StatusLine::pending(format!("Selecting \"{table}\"...")));
    }

    /// Ignored when the user has picked another table in the meantime.
    pub fn finish_selection(&mut self, table: &str, result: Result<String, ApiError>) {
        if self.selected_table.as_deref() != Some(table) {
            return;
        }
        self.table_status = Some(match result {
            Ok(message) => StatusLine::success(message),
            Err(e) => StatusLine::error(e.user_message()),
        });
    }

    // --- Upload ---

    pub fn begin_upload(&mut self, file_name: &str) {
        self.uploaded_file = Some(file_name.to_string());
        self.upload_status = Some(StatusLine::pending("Uploading..."));
    }

    /// The file could not be read from disk or the browser.
    pub fn upload_unreadable(&mut self, reason: &str) {
        self.uploaded_file = None;
        self.upload_status = Some(StatusLine::error(format!("Could not read file: {reason}")));
    }

    pub fn finish_upload(
        &mut self,
        result: Result<(String, Result<TableRefresh, ApiError>), ApiError>,
    ) {
        match result {
            Ok((message, refresh)) => {
                self.upload_status = Some(StatusLine::success(message));
                self.finish_table_load(refresh);
            }
            Err(ApiError::InvalidInput(_)) => {
                self.uploaded_file = None;
                self.upload_status = Some(StatusLine::error(CSV_GUIDANCE));
            }
            Err(e) => {
                self.upload_status = Some(StatusLine::error(format!(
                    "Upload failed: {}",
                    e.user_message()
                )));
            }
        }
    }

    // --- Toast ---

    /// Shows `message`, replacing any visible toast. Returns its id.
    pub fn show_toast(&mut self, message: impl Into<String>) -> u64 {
        self.next_toast += 1;
        self.toast = Some(Toast {
            id: self.next_toast,
            message: message.into(),
        });
        self.next_toast
    }

    pub fn keyword_copied(&mut self, keyword: &Keyword) -> u64 {
        self.show_toast(format!("Keyword \"{}\" copied", keyword.phrase))
    }

    /// Hides toast `id` if it is still the visible one.
    pub fn dismiss_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }
}

fn rate_error_message(e: &ApiError) -> String {
    match e {
        ApiError::MalformedResponse(_) => e.user_message(),
        _ => "Could not fetch exchange rates".to_string(),
    }
}
