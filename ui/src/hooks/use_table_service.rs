use crate::compat;
use crate::dashboard_state::DashboardState;
use api::config::DashboardConfig;
use api::tables::refresh_tables;
use api::tables::upload_and_refresh;
use api::tables::TableBackend;
use api::tables::TableServiceClient;
use dioxus::prelude::*;
use dioxus_logger::tracing;

/// User-triggered table operations. Each one runs as a task of the
/// component that created the handle and writes its outcome into the
/// dashboard state.
#[derive(Clone, Copy)]
pub struct TableService {
    state: Signal<DashboardState>,
    client: CopyValue<TableServiceClient>,
}

impl TableService {
    /// Lists tables, auto-selects the first and tells the backend.
    pub fn reload(&self) {
        let mut state = self.state;
        let client = self.client.cloned();
        spawn(async move {
            state.write().begin_table_load();
            let result = refresh_tables(&client, None).await;
            state.write().finish_table_load(result);
        });
    }

    /// Makes `table` the active table.
    pub fn select(&self, table: String) {
        let mut state = self.state;
        let client = self.client.cloned();
        spawn(async move {
            state.write().begin_selection(&table);
            let result = client.select_table(&table).await;
            if let Err(e) = &result {
                tracing::warn!("selecting {} failed: {}", table, e);
            }
            state.write().finish_selection(&table, result);
        });
    }

    /// Asks for a CSV file and uploads it.
    pub fn upload(&self) {
        let mut state = self.state;
        let client = self.client.cloned();
        spawn(async move {
            let file = match compat::pick_file("csv").await {
                Ok(Some(file)) => file,
                Ok(None) => return,
                Err(e) => {
                    state.write().upload_unreadable(&e);
                    return;
                }
            };
            state.write().begin_upload(&file.name);
            let result = upload_and_refresh(&client, &file).await;
            state.write().finish_upload(result);
        });
    }
}

/// Creates the table service handle and loads the table list on mount.
pub fn use_table_service(state: Signal<DashboardState>) -> TableService {
    let config = use_context::<DashboardConfig>();
    let client = use_hook(|| CopyValue::new(TableServiceClient::new(config.backend_url.clone())));
    let service = TableService { state, client };

    use_effect(move || service.reload());

    service
}
