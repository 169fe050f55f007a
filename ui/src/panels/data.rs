//=============================================================================
// File: src/panels/data.rs
//=============================================================================
use crate::components::empty_state::EmptyState;
use crate::components::pico::{Button, SectionCard};
use crate::components::status_text::StatusText;
use crate::dashboard_state::{DashboardState, NO_TABLES};
use crate::hooks::use_table_service::use_table_service;
use dioxus::prelude::*;

/// CSV upload and active-table selection.
#[component]
pub fn DataPanel() -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let service = use_table_service(state);

    let s = state.read();
    let tables = s.tables.clone();
    let selected = s.selected_table.clone().unwrap_or_default();
    let table_status = s.table_status.clone();
    let uploaded_file = s.uploaded_file.clone();
    let upload_status = s.upload_status.clone();
    let uploading = upload_status.as_ref().is_some_and(|st| st.kind.is_pending());
    drop(s);

    rsx! {
        SectionCard {
            icon: "📂",
            title: "Your data".to_string(),
            div {
                style: "display: flex; flex-direction: column; gap: 0.5rem;",
                Button {
                    disabled: uploading,
                    on_click: move |_| service.upload(),
                    "Upload CSV file"
                }
                if let Some(name) = uploaded_file {
                    small { "File: {name}" }
                }
                StatusText { status: upload_status }
                small {
                    style: "color: var(--pico-muted-color);",
                    "Upload a .csv file to analyse it with the assistant."
                }
            }
            hr {}
            label {
                "Active table"
                if tables.is_empty() {
                    EmptyState {
                        title: NO_TABLES.to_string(),
                        icon: "🗂️",
                    }
                } else {
                    select {
                        value: "{selected}",
                        onchange: move |evt| service.select(evt.value()),
                        for table in tables {
                            option {
                                key: "{table}",
                                value: "{table}",
                                selected: table == selected,
                                "{table}"
                            }
                        }
                    }
                }
            }
            StatusText { status: table_status }
        }
    }
}
