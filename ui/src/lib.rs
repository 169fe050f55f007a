// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod dashboard_state;
pub mod hooks;
mod panels;

use api::config::DashboardConfig;
use components::pico::Container;
use components::toast::ToastView;
use dashboard_state::DashboardState;
use panels::chat::ChatPanel;
use panels::data::DataPanel;
use panels::keywords::KeywordsPanel;
use panels::rates::RatesPanel;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .dashboard-header {
        text-align: center;
        padding: 2rem 1rem 1rem 1rem;
    }
    .dashboard-header p { color: var(--pico-muted-color); max-width: 40rem; margin: 0 auto; }

    /* sidebar 2/5, chat 3/5 on wide screens; stacked otherwise */
    .dashboard-grid { grid-template-columns: 2fr 3fr; align-items: start; }
    @media (max-width: 1024px) {
        .dashboard-grid { grid-template-columns: 1fr; }
        .dashboard-chat { order: -1; }
    }

    .dashboard-footer {
        text-align: center;
        font-size: 0.875rem;
        color: var(--pico-muted-color);
        padding: 1.5rem 0;
        border-top: 1px solid var(--pico-muted-border-color);
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        Dashboard {
            config: DashboardConfig::from_env(),
        }
    }
}

/// Holds the dashboard state and lays out the panels.
#[component]
fn Dashboard(config: DashboardConfig) -> Element {
    use_hook(|| {
        dioxus_logger::tracing::info!(
            "dashboard backend {} rates {}",
            config.backend_url,
            config.rate_api_url
        )
    });
    let state = use_signal(|| DashboardState::new(config.default_base, config.auto_refresh));

    // Panels read both from context.
    use_context_provider(|| config);
    use_context_provider(|| state);

    let toast = state.read().toast.clone();

    rsx! {
        header {
            class: "dashboard-header",
            h1 { "Financial AI Assistant for Liquidity Management" }
            p { "Live exchange rates, your own data and an assistant to reason about both." }
        }
        Container {
            div {
                class: "grid dashboard-grid",
                aside {
                    RatesPanel {}
                    DataPanel {}
                    KeywordsPanel {}
                }
                section {
                    class: "dashboard-chat",
                    ChatPanel {}
                }
            }
        }
        footer {
            class: "dashboard-footer",
            p { "Rates refresh automatically. Consult your bank for binding quotes." }
        }
        ToastView { toast }
    }
}
