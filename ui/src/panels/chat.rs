use crate::components::pico::SectionCard;
use api::config::DashboardConfig;
use dioxus::prelude::*;

/// Permissions granted to the third-party chat frame.
pub const CHAT_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms allow-popups allow-modals";

/// The embedded assistant. The widget is opaque; the page only hosts it.
#[component]
pub fn ChatPanel() -> Element {
    let config = use_context::<DashboardConfig>();

    rsx! {
        SectionCard {
            icon: "🤖",
            title: "Your AI assistant".to_string(),
            iframe {
                src: "{config.chat_widget_url}",
                title: "AI Assistant Chatbot",
                "allow": "microphone",
                "sandbox": CHAT_SANDBOX,
                style: "width: 100%; min-height: 640px; border: 0; border-radius: var(--pico-border-radius);",
            }
        }
    }
}
