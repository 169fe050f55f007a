use crate::components::pico::SectionCard;
use crate::dashboard_state::DashboardState;
use crate::hooks::use_keyword_clipboard::use_keyword_clipboard;
use api::keywords::KEYWORDS;
use dioxus::prelude::*;

#[component]
pub fn KeywordsPanel() -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let clipboard = use_keyword_clipboard(state);

    rsx! {
        SectionCard {
            icon: "🔑",
            title: "Key requests".to_string(),
            div {
                style: "display: flex; flex-direction: column; gap: 0.5rem;",
                for keyword in KEYWORDS.iter().copied() {
                    button {
                        key: "{keyword.phrase}",
                        class: "secondary outline",
                        style: "text-align: left;",
                        title: "{keyword.description}",
                        onclick: move |_| clipboard.copy(keyword),
                        "{keyword.phrase}"
                    }
                }
            }
            small {
                style: "color: var(--pico-muted-color);",
                "Click to copy a request, then paste it into the chat."
            }
        }
    }
}
