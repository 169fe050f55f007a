// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    icon: Option<&'static str>,
}

/// A dashed placeholder box for sections with nothing to show yet.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                padding: 1rem;
                text-align: center;
                color: var(--pico-muted-color);
                border: 2px dashed var(--pico-card-border-color);
                border-radius: var(--pico-border-radius);
                margin: 0.5rem 0;
            ",
            if let Some(icon) = props.icon {
                div { style: "font-size: 2rem; opacity: 0.8;", "{icon}" }
            }
            small { "{props.title}" }
            if let Some(desc) = props.description {
                small { style: "display: block; margin-top: 0.25rem;", "{desc}" }
            }
        }
    }
}
