use crate::dashboard_state::Toast;
use dioxus::prelude::*;

/// The floating acknowledgement in the bottom-right corner.
#[component]
pub fn ToastView(toast: Option<Toast>) -> Element {
    rsx! {
        if let Some(toast) = toast {
            div {
                key: "{toast.id}",
                role: "status",
                style: "
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 200;
                    background: #000;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    border-radius: var(--pico-border-radius);
                    box-shadow: 0 4px 12px rgba(0,0,0,0.3);
                ",
                "{toast.message}"
            }
        }
    }
}
