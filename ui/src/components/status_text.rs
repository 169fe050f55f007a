use crate::dashboard_state::StatusKind;
use crate::dashboard_state::StatusLine;
use dioxus::prelude::*;

fn color(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Pending | StatusKind::Info => "var(--pico-muted-color)",
        StatusKind::Success => "var(--pico-color-green-500, green)",
        StatusKind::Error => "var(--pico-color-red-500, red)",
    }
}

/// Renders the last outcome of an operation, if any.
#[component]
pub fn StatusText(status: Option<StatusLine>) -> Element {
    let Some(status) = status else {
        return rsx! {};
    };
    rsx! {
        p {
            style: "font-size: 0.875rem; margin: 0.25rem 0; color: {color(status.kind)};",
            "aria-busy": status.kind.is_pending(),
            "{status.text}"
        }
    }
}
