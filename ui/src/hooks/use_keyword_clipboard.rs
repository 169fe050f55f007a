use crate::compat;
use crate::dashboard_state::DashboardState;
use api::keywords::Keyword;
use dioxus::prelude::*;
use std::time::Duration;

/// How long the "copied" acknowledgement stays up.
pub const TOAST_DURATION: Duration = Duration::from_millis(1400);

#[derive(Clone, Copy)]
pub struct KeywordClipboard {
    state: Signal<DashboardState>,
}

impl KeywordClipboard {
    /// Copies the phrase and shows a toast. Clipboard failures are ignored.
    pub fn copy(&self, keyword: Keyword) {
        let mut state = self.state;
        spawn(async move {
            if !compat::clipboard_set(keyword.phrase.to_string()).await {
                dioxus_logger::tracing::debug!("clipboard unavailable");
            }
        });

        let id = state.write().keyword_copied(&keyword);
        spawn(async move {
            compat::sleep(TOAST_DURATION).await;
            state.write().dismiss_toast(id);
        });
    }
}

pub fn use_keyword_clipboard(state: Signal<DashboardState>) -> KeywordClipboard {
    KeywordClipboard { state }
}
