use crate::compat;
use crate::dashboard_state::DashboardState;
use api::config::DashboardConfig;
use api::rate_providers::exchange_rate_api::ExchangeRateApi;
use api::rate_providers::RateProvider;
use dioxus::prelude::*;
use std::time::Duration;

/// Calls `on_tick` every `period` for as long as the future is polled.
///
/// Returns at once when `enabled` is false. The first tick comes one full
/// period after start, never immediately.
pub async fn refresh_timer<F: FnMut()>(enabled: bool, period: Duration, mut on_tick: F) {
    if !enabled {
        return;
    }
    loop {
        compat::sleep(period).await;
        on_tick();
    }
}

/// Keeps `state.rates` fresh.
///
/// Fetches once on mount and again whenever the base currency or the
/// auto-refresh flag changes. While auto-refresh is on, a timer re-runs the
/// fetch every `refresh_interval`. Both futures belong to the calling
/// component and are dropped with it.
///
/// Returns the fetch resource; `restart()` it for a manual refresh.
pub fn use_rate_refresh(mut state: Signal<DashboardState>) -> Resource<()> {
    let config = use_context::<DashboardConfig>();
    let provider = use_hook(|| ExchangeRateApi::new(config.rate_api_url.clone()));
    let period = config.refresh_interval;

    // Memos so that unrelated state writes do not re-run the fetch.
    let base = use_memo(move || state.read().base);
    let auto_refresh = use_memo(move || state.read().auto_refresh);

    let fetch = use_resource(move || {
        let provider = provider.clone();
        async move {
            let base = base();
            let _ = auto_refresh();

            let ticket = state.write().begin_rate_fetch();
            dioxus_logger::tracing::info!("fetching rates for {}", base);
            let result = provider.get_rates(base).await;
            state
                .write()
                .finish_rate_fetch(ticket, result, chrono::Local::now());
        }
    });

    use_resource(move || async move {
        let enabled = auto_refresh();
        let _ = base();
        let mut fetch = fetch;
        refresh_timer(enabled, period, move || fetch.restart()).await;
    });

    fetch
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const PERIOD: Duration = Duration::from_secs(300);

    #[tokio::test(start_paused = true)]
    async fn disabled_timer_never_ticks() {
        let mut ticks = 0;
        let finished = timeout(PERIOD * 10, refresh_timer(false, PERIOD, || ticks += 1)).await;
        assert!(finished.is_ok());
        assert_eq!(ticks, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn enabled_timer_does_not_tick_immediately() {
        let mut ticks = 0;
        let _ = timeout(PERIOD - Duration::from_secs(1), refresh_timer(true, PERIOD, || ticks += 1))
            .await;
        assert_eq!(ticks, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn enabled_timer_ticks_once_per_period() {
        let mut ticks = 0;
        let elapsed = PERIOD * 3 + Duration::from_secs(1);
        let _ = timeout(elapsed, refresh_timer(true, PERIOD, || ticks += 1)).await;
        assert_eq!(ticks, 3);
    }
}
