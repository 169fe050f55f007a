//=============================================================================
// File: src/panels/rates.rs
//=============================================================================
use crate::components::currency_chooser::CurrencyChooser;
use crate::components::pico::{Button, ButtonType, SectionCard};
use crate::components::rate_card::{RateCard, PLACEHOLDER};
use crate::dashboard_state::DashboardState;
use crate::hooks::use_rate_refresh::use_rate_refresh;
use api::currency::Currency;
use dioxus::prelude::*;

#[component]
pub fn RatesPanel() -> Element {
    let mut state = use_context::<Signal<DashboardState>>();
    let mut fetch = use_rate_refresh(state);

    let (base, auto_refresh, loading, error, last_updated) = {
        let s = state.read();
        (
            s.base,
            s.auto_refresh,
            s.rates_loading,
            s.rates_error.clone(),
            s.last_updated,
        )
    };
    let updated_text = last_updated
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let body = if loading {
        rsx! {
            progress {}
        }
    } else if let Some(err) = error {
        rsx! {
            p { style: "color: var(--pico-color-red-500, red); text-align: center; font-size: 0.875rem;", "{err}" }
        }
    } else {
        let relative_max = state.read().relative_max();
        rsx! {
            for currency in Currency::ALL.into_iter().filter(|c| *c != base) {
                RateCard {
                    key: "{currency.code()}",
                    currency,
                    base,
                    rate: state.read().display_rate(currency),
                    relative_max,
                }
            }
        }
    };

    rsx! {
        SectionCard {
            icon: "📈",
            title: format!("Rates in {}", base.code()),
            actions: rsx! {
                CurrencyChooser {
                    selected: base,
                    on_change: move |currency| state.write().set_base(currency),
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Refresh now".to_string(),
                    on_click: move |_| fetch.restart(),
                    "Refresh"
                }
            },
            {body}
            footer {
                style: "display: flex; align-items: center; justify-content: space-between; font-size: 0.75rem;",
                label {
                    input {
                        r#type: "checkbox",
                        checked: auto_refresh,
                        onchange: move |_| state.write().set_auto_refresh(!auto_refresh),
                    }
                    "Auto-refresh"
                }
                small { style: "color: var(--pico-muted-color);", "Updated: {updated_text}" }
            }
        }
    }
}
