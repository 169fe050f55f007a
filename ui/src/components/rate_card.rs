use api::currency::Currency;
use dioxus::prelude::*;

/// Shown where a rate is unknown.
pub const PLACEHOLDER: &str = "—";

/// The rate in `base` units, or the placeholder.
pub fn format_rate(rate: Option<f64>, base: Currency) -> String {
    match rate {
        Some(r) => base.format_rate(r),
        None => PLACEHOLDER.to_string(),
    }
}

/// Bar width in percent of `relative_max`, clamped to 0..=100.
pub fn bar_percent(rate: Option<f64>, relative_max: f64) -> u32 {
    match rate {
        Some(r) if relative_max > 0.0 => ((r / relative_max) * 100.0).clamp(0.0, 100.0).round() as u32,
        _ => 0,
    }
}

/// One foreign currency priced in the base currency.
#[component]
pub fn RateCard(currency: Currency, base: Currency, rate: Option<f64>, relative_max: f64) -> Element {
    let shown = format_rate(rate, base);
    let percent = bar_percent(rate, relative_max);

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid var(--pico-muted-border-color);",
            div {
                style: "display: flex; align-items: center; gap: 0.75rem;",
                span { style: "font-size: 1.5rem;", "{currency.emoji()}" }
                div {
                    div { "{currency.name()}" }
                    small {
                        style: "color: var(--pico-muted-color);",
                        "1 {currency.code()} = {shown}"
                    }
                    progress { style: "margin: 0.25rem 0 0 0; height: 0.25rem;", value: "{percent}", max: "100" }
                }
            }
            strong {
                style: "min-width: 6rem; text-align: right; color: var(--pico-primary);",
                "{shown}"
            }
        }
    }
}
