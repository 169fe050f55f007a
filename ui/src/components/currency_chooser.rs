// ui/src/components/currency_chooser.rs
#![allow(non_snake_case)]

use api::currency::Currency;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct CurrencyChooserProps {
    /// The currently selected base currency.
    pub selected: Currency,
    /// Called with the newly chosen currency. Not called for re-selecting the same one.
    pub on_change: EventHandler<Currency>,
    #[props(optional)]
    pub style: Option<String>,
}

/// A compact `<select>` listing every dashboard currency by code.
pub fn CurrencyChooser(props: CurrencyChooserProps) -> Element {
    let selected = props.selected;
    let style = props.style.as_deref().unwrap_or("width: auto; margin: 0;").to_string();
    let tooltip = format!("Rates are shown in {} ({})", selected.name(), selected.symbol());

    rsx! {
        select {
            style: "{style}",
            title: "{tooltip}",
            "aria-label": "Base currency",
            onchange: move |evt| {
                match Currency::from_code(&evt.value()) {
                    Some(currency) if currency != selected => props.on_change.call(currency),
                    Some(_) => {}
                    None => dioxus_logger::tracing::warn!("unknown currency {:?}", evt.value()),
                }
            },
            for currency in Currency::ALL {
                option {
                    key: "{currency.code()}",
                    value: "{currency.code()}",
                    selected: currency == selected,
                    "{currency.code()}"
                }
            }
        }
    }
}
