//! The components module contains the shared building blocks of the dashboard page:
//! Pico.css wrappers, the base currency chooser, rate cards and status displays.
pub mod currency_chooser;
pub mod empty_state;
pub mod pico;
pub mod rate_card;
pub mod status_text;
pub mod toast;
