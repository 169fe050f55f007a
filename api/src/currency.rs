//! Defines the currencies the dashboard can use as a base and display rates for.

use serde::Deserialize;
use serde::Serialize;

/// A currency shown on the dashboard, with its code, symbol and display name.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    USD, // US Dollar
    EUR, // Euro
    CNY, // Chinese Yuan
    RUB, // Russian Ruble
    #[default]
    KZT, // Kazakhstani Tenge
}

impl Currency {
    /// Every currency in display order.
    pub const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::EUR,
        Currency::CNY,
        Currency::RUB,
        Currency::KZT,
    ];

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the human-readable name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::USD => "US Dollar",
            Self::EUR => "Euro",
            Self::CNY => "Chinese Yuan",
            Self::RUB => "Russian Ruble",
            Self::KZT => "Tenge",
        }
    }

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::CNY => "¥",
            Self::RUB => "₽",
            Self::KZT => "₸",
        }
    }

    /// Returns the flag emoji shown next to the currency.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::USD => "🇺🇸",
            Self::EUR => "🇪🇺",
            Self::CNY => "🇨🇳",
            Self::RUB => "🇷🇺",
            Self::KZT => "🇰🇿",
        }
    }

    /// Finds a currency by its code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// Formats a rate with four decimals followed by the currency code.
    pub fn format_rate(&self, rate: f64) -> String {
        format!("{:.4} {}", rate, self.code())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
