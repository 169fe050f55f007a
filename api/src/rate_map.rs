//! Provides a map of exchange rates quoted against a single base currency.

use crate::currency::Currency;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The rates of one fetch cycle, keyed by currency code.
///
/// Raw rates are stored as the exchange-rate service returns them: units of the
/// foreign currency per one unit of `base`. Display rates are the reciprocal,
/// i.e. how much of the base currency one unit of the foreign currency costs.
/// The base currency's own display rate is always exactly 1, whatever the
/// server reported for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateMap {
    base: Currency,
    raw: BTreeMap<String, Option<f64>>,
}

impl RateMap {
    /// Creates a new, empty `RateMap` for the given base.
    pub fn new(base: Currency) -> Self {
        Self {
            base,
            raw: BTreeMap::new(),
        }
    }

    /// Builds a map from raw `(code, rate)` pairs.
    pub fn from_raw<I, S>(base: Currency, rates: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<f64>)>,
        S: Into<String>,
    {
        let mut map = Self::new(base);
        for (code, rate) in rates {
            map.raw.insert(code.into(), rate);
        }
        map
    }

    /// The currency these rates are quoted against.
    pub fn base(&self) -> Currency {
        self.base
    }

    /// The rate exactly as the server returned it.
    pub fn raw_rate(&self, code: &str) -> Option<f64> {
        self.raw.get(code).copied().flatten()
    }

    /// Units of base currency per one unit of `code`.
    ///
    /// Returns `None` when the server had no usable rate for `code`: missing,
    /// `null`, zero, negative or non-finite.
    pub fn display_rate(&self, code: &str) -> Option<f64> {
        if code == self.base.code() {
            return Some(1.0);
        }
        self.raw_rate(code)
            .filter(|rate| rate.is_finite() && *rate > 0.0)
            .map(|rate| 1.0 / rate)
    }

    /// Display rate for one of the dashboard currencies.
    pub fn display_rate_for(&self, currency: Currency) -> Option<f64> {
        self.display_rate(currency.code())
    }

    /// The largest display rate among non-base currencies, never below 1.
    ///
    /// Used to scale the per-currency bars.
    pub fn relative_max(&self) -> f64 {
        self.raw
            .keys()
            .filter(|code| code.as_str() != self.base.code())
            .filter_map(|code| self.display_rate(code))
            .fold(1.0, f64::max)
    }

    /// Returns `true` if the server reported a base rate other than 1.
    pub fn base_rate_overridden(&self) -> bool {
        match self.raw_rate(self.base.code()) {
            Some(rate) => (rate - 1.0).abs() > f64::EPSILON,
            None => true,
        }
    }

    /// Number of codes in the map, including unusable ones.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
