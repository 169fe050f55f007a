//! Dashboard settings.

use crate::currency::Currency;
use crate::rate_providers::exchange_rate_api;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_CHAT_WIDGET_URL: &str = "https://hackathon.shai.pro/chatbot/XgtqeIIGT8nIz4GX";
pub const DEFAULT_REFRESH_SECS: u64 = 300;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unknown currency {value:?}")]
    UnknownCurrency { var: &'static str, value: String },
    #[error("{var}: expected a positive number of seconds, got {value:?}")]
    InvalidInterval { var: &'static str, value: String },
    #[error("{var}: expected true/false or 1/0, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Everything the dashboard needs to know about its surroundings.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the table-management backend, without trailing slash.
    pub backend_url: String,
    /// Base URL of the exchange-rate service; the base code is appended.
    pub rate_api_url: String,
    pub chat_widget_url: String,
    pub default_base: Currency,
    pub auto_refresh: bool,
    pub refresh_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            rate_api_url: exchange_rate_api::DEFAULT_URL.to_string(),
            chat_widget_url: DEFAULT_CHAT_WIDGET_URL.to_string(),
            default_base: Currency::default(),
            auto_refresh: true,
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
        }
    }
}

impl DashboardConfig {
    /// Creates a config from environment variables, with in-code defaults.
    ///
    /// Each variable is read at runtime first and then from the value baked in
    /// at compile time, which is the only source a wasm build has.
    ///
    /// # Environment Variables
    /// - `DASHBOARD_BACKEND_URL`
    /// - `EXCHANGE_RATE_API_URL`
    /// - `CHAT_WIDGET_URL`
    /// - `BASE_CURRENCY`: one of USD, EUR, CNY, RUB, KZT.
    /// - `AUTO_REFRESH`: "true"/"1" or "false"/"0".
    /// - `RATE_REFRESH_SECS`: refresh period in seconds.
    ///
    /// Invalid values are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| {
            env::var(var).ok().or_else(|| compiled_in(var).map(str::to_string))
        })
        .unwrap_or_else(|(config, errors)| {
            for e in errors {
                dioxus_logger::tracing::warn!("ignoring setting: {}", e);
            }
            config
        })
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// On any invalid value, returns the config with defaults substituted
    /// along with the errors encountered.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, (Self, Vec<ConfigError>)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(url) = lookup("DASHBOARD_BACKEND_URL") {
            config.backend_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("EXCHANGE_RATE_API_URL") {
            config.rate_api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("CHAT_WIDGET_URL") {
            config.chat_widget_url = url;
        }
        if let Some(code) = lookup("BASE_CURRENCY") {
            match Currency::from_code(code.trim()) {
                Some(c) => config.default_base = c,
                None => errors.push(ConfigError::UnknownCurrency {
                    var: "BASE_CURRENCY",
                    value: code,
                }),
            }
        }
        if let Some(val) = lookup("AUTO_REFRESH") {
            match parse_flag(&val) {
                Some(flag) => config.auto_refresh = flag,
                None => errors.push(ConfigError::InvalidFlag {
                    var: "AUTO_REFRESH",
                    value: val,
                }),
            }
        }
        if let Some(val) = lookup("RATE_REFRESH_SECS") {
            match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.refresh_interval = Duration::from_secs(secs),
                _ => errors.push(ConfigError::InvalidInterval {
                    var: "RATE_REFRESH_SECS",
                    value: val,
                }),
            }
        }

        if errors.is_empty() {
            Ok(config)
        } else {
            Err((config, errors))
        }
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    let val = val.trim();
    if val.eq_ignore_ascii_case("true") || val == "1" {
        Some(true)
    } else if val.eq_ignore_ascii_case("false") || val == "0" {
        Some(false)
    } else {
        None
    }
}

fn compiled_in(var: &str) -> Option<&'static str> {
    match var {
        "DASHBOARD_BACKEND_URL" => option_env!("DASHBOARD_BACKEND_URL"),
        "EXCHANGE_RATE_API_URL" => option_env!("EXCHANGE_RATE_API_URL"),
        "CHAT_WIDGET_URL" => option_env!("CHAT_WIDGET_URL"),
        "BASE_CURRENCY" => option_env!("BASE_CURRENCY"),
        "AUTO_REFRESH" => option_env!("AUTO_REFRESH"),
        "RATE_REFRESH_SECS" => option_env!("RATE_REFRESH_SECS"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        let config = DashboardConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
        assert_eq!(config.default_base, Currency::KZT);
        assert!(config.auto_refresh);
    }

    #[test]
    fn overrides_are_applied() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("DASHBOARD_BACKEND_URL", "https://backend.example/"),
            ("BASE_CURRENCY", "eur"),
            ("AUTO_REFRESH", "0"),
            ("RATE_REFRESH_SECS", "60"),
        ]))
        .unwrap();
        assert_eq!(config.backend_url, "https://backend.example");
        assert_eq!(config.default_base, Currency::EUR);
        assert!(!config.auto_refresh);
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
    }

    #[test]
    fn invalid_values_fall_back_and_are_reported() {
        let (config, errors) = DashboardConfig::from_lookup(lookup_from(&[
            ("BASE_CURRENCY", "XYZ"),
            ("RATE_REFRESH_SECS", "0"),
        ]))
        .unwrap_err();
        assert_eq!(config.default_base, Currency::KZT);
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn auto_refresh_flag_is_trimmed_and_case_insensitive() {
        let config =
            DashboardConfig::from_lookup(lookup_from(&[("AUTO_REFRESH", " TRUE ")])).unwrap();
        assert!(config.auto_refresh);
        let config =
            DashboardConfig::from_lookup(lookup_from(&[("AUTO_REFRESH", "False")])).unwrap();
        assert!(!config.auto_refresh);
    }

    #[test]
    fn unknown_auto_refresh_flag_keeps_default() {
        let (config, errors) =
            DashboardConfig::from_lookup(lookup_from(&[("AUTO_REFRESH", "yes")])).unwrap_err();
        assert!(config.auto_refresh);
        assert_eq!(
            errors,
            vec![ConfigError::InvalidFlag {
                var: "AUTO_REFRESH",
                value: "yes".to_string(),
            }]
        );
    }
}
