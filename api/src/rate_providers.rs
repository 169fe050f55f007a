//! Defines traits and implementations for external exchange-rate providers.

use crate::currency::Currency;
use crate::error::ApiError;
use crate::rate_map::RateMap;
use dioxus_logger::tracing;
use serde::Deserialize;
use std::collections::HashMap;

/// A trait for any service that can quote rates against a base currency.
#[allow(async_fn_in_trait)]
pub trait RateProvider {
    /// Fetches the latest rates quoted against `base`.
    async fn get_rates(&self, base: Currency) -> Result<RateMap, ApiError>;
}

/// Provides rates from the public exchangerate-api.com v4 API.
pub mod exchange_rate_api {
    use super::*;

    pub const DEFAULT_URL: &str = "https://api.exchangerate-api.com/v4/latest";

    /// The structure of the JSON response from the `latest/{BASE}` endpoint.
    ///
    /// Only `rates` is read. It is optional so that a body without it is
    /// reported as malformed rather than as a decoding failure.
    #[derive(Deserialize, Debug)]
    struct LatestResponse {
        rates: Option<HashMap<String, Option<f64>>>,
    }

    /// An implementation of the `RateProvider` trait for exchangerate-api.com.
    #[derive(Clone, Debug)]
    pub struct ExchangeRateApi {
        client: reqwest::Client,
        base_url: String,
    }

    impl ExchangeRateApi {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.into(),
            }
        }

        fn latest_url(&self, base: Currency) -> String {
            format!("{}/{}", self.base_url.trim_end_matches('/'), base.code())
        }
    }

    impl Default for ExchangeRateApi {
        fn default() -> Self {
            Self::new(DEFAULT_URL)
        }
    }

    impl RateProvider for ExchangeRateApi {
        async fn get_rates(&self, base: Currency) -> Result<RateMap, ApiError> {
            let url = self.latest_url(base);
            tracing::debug!("fetching rates from {}", url);

            let resp = self.client.get(&url).send().await?;
            if !resp.status().is_success() {
                return Err(ApiError::from_response(resp).await);
            }
            let body = resp.json::<LatestResponse>().await?;

            let rates = body
                .rates
                .ok_or_else(|| ApiError::MalformedResponse("No rates in response".to_string()))?;

            let map = RateMap::from_raw(base, rates);
            if map.base_rate_overridden() {
                tracing::warn!(
                    "rate service did not report 1 for base {}; displaying 1 anyway",
                    base
                );
            }
            tracing::info!("fetched {} rates for base {}", map.len(), base);
            Ok(map)
        }
    }
}
