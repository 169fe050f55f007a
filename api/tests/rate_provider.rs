use api::currency::Currency;
use api::rate_providers::exchange_rate_api::ExchangeRateApi;
use api::rate_providers::RateProvider;
use api::ApiError;
use proptest::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_with(base: &str, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/latest/{base}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_tenge_rates_are_inverted() {
    let server = server_with("KZT", json!({ "base": "KZT", "rates": { "KZT": 1, "USD": 450.2 } })).await;
    let provider = ExchangeRateApi::new(format!("{}/v4/latest", server.uri()));

    let rates = provider.get_rates(Currency::KZT).await.unwrap();

    assert_eq!(rates.base(), Currency::KZT);
    let usd = rates.display_rate_for(Currency::USD).unwrap();
    assert!((usd - 0.002221).abs() < 1e-6);
    assert_eq!(rates.display_rate_for(Currency::KZT), Some(1.0));
    assert_eq!(rates.display_rate_for(Currency::EUR), None);
}

#[tokio::test]
async fn test_missing_rates_field_is_malformed() {
    let server = server_with("USD", json!({ "result": "error" })).await;
    let provider = ExchangeRateApi::new(format!("{}/v4/latest/", server.uri()));

    let err = provider.get_rates(Currency::USD).await.unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse(_)));
    assert_eq!(err.user_message(), "No rates in response");
}

#[tokio::test]
async fn test_null_rate_has_no_display_value() {
    let server = server_with("EUR", json!({ "rates": { "USD": null, "CNY": 7.8 } })).await;
    let provider = ExchangeRateApi::new(format!("{}/v4/latest", server.uri()));

    let rates = provider.get_rates(Currency::EUR).await.unwrap();

    assert_eq!(rates.display_rate("USD"), None);
    assert!((rates.display_rate("CNY").unwrap() - 1.0 / 7.8).abs() < 1e-12);
}

#[tokio::test]
async fn test_server_error_is_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let provider = ExchangeRateApi::new(server.uri());

    let err = provider.get_rates(Currency::RUB).await.unwrap_err();

    assert!(matches!(err, ApiError::Backend { status: 503, .. }));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Nothing listens on port 9 on a test machine.
    let provider = ExchangeRateApi::new("http://127.0.0.1:9/v4/latest");

    let err = provider.get_rates(Currency::USD).await.unwrap_err();

    assert!(err.is_transport());
}

fn base_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_base_displays_as_one(base in base_currency(), server_rate in prop::option::of(-10.0f64..1000.0)) {
        let rates = api::rate_map::RateMap::from_raw(base, [(base.code(), server_rate)]);
        prop_assert_eq!(rates.display_rate_for(base), Some(1.0));
    }

    #[test]
    fn test_display_is_reciprocal_of_raw(
        base in base_currency(),
        raw in prop::collection::btree_map("[A-Z]{3}", 1e-6f64..1e6, 1..20),
    ) {
        let rates = api::rate_map::RateMap::from_raw(base, raw.iter().map(|(k, v)| (k.clone(), Some(*v))));
        for (code, value) in &raw {
            if code == base.code() {
                continue;
            }
            let shown = rates.display_rate(code).unwrap();
            prop_assert!((shown * value - 1.0).abs() < 1e-9);
        }
    }
}
