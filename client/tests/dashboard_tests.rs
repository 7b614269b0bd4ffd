//! Dashboard wiring and service probe tests

mod support;

use crop_yield_client::{ClientError, Config, Dashboard};
use shared::ForecastMode;
use tokio_test::assert_ok;

use support::{closed_base_url, spawn, StubState};

#[tokio::test]
async fn test_service_health() {
    let stub = spawn(StubState::default()).await;
    let dashboard = Dashboard::new(Config::with_base_urls(&stub.base_url, &stub.base_url));

    let health = assert_ok!(dashboard.service_health().await);
    assert_eq!(health.status, "ok");
    assert!(health.is_ready());
}

#[tokio::test]
async fn test_model_metadata() {
    let stub = spawn(StubState::default()).await;
    let dashboard = Dashboard::new(Config::with_base_urls(&stub.base_url, &stub.base_url));

    let metadata = assert_ok!(dashboard.model_metadata().await);
    assert_eq!(metadata.input_columns, ["Rainfall_mm", "Temperature_Celsius"]);
    assert_eq!(metadata.transformed_feature_names.len(), 2);
}

#[tokio::test]
async fn test_unreachable_service() {
    let base = closed_base_url().await;
    let dashboard = Dashboard::new(Config::with_base_urls(&base, &base));

    assert!(matches!(
        dashboard.service_health().await,
        Err(ClientError::Network(_))
    ));
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let stub = spawn(StubState::default()).await;
    let base = format!("{}/", stub.base_url);
    let dashboard = Dashboard::new(Config::with_base_urls(&base, &base));

    assert_ok!(dashboard.service_health().await);
    assert_ok!(dashboard.catalog().load().await);
    assert!(dashboard.catalog().is_loaded());
}

#[tokio::test]
async fn test_forms_are_independent() {
    let stub = spawn(StubState::default()).await;
    let dashboard = Dashboard::new(Config::with_base_urls(&stub.base_url, &stub.base_url));

    let graph = dashboard.forecast_form(ForecastMode::Graph);
    let list = dashboard.forecast_form(ForecastMode::Broadcast);
    assert_ne!(graph.id(), list.id());
    assert_eq!(graph.mode(), ForecastMode::Graph);
    assert!(list.start_date().is_some());
    assert!(graph.can_submit() && list.can_submit());
    assert_eq!(dashboard.config().prediction.base_url, stub.base_url);
}
