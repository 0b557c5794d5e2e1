use nbp_rates::core::config::SourceKind;
use nbp_rates::core::{CurrencyCode, Rate, RateError, RateSource};
use nbp_rates::providers::{NbpRateSource, StaticRateSource};
use nbp_rates::service::RateService;
use rust_decimal_macros::dec;
use std::fs;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub fn rate_body(code: &str, currency: &str, mid: &str) -> String {
        format!(
            r#"{{"table":"A","currency":"{currency}","code":"{code}","rates":[{{"no":"212/A/NBP/2020","effectiveDate":"2020-10-29","mid":{mid}}}]}}"#
        )
    }

    pub async fn mount_rate(mock_server: &MockServer, code: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/api/exchangerates/rates/A/{code}")))
            .and(query_param("format", "json"))
            .respond_with(response)
            .mount(mock_server)
            .await;
    }

    /// NBP lookalike quoting USD at 5.0 and EUR at 4.0 and answering 404
    /// for UNSPECIFIED.
    pub async fn create_nbp_mock_server() -> MockServer {
        let mock_server = MockServer::start().await;
        mount_rate(
            &mock_server,
            "USD",
            ResponseTemplate::new(200).set_body_string(rate_body("USD", "dolar amerykański", "5.0")),
        )
        .await;
        mount_rate(
            &mock_server,
            "EUR",
            ResponseTemplate::new(200).set_body_string(rate_body("EUR", "euro", "4.0")),
        )
        .await;
        mount_rate(
            &mock_server,
            "UNSPECIFIED",
            ResponseTemplate::new(404)
                .set_body_raw("\u{feff}404 NotFound".as_bytes().to_vec(), "text/plain"),
        )
        .await;
        mock_server
    }
}

#[test_log::test(tokio::test)]
async fn test_usd_to_eur_over_http() {
    let mock_server = test_utils::create_nbp_mock_server().await;
    let service = RateService::new(NbpRateSource::new(&mock_server.uri()));

    let rate = service.usd_to_eur_rate().await.expect("cross rate");
    info!(%rate, "Computed USD/EUR over mock NBP");
    assert_eq!(rate.value(), dec!(1.25));
}

#[test_log::test(tokio::test)]
async fn test_http_and_static_sources_agree_on_not_found() {
    let mock_server = test_utils::create_nbp_mock_server().await;
    let sources: Vec<Box<dyn RateSource>> = vec![
        Box::new(NbpRateSource::new(&mock_server.uri())),
        Box::new(StaticRateSource::new()),
    ];

    for source in sources {
        let result = source.fetch(CurrencyCode::Unspecified).await;
        assert!(matches!(result, Err(RateError::NotFound)));
    }
}

#[test_log::test(tokio::test)]
async fn test_http_not_found_short_circuits_service() {
    let mock_server = test_utils::create_nbp_mock_server().await;
    let service = RateService::new(NbpRateSource::new(&mock_server.uri()));

    let result = service
        .cross_rate(CurrencyCode::Unspecified, CurrencyCode::Eur)
        .await;
    assert!(matches!(result, Err(RateError::NotFound)));

    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.path(),
        "/api/exchangerates/rates/A/UNSPECIFIED"
    );
}

#[test_log::test(tokio::test)]
async fn test_static_service_matches_table() {
    let service = RateService::new(StaticRateSource::from_rates([
        (CurrencyCode::Usd, Rate::of(dec!(5.0))),
        (CurrencyCode::Eur, Rate::of(dec!(4.0))),
    ]));

    let rate = service.usd_to_eur_rate().await.unwrap();
    assert_eq!(rate, Rate::of(dec!(1.25)));
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_server = test_utils::create_nbp_mock_server().await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_path = config_file.path();
    let config_content = format!(
        r#"
        source: nbp
        providers:
          nbp:
            base_url: {}
    "#,
        mock_server.uri()
    );
    fs::write(config_path, &config_content).expect("Failed to write config file");

    let output = nbp_rates::run_command(
        nbp_rates::AppCommand::UsdToEur,
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await
    .expect("run_command failed");
    assert!(output.contains("1.25"), "unexpected output: {output}");

    let output = nbp_rates::run_command(
        nbp_rates::AppCommand::Rate(CurrencyCode::Eur),
        Some(config_path.to_str().unwrap()),
        None,
    )
    .await
    .expect("run_command failed");
    assert!(output.contains("EUR/PLN"), "unexpected output: {output}");
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_not_found() {
    let mock_server = test_utils::create_nbp_mock_server().await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!("providers:\n  nbp:\n    base_url: {}\n", mock_server.uri());
    fs::write(config_file.path(), &config_content).expect("Failed to write config file");

    let err = nbp_rates::run_command(
        nbp_rates::AppCommand::Rate(CurrencyCode::Unspecified),
        Some(config_file.path().to_str().unwrap()),
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RateError>(),
        Some(RateError::NotFound)
    ));
}

#[test_log::test(tokio::test)]
async fn test_source_override_uses_static_table() {
    // Base URL points nowhere; the static override must avoid the network.
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(
        config_file.path(),
        "source: nbp\nproviders:\n  nbp:\n    base_url: http://127.0.0.1:9\n",
    )
    .expect("Failed to write config file");

    let output = nbp_rates::run_command(
        nbp_rates::AppCommand::Demo,
        Some(config_file.path().to_str().unwrap()),
        Some(SourceKind::Static),
    )
    .await
    .expect("demo failed");
    assert!(output.contains("0.818"), "unexpected output: {output}");
    assert!(output.contains("not found"));
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file() {
    let result = nbp_rates::run_command(
        nbp_rates::AppCommand::UsdToEur,
        Some("/nonexistent/nbp-rates.yaml"),
        None,
    )
    .await;
    assert!(result.is_err());
}
