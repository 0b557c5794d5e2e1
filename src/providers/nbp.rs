use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::currency::{CurrencyCode, RateSource};
use crate::core::error::RateError;
use crate::core::rate::Rate;

pub const DEFAULT_BASE_URL: &str = "http://api.nbp.pl";
pub const FORMAT: &str = "json";

// Path layout agreed with the NBP API; only table A is consumed.
const URL_TEMPLATE: &str = "{base}/api/exchangerates/rates/A/{code}?format={format}";

#[derive(Debug, Deserialize)]
struct NbpRateResponse {
    table: String,
    currency: String,
    code: String,
    rates: Vec<NbpDailyRate>,
}

#[derive(Debug, Deserialize)]
struct NbpDailyRate {
    no: String,
    #[serde(rename = "effectiveDate")]
    effective_date: NaiveDate,
    mid: Decimal,
}

/// Rate source backed by the NBP (Narodowy Bank Polski) exchange rate API.
pub struct NbpRateSource {
    base_url: String,
    client: reqwest::Client,
}

impl NbpRateSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Uses a preconfigured client, e.g. one with timeouts set.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        NbpRateSource {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_url(&self, code: CurrencyCode) -> String {
        URL_TEMPLATE
            .replace("{base}", &self.base_url)
            .replace("{code}", code.as_str())
            .replace("{format}", FORMAT)
    }

    fn parse_rate(body: &str) -> Result<Rate, RateError> {
        let response: NbpRateResponse = serde_json::from_str(body)?;
        let daily = response
            .rates
            .into_iter()
            .next()
            .ok_or(RateError::EmptyRates)?;
        debug!(
            table = %response.table,
            currency = %response.currency,
            code = %response.code,
            no = %daily.no,
            effective_date = %daily.effective_date,
            mid = %daily.mid,
            "Parsed NBP rate"
        );
        Ok(Rate::of(daily.mid))
    }
}

impl Default for NbpRateSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl RateSource for NbpRateSource {
    #[instrument(name = "NbpRateFetch", skip(self), fields(code = %code))]
    async fn fetch(&self, code: CurrencyCode) -> Result<Rate, RateError> {
        let url = self.request_url(code);
        debug!("Requesting rate from {}", url);

        let response = self.client.get(&url).send().await?;
        debug!(status = %response.status(), "Received NBP response");

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RateError::NotFound);
        }

        let text = response.error_for_status()?.text().await?;
        Self::parse_rate(&text)
    }
}
