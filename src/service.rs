//! Cross rates derived from two PLN quotes.

use tracing::{debug, instrument};

use crate::core::config::{AppConfig, SourceKind};
use crate::core::currency::{CurrencyCode, RateSource};
use crate::core::error::RateError;
use crate::core::rate::Rate;
use crate::providers::nbp::NbpRateSource;
use crate::providers::static_rates::StaticRateSource;

pub struct RateService<S: RateSource> {
    source: S,
}

impl<S: RateSource> RateService<S> {
    pub fn new(source: S) -> Self {
        RateService { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Units of `to` bought with one unit of `from`.
    ///
    /// Both quotes are fetched in order, `from` first. If the first fetch
    /// fails the second is never attempted.
    #[instrument(skip(self))]
    pub async fn cross_rate(&self, from: CurrencyCode, to: CurrencyCode) -> Result<Rate, RateError> {
        let from_rate = self.source.fetch(from).await?;
        let to_rate = self.source.fetch(to).await?;
        let rate = Rate::divide(from_rate, to_rate)?;
        debug!(%from_rate, %to_rate, %rate, "Computed cross rate");
        Ok(rate)
    }

    pub async fn usd_to_eur_rate(&self) -> Result<Rate, RateError> {
        self.cross_rate(CurrencyCode::Usd, CurrencyCode::Eur).await
    }
}

impl RateService<Box<dyn RateSource>> {
    /// Builds a service over the source selected in `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let source: Box<dyn RateSource> = match config.source {
            SourceKind::Nbp => Box::new(NbpRateSource::new(config.nbp_base_url())),
            SourceKind::Static => Box::new(StaticRateSource::new()),
        };
        RateService::new(source)
    }
}

/// Service backed by the production NBP API.
pub fn default_service() -> RateService<NbpRateSource> {
    RateService::new(NbpRateSource::default())
}
