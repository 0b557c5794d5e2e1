//! Currency codes and the rate source abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::error::RateError;
use crate::core::rate::Rate;

/// Currencies quoted against PLN.
///
/// `Unspecified` is not a real currency: every source answers it with
/// [`RateError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Chf,
    Unspecified,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Unspecified => "UNSPECIFIED",
        }
    }

    /// Codes with a published rate.
    pub fn supported() -> &'static [CurrencyCode] {
        &[CurrencyCode::Usd, CurrencyCode::Eur, CurrencyCode::Chf]
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::Usd),
            "EUR" => Ok(CurrencyCode::Eur),
            "CHF" => Ok(CurrencyCode::Chf),
            "UNSPECIFIED" => Ok(CurrencyCode::Unspecified),
            _ => Err(anyhow::anyhow!("Invalid currency code: {}", s)),
        }
    }
}

/// Anything that can quote a currency against PLN.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the current rate for `code`.
    ///
    /// Fails with [`RateError::NotFound`] when the source has no rate for
    /// `code`.
    async fn fetch(&self, code: CurrencyCode) -> Result<Rate, RateError>;
}

#[async_trait]
impl<T: RateSource + ?Sized> RateSource for Box<T> {
    async fn fetch(&self, code: CurrencyCode) -> Result<Rate, RateError> {
        (**self).fetch(code).await
    }
}

#[async_trait]
impl<T: RateSource + ?Sized> RateSource for Arc<T> {
    async fn fetch(&self, code: CurrencyCode) -> Result<Rate, RateError> {
        (**self).fetch(code).await
    }
}
