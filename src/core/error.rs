//! Errors raised while fetching or combining rates.

/// Failure of a [`RateSource`](crate::core::currency::RateSource) call.
///
/// Callers usually only distinguish [`RateError::NotFound`] from everything
/// else; the remaining variants are transport or decoding failures and are
/// surfaced as-is.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("Rate not found")]
    NotFound,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse rate response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Rate response contained no rates")]
    EmptyRates,

    #[error("Cannot divide by a zero rate")]
    ZeroRate,
}

impl RateError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RateError::NotFound)
    }
}
