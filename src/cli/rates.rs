use anyhow::{Context, Result, anyhow};
use tracing::info;

use super::ui::{StyleType, rate_line, style_text};
use crate::core::currency::{CurrencyCode, RateSource};
use crate::service::RateService;

/// Formats the PLN rate for a single currency.
pub async fn show_rate<S: RateSource>(service: &RateService<S>, code: CurrencyCode) -> Result<String> {
    let rate = service
        .source()
        .fetch(code)
        .await
        .with_context(|| format!("Failed to fetch rate for {code}"))?;
    Ok(rate_line(&format!("{code}/PLN"), &rate.to_string()))
}

/// Formats the cross rate between two currencies.
pub async fn show_cross_rate<S: RateSource>(
    service: &RateService<S>,
    from: CurrencyCode,
    to: CurrencyCode,
) -> Result<String> {
    let rate = service
        .cross_rate(from, to)
        .await
        .with_context(|| format!("Failed to compute {from}/{to} rate"))?;
    Ok(rate_line(&format!("{from}/{to}"), &rate.to_string()))
}

/// Fetches every supported rate, then checks that an unknown code is
/// reported as not found.
pub async fn show_demo<S: RateSource>(service: &RateService<S>) -> Result<String> {
    let mut lines = Vec::new();
    for code in CurrencyCode::supported() {
        lines.push(show_rate(service, *code).await?);
    }
    lines.push(show_cross_rate(service, CurrencyCode::Usd, CurrencyCode::Eur).await?);

    match service.source().fetch(CurrencyCode::Unspecified).await {
        Err(e) if e.is_not_found() => {
            info!("Unspecified currency reported as not found");
            lines.push(style_text(
                "UNSPECIFIED: not found, as expected",
                StyleType::Subtle,
            ));
        }
        Err(e) => return Err(e).context("Unexpected failure for unspecified currency"),
        Ok(rate) => {
            return Err(anyhow!(
                "Expected no rate for UNSPECIFIED, got {}",
                rate
            ));
        }
    }

    Ok(lines.join("\n"))
}
