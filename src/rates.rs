//! Historical exchange rates.
//!
//! A rate is the number of units of the target currency bought by one unit of
//! the source currency, so a source amount is multiplied by it.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

use crate::billing::Period;
use crate::calendar::parse_ymd;
use crate::error::ConversionError;
use crate::historical::Historical;

pub const APILAYER_TIMESERIES_URL: &str =
    "https://api.apilayer.com/exchangerates_data/timeseries";

#[derive(Debug, PartialEq, Clone)]
pub struct RateQuery {
    pub period: Period,
    pub from: &'static str,
    pub to: &'static str,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(
        &self,
        query: &RateQuery,
    ) -> Result<Historical<Decimal>, ConversionError>;
}

/// Client for the apilayer exchange rates time series endpoint.
pub struct ApiLayer {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct TimeSeries {
    rates: Option<BTreeMap<String, HashMap<String, Decimal>>>,
}

impl ApiLayer {
    pub fn new(api_key: Option<String>) -> Result<Self, ConversionError> {
        Self::with_base_url(APILAYER_TIMESERIES_URL.to_string(), api_key)
    }

    pub fn with_base_url(
        base_url: String,
        api_key: Option<String>,
    ) -> Result<Self, ConversionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }
}

#[async_trait]
impl RateProvider for ApiLayer {
    async fn fetch_rates(
        &self,
        query: &RateQuery,
    ) -> Result<Historical<Decimal>, ConversionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ConversionError::MissingApiKey)?;

        info!(
            from = query.from,
            to = query.to,
            period = %query.period,
            "fetching historical exchange rates"
        );
        let resp = self
            .client
            .get(&self.base_url)
            .header("apikey", api_key)
            .query(&[
                ("start_date", query.period.from.to_string()),
                ("end_date", query.period.until.to_string()),
                ("base", query.from.to_string()),
                ("symbols", query.to.to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ConversionError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let series = parse_time_series(&body, query.to)?;
        debug!(days = series.len(), "received exchange rates");
        Ok(series)
    }
}

fn parse_time_series(
    body: &str,
    symbol: &str,
) -> Result<Historical<Decimal>, ConversionError> {
    let series: TimeSeries = serde_json::from_str(body)?;
    let rates = series.rates.ok_or_else(|| ConversionError::InvalidResponse {
        reason: "missing 'rates'".to_string(),
    })?;

    rates
        .into_iter()
        .map(|(day, by_symbol)| {
            let date = parse_ymd(&day).map_err(|_| {
                ConversionError::InvalidResponse {
                    reason: format!("unexpected date '{}'", day),
                }
            })?;
            let rate = by_symbol.get(symbol).copied().ok_or_else(|| {
                ConversionError::InvalidResponse {
                    reason: format!("no {} rate on {}", symbol, day),
                }
            })?;
            Ok((date, rate))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    const BODY: &str = r#"{
        "success": true,
        "timeseries": true,
        "start_date": "2024-01-03",
        "end_date": "2024-01-04",
        "base": "CAD",
        "rates": {
            "2024-01-03": { "USD": 0.75 },
            "2024-01-04": { "USD": 0.5 }
        }
    }"#;

    #[test]
    fn decodes_time_series() {
        let series = parse_time_series(BODY, "USD").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.on(ymd(2024, 1, 3)), Some(&dec!(0.75)));
        assert_eq!(series.on(ymd(2024, 1, 4)), Some(&dec!(0.5)));
    }

    #[test]
    fn missing_symbol() {
        assert!(matches!(
            parse_time_series(BODY, "EUR"),
            Err(ConversionError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn missing_rates() {
        let body = r#"{ "success": false, "error": { "code": 101 } }"#;
        assert!(matches!(
            parse_time_series(body, "USD"),
            Err(ConversionError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            parse_time_series("<html>", "USD"),
            Err(ConversionError::Json { .. })
        ));
    }

    #[test]
    fn bad_date_key() {
        let body = r#"{ "rates": { "yesterday": { "USD": 0.5 } } }"#;
        assert!(matches!(
            parse_time_series(body, "USD"),
            Err(ConversionError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn requires_api_key() {
        let provider = ApiLayer::new(Some("  ".to_string())).unwrap();
        let query = RateQuery {
            period: Period::new(ymd(2024, 1, 3), ymd(2024, 1, 3)),
            from: "CAD",
            to: "USD",
        };
        assert!(matches!(
            provider.fetch_rates(&query).await,
            Err(ConversionError::MissingApiKey)
        ));
    }
}
