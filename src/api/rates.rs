//! Market data endpoints backing the header widgets.

use serde::Deserialize;

use super::client::{get_json, ApiError};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsdTryResponse {
    pub usd_try: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GoldPriceResponse {
    #[serde(rename = "goldPriceTRY")]
    pub gold_price_try: f64,
}

/// Latest USD/TRY rate from the central-bank ratings service.
pub async fn usd_try_rate() -> Result<UsdTryResponse, ApiError> {
    get_json(
        "/tcmbratings-service/usdtry",
        "Failed to fetch USD/TRY exchange rate",
    )
    .await
}

/// Latest gram-gold price in TRY from the scraping service.
pub async fn gold_price() -> Result<GoldPriceResponse, ApiError> {
    get_json("/scraping-service/goldprice", "Failed to fetch gold prices").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_responses_match_backend_field_names() {
        let usd: UsdTryResponse = serde_json::from_str(r#"{"usdTry":34.2175}"#).unwrap();
        assert!((usd.usd_try - 34.2175).abs() < f64::EPSILON);

        let gold: GoldPriceResponse = serde_json::from_str(r#"{"goldPriceTRY":3010.55}"#).unwrap();
        assert!((gold.gold_price_try - 3010.55).abs() < f64::EPSILON);
    }
}
