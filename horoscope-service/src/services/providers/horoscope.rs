//! Horoscope content provider (RapidAPI "horoscope-astrology").

use super::{HoroscopeProvider, ProviderError};
use crate::config::HoroscopeApiConfig;
use crate::models::ZodiacSign;
use crate::services::metrics::record_provider_call;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Returned when the provider answers without a `horoscope` field.
pub const MISSING_HOROSCOPE: &str = "No horoscope available";

pub struct RapidApiHoroscopeProvider {
    config: HoroscopeApiConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct HoroscopeResponse {
    #[serde(default)]
    horoscope: Option<String>,
}

impl RapidApiHoroscopeProvider {
    pub fn new(config: HoroscopeApiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/horoscope", self.config.base_url.trim_end_matches('/'))
    }

    async fn request(&self, sign: ZodiacSign) -> Result<String, ProviderError> {
        let api_key = self.config.api_key.as_ref().ok_or_else(|| {
            ProviderError::NotEnabled("RAPIDAPI_KEY is not configured".to_string())
        })?;

        let response = self
            .client
            .get(self.endpoint())
            .header("x-rapidapi-host", &self.config.host)
            .header("x-rapidapi-key", api_key.expose_secret())
            .query(&[("day", "today"), ("sunsign", sign.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest("Horoscope request failed", e))?;

        if !response.status().is_success() {
            return Err(ProviderError::InvalidResponse(format!(
                "Horoscope API returned status {}",
                response.status()
            )));
        }

        let body: HoroscopeResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::from_reqwest("Failed to parse horoscope response", e))?;

        // Only an absent field is substituted; an empty one is passed through as sent.
        Ok(body.horoscope.unwrap_or_else(|| MISSING_HOROSCOPE.to_string()))
    }
}

#[async_trait]
impl HoroscopeProvider for RapidApiHoroscopeProvider {
    async fn fetch(&self, sign: ZodiacSign) -> Result<String, ProviderError> {
        let result = self.request(sign).await;
        record_provider_call("rapidapi", if result.is_ok() { "success" } else { "failure" });
        result
    }
}

/// Mock horoscope provider for testing
pub struct MockHoroscopeProvider {
    text: Option<String>,
    fetch_count: AtomicU64,
}

impl MockHoroscopeProvider {
    /// Answers every sign with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            fetch_count: AtomicU64::new(0),
        }
    }

    /// Fails every fetch with a connection error.
    pub fn failing() -> Self {
        Self {
            text: None,
            fetch_count: AtomicU64::new(0),
        }
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HoroscopeProvider for MockHoroscopeProvider {
    async fn fetch(&self, sign: ZodiacSign) -> Result<String, ProviderError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        match &self.text {
            Some(text) => {
                tracing::info!(sign = %sign, "[MOCK] Horoscope fetched");
                Ok(text.clone())
            }
            None => Err(ProviderError::Connection(
                "Mock horoscope provider is offline".to_string(),
            )),
        }
    }
}
