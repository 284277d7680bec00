//! Translation provider backed by the public Google Translate endpoint.

use super::{ProviderError, TranslationProvider};
use crate::config::TranslationConfig;
use crate::services::metrics::record_provider_call;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct GoogleTranslateProvider {
    config: TranslationConfig,
    client: Client,
}

impl GoogleTranslateProvider {
    pub fn new(config: TranslationConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/translate_a/single",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn request(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest("Translation request failed", e))?;

        if !response.status().is_success() {
            return Err(ProviderError::InvalidResponse(format!(
                "Translation API returned status {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::from_reqwest("Failed to parse translation response", e))?;

        extract_translation(&body)
    }
}

/// The response is a nested array; the first element lists sentence segments as
/// `[translated, original, ...]`.
fn extract_translation(body: &Value) -> Result<String, ProviderError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::InvalidResponse("missing translation segments".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(ProviderError::InvalidResponse(
            "translation response was empty".into(),
        ));
    }
    Ok(translated)
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let result = self.request(text, source, target).await;
        let status = if result.is_ok() { "success" } else { "failure" };
        record_provider_call("google_translate", status);
        result
    }
}

/// Mock translation provider for testing
pub struct MockTranslationProvider {
    translated: Option<String>,
    translate_count: AtomicU64,
}

impl MockTranslationProvider {
    /// Returns `translated` for any input.
    pub fn returning(translated: impl Into<String>) -> Self {
        Self {
            translated: Some(translated.into()),
            translate_count: AtomicU64::new(0),
        }
    }

    /// Fails every call with a timeout.
    pub fn timing_out() -> Self {
        Self {
            translated: None,
            translate_count: AtomicU64::new(0),
        }
    }

    pub fn translate_count(&self) -> u64 {
        self.translate_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for MockTranslationProvider {
    async fn translate(
        &self,
        _text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, ProviderError> {
        self.translate_count.fetch_add(1, Ordering::SeqCst);

        self.translated.clone().ok_or_else(|| {
            ProviderError::Timeout("Mock translation provider timed out".to_string())
        })
    }
}
