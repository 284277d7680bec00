use super::{ProviderError, ProviderResponse, SmsMessage, SmsProvider};
use crate::config::TwilioConfig;
use crate::services::metrics::record_provider_call;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub struct TwilioProvider {
    account_sid: String,
    auth_token: Secret<String>,
    api_base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TwilioMessage {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioError {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

impl TwilioProvider {
    /// Returns `None` when the account SID or auth token is missing.
    pub fn from_config(config: &TwilioConfig) -> Option<Self> {
        match (&config.account_sid, &config.auth_token) {
            (Some(sid), Some(token)) => Some(Self {
                account_sid: sid.clone(),
                auth_token: token.clone(),
                api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
                client: Client::new(),
            }),
            _ => None,
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base_url, self.account_sid
        )
    }

    async fn request(&self, sms: &SmsMessage) -> Result<ProviderResponse, ProviderError> {
        if sms.from.is_empty() {
            return Err(ProviderError::Configuration(
                "TWILIO_PHONE_NUMBER is not configured".to_string(),
            ));
        }

        // Keep digits and the leading +
        let normalized_phone = sms
            .to
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();

        if normalized_phone.is_empty() {
            return Err(ProviderError::InvalidRecipient(
                "Phone number is empty".to_string(),
            ));
        }

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&[
                ("To", normalized_phone.as_str()),
                ("From", sms.from.as_str()),
                ("Body", sms.body.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest("Failed to connect to Twilio", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<TwilioError>()
                .await
                .ok()
                .map(|e| {
                    format!(
                        "{} (code {})",
                        e.message.unwrap_or_default(),
                        e.code.map(|c| c.to_string()).unwrap_or_else(|| "-".into())
                    )
                })
                .unwrap_or_default();

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ProviderError::Authentication(format!("Twilio rejected credentials: {}", detail))
                }
                _ => ProviderError::SendFailed(format!(
                    "Twilio API returned error status {}: {}",
                    status, detail
                )),
            });
        }

        let message: TwilioMessage = response
            .json()
            .await
            .map_err(|e| ProviderError::from_reqwest("Failed to parse Twilio response", e))?;

        Ok(ProviderResponse::success(Some(message.sid)))
    }
}

#[async_trait]
impl SmsProvider for TwilioProvider {
    async fn send(&self, sms: &SmsMessage) -> Result<ProviderResponse, ProviderError> {
        let result = self.request(sms).await;
        record_provider_call("twilio", if result.is_ok() { "success" } else { "failure" });
        result
    }
}

/// Mock SMS provider for testing
pub struct MockSmsProvider {
    failing_numbers: HashSet<String>,
    send_count: AtomicU64,
    sent: Mutex<Vec<SmsMessage>>,
}

impl MockSmsProvider {
    pub fn new() -> Self {
        Self {
            failing_numbers: HashSet::new(),
            send_count: AtomicU64::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Rejects messages addressed to any of `numbers`.
    pub fn failing_for<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failing_numbers: numbers.into_iter().map(Into::into).collect(),
            ..Self::new()
        }
    }

    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }

    /// Every message the mock accepted.
    pub fn sent(&self) -> Vec<SmsMessage> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

impl Default for MockSmsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn send(&self, sms: &SmsMessage) -> Result<ProviderResponse, ProviderError> {
        let count = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.failing_numbers.contains(&sms.to) {
            return Err(ProviderError::InvalidRecipient(format!(
                "Mock SMS provider rejects {}",
                sms.to
            )));
        }

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(sms.clone());
        }

        tracing::info!(
            to = %sms.to,
            body_length = %sms.body.len(),
            "[MOCK] SMS would be sent"
        );

        Ok(ProviderResponse::success(Some(format!("mock-sms-{}", count))))
    }
}
