pub mod email;
pub mod horoscope;
pub mod sms;
pub mod translation;

use crate::models::ZodiacSign;
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::Message;
use thiserror::Error;

pub use email::{MockMailTransport, SmtpRelay};
pub use horoscope::{MockHoroscopeProvider, RapidApiHoroscopeProvider};
pub use sms::{MockSmsProvider, TwilioProvider};
pub use translation::{GoogleTranslateProvider, MockTranslationProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not enabled: {0}")]
    NotEnabled(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Send error: {0}")]
    SendFailed(String),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Authentication error: {0}")]
    Authentication(String),
}

impl ProviderError {
    /// Classify a transport-level `reqwest` failure.
    pub fn from_reqwest(context: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(format!("{}: {}", context, err))
        } else if err.is_decode() {
            ProviderError::InvalidResponse(format!("{}: {}", context, err))
        } else {
            ProviderError::Connection(format!("{}: {}", context, err))
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub provider_id: Option<String>,
    pub success: bool,
}

impl ProviderResponse {
    pub fn success(provider_id: Option<String>) -> Self {
        Self {
            provider_id,
            success: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmsMessage {
    pub from: String,
    pub to: String,
    pub body: String,
}

/// Source of raw English horoscope text.
#[async_trait]
pub trait HoroscopeProvider: Send + Sync {
    async fn fetch(&self, sign: ZodiacSign) -> Result<String, ProviderError>;
}

/// Machine translation between two language codes.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError>;
}

/// Authenticated submission of one built message to a mail relay.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(
        &self,
        credentials: Credentials,
        message: Message,
    ) -> Result<ProviderResponse, ProviderError>;
}

#[async_trait]
pub trait SmsProvider: Send + Sync {
    async fn send(&self, sms: &SmsMessage) -> Result<ProviderResponse, ProviderError>;
}
