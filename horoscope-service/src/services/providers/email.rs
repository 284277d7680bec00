use super::{MailTransport, ProviderError, ProviderResponse};
use async_trait::async_trait;
use lettre::{
    transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport, Message,
    Tokio1Executor,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// STARTTLS submission to a mail relay. A fresh connection is opened per delivery.
pub struct SmtpRelay {
    host: String,
    port: u16,
    timeout: Duration,
}

impl SmtpRelay {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Duration::from_secs(30),
        }
    }
}

fn classify(err: lettre::transport::smtp::Error) -> ProviderError {
    if err.is_permanent() || err.is_transient() {
        ProviderError::SendFailed(format!("SMTP relay rejected the message: {}", err))
    } else {
        ProviderError::Connection(format!("Failed to send email: {}", err))
    }
}

#[async_trait]
impl MailTransport for SmtpRelay {
    async fn deliver(
        &self,
        credentials: Credentials,
        message: Message,
    ) -> Result<ProviderResponse, ProviderError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create SMTP relay: {}", e))
            })?
            .port(self.port)
            .credentials(credentials)
            .timeout(Some(self.timeout))
            .build();

        let response = transport.send(message).await.map_err(classify)?;
        let provider_id = response.message().next().map(|s| s.to_string());

        Ok(ProviderResponse::success(provider_id))
    }
}

/// Mock mail transport for testing
pub struct MockMailTransport {
    fail: bool,
    deliver_count: AtomicU64,
    delivered: Mutex<Vec<String>>,
}

impl MockMailTransport {
    pub fn new() -> Self {
        Self {
            fail: false,
            deliver_count: AtomicU64::new(0),
            delivered: Mutex::new(Vec::new()),
        }
    }

    /// Rejects every delivery as an authentication failure.
    pub fn rejecting() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn deliver_count(&self) -> u64 {
        self.deliver_count.load(Ordering::SeqCst)
    }

    /// Raw RFC 5322 text of every accepted message.
    pub fn delivered(&self) -> Vec<String> {
        self.delivered
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Default for MockMailTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for MockMailTransport {
    async fn deliver(
        &self,
        _credentials: Credentials,
        message: Message,
    ) -> Result<ProviderResponse, ProviderError> {
        let count = self.deliver_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail {
            return Err(ProviderError::Authentication(
                "Mock relay refused the credentials".to_string(),
            ));
        }

        if let Ok(mut delivered) = self.delivered.lock() {
            delivered.push(String::from_utf8_lossy(&message.formatted()).into_owned());
        }

        tracing::info!("[MOCK] Email would be sent");

        Ok(ProviderResponse::success(Some(format!("mock-email-{}", count))))
    }
}
