use crate::config::SmtpConfig;
use crate::services::metrics::record_delivery;
use crate::services::providers::{MailTransport, ProviderError, ProviderResponse};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message,
};
use secrecy::ExposeSecret;
use std::sync::Arc;

pub struct EmailSender {
    config: SmtpConfig,
    transport: Arc<dyn MailTransport>,
}

impl EmailSender {
    pub fn new(config: SmtpConfig, transport: Arc<dyn MailTransport>) -> Self {
        Self { config, transport }
    }

    /// Sender account, password and recipient are all present.
    pub fn is_configured(&self) -> bool {
        self.config.user.is_some()
            && self.config.password.is_some()
            && self.config.recipient.is_some()
    }

    /// Build and submit one plain-text message. No connection is attempted unless
    /// every credential is configured.
    pub async fn try_send(
        &self,
        subject: &str,
        body: &str,
    ) -> Result<ProviderResponse, ProviderError> {
        let (user, password, recipient) = match (
            &self.config.user,
            &self.config.password,
            &self.config.recipient,
        ) {
            (Some(user), Some(password), Some(recipient)) => (user, password, recipient),
            _ => {
                return Err(ProviderError::NotEnabled(
                    "Email credentials incomplete".to_string(),
                ))
            }
        };

        let from_mailbox: Mailbox = user
            .parse()
            .map_err(|e| ProviderError::Configuration(format!("Invalid from address: {}", e)))?;

        let to_mailbox: Mailbox = recipient
            .parse()
            .map_err(|e| ProviderError::InvalidRecipient(format!("Invalid recipient: {}", e)))?;

        let message = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| ProviderError::SendFailed(format!("Failed to build message: {}", e)))?;

        let credentials = Credentials::new(user.clone(), password.expose_secret().clone());

        self.transport.deliver(credentials, message).await
    }

    /// Deliver the message and report success. Errors are logged, never returned.
    pub async fn send(&self, subject: &str, body: &str) -> bool {
        match self.try_send(subject, body).await {
            Ok(response) => {
                tracing::info!(
                    to = self.config.recipient.as_deref().unwrap_or_default(),
                    provider_id = response.provider_id.as_deref().unwrap_or("-"),
                    "Email sent successfully"
                );
                record_delivery("email", "success");
                true
            }
            Err(ProviderError::NotEnabled(reason)) => {
                tracing::warn!("{} - skipping email", reason);
                record_delivery("email", "skipped");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Error sending email");
                record_delivery("email", "failure");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockMailTransport;
    use secrecy::Secret;

    fn complete_config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.test.local".to_string(),
            port: 587,
            user: Some("sender@example.com".to_string()),
            password: Some(Secret::new("app-password".to_string())),
            recipient: Some("love@example.com".to_string()),
        }
    }

    #[tokio::test]
    async fn missing_any_credential_skips_the_transport() {
        let incomplete = [
            SmtpConfig {
                user: None,
                ..complete_config()
            },
            SmtpConfig {
                password: None,
                ..complete_config()
            },
            SmtpConfig {
                recipient: None,
                ..complete_config()
            },
        ];

        for config in incomplete {
            let transport = Arc::new(MockMailTransport::new());
            let sender = EmailSender::new(config, transport.clone());

            assert!(!sender.is_configured());
            assert!(!sender.send("asunto", "cuerpo").await);
            assert_eq!(transport.deliver_count(), 0);
        }
    }

    #[tokio::test]
    async fn sends_one_plain_text_message() {
        let transport = Arc::new(MockMailTransport::new());
        let sender = EmailSender::new(complete_config(), transport.clone());

        assert!(sender.send("✨ Tus horóscopos ✨", "Hola mi amor").await);
        assert_eq!(transport.deliver_count(), 1);

        let raw = &transport.delivered()[0];
        assert!(raw.contains("From: sender@example.com"));
        assert!(raw.contains("To: love@example.com"));
        assert!(raw.contains("Content-Type: text/plain; charset=utf-8"));
    }

    #[tokio::test]
    async fn relay_failure_reports_false() {
        let transport = Arc::new(MockMailTransport::rejecting());
        let sender = EmailSender::new(complete_config(), transport.clone());

        assert!(!sender.send("asunto", "cuerpo").await);
        assert_eq!(transport.deliver_count(), 1);
    }

    #[tokio::test]
    async fn malformed_recipient_fails_before_delivery() {
        let transport = Arc::new(MockMailTransport::new());
        let config = SmtpConfig {
            recipient: Some("not an address".to_string()),
            ..complete_config()
        };
        let sender = EmailSender::new(config, transport.clone());

        assert!(matches!(
            sender.try_send("asunto", "cuerpo").await,
            Err(ProviderError::InvalidRecipient(_))
        ));
        assert_eq!(transport.deliver_count(), 0);
    }
}
