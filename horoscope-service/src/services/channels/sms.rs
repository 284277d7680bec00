use crate::config::TwilioConfig;
use crate::services::metrics::record_delivery;
use crate::services::providers::{SmsMessage, SmsProvider};
use std::sync::Arc;

pub struct SmsSender {
    provider: Option<Arc<dyn SmsProvider>>,
    from_number: String,
    recipients: Vec<String>,
}

impl SmsSender {
    pub fn new(provider: Option<Arc<dyn SmsProvider>>, config: &TwilioConfig) -> Self {
        Self {
            provider,
            from_number: config.from_number.clone().unwrap_or_default(),
            recipients: config.recipients.clone(),
        }
    }

    /// Send `body` to every recipient independently. Succeeds when at least one
    /// recipient accepted the message.
    pub async fn send(&self, body: &str) -> bool {
        let Some(provider) = &self.provider else {
            tracing::warn!("SMS configuration incomplete - skipping SMS");
            record_delivery("sms", "skipped");
            return false;
        };

        if self.recipients.is_empty() {
            tracing::warn!("No phone numbers configured - skipping SMS");
            record_delivery("sms", "skipped");
            return false;
        }

        let mut success_count = 0usize;

        for (index, phone_number) in self.recipients.iter().enumerate() {
            let recipient_name = format!("recipient-{}", index + 1);
            let sms = SmsMessage {
                from: self.from_number.clone(),
                to: phone_number.clone(),
                body: body.to_string(),
            };

            match provider.send(&sms).await {
                Ok(response) => {
                    tracing::info!(
                        recipient = %recipient_name,
                        to = %phone_number,
                        sid = response.provider_id.as_deref().unwrap_or("-"),
                        "SMS sent successfully"
                    );
                    success_count += 1;
                }
                Err(e) => {
                    tracing::error!(
                        recipient = %recipient_name,
                        to = %phone_number,
                        error = %e,
                        "Error sending SMS"
                    );
                }
            }
        }

        let delivered = success_count > 0;
        record_delivery("sms", if delivered { "success" } else { "failure" });
        delivered
    }
}
