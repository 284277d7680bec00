//! The daily run: compose every sign, lay out both bodies, deliver on both channels.

use crate::models::{DeliveryReport, ZodiacSign};
use crate::services::channels::{EmailSender, SmsSender};
use crate::services::composer::MessageComposer;
use crate::services::content::{email_body, email_subject, sms_body};
use chrono::{Local, NaiveDate};
use std::sync::Arc;

pub struct DailyPipeline {
    signs: Vec<ZodiacSign>,
    composer: MessageComposer,
    email: EmailSender,
    sms: SmsSender,
}

impl DailyPipeline {
    pub fn new(
        signs: Vec<ZodiacSign>,
        composer: MessageComposer,
        email: EmailSender,
        sms: SmsSender,
    ) -> Self {
        Self {
            signs,
            composer,
            email,
            sms,
        }
    }

    /// Compose one message per configured sign, sequentially and in order.
    pub async fn compose_all(&self) -> Vec<String> {
        let mut messages = Vec::with_capacity(self.signs.len());
        for sign in &self.signs {
            messages.push(self.composer.compose(*sign).await);
        }
        messages
    }

    pub async fn run(&self) -> DeliveryReport {
        self.run_for(Local::now().date_naive()).await
    }

    /// Run the whole pipeline as if `today` were the current date. Channels are
    /// attempted in sequence and independently.
    pub async fn run_for(&self, today: NaiveDate) -> DeliveryReport {
        tracing::info!("Starting daily horoscope delivery...");

        let messages = self.compose_all().await;

        let subject = email_subject(today);
        let email_sent = self.email.send(&subject, &email_body(today, &messages)).await;
        let sms_sent = self.sms.send(&sms_body(today, &messages)).await;

        let report = DeliveryReport {
            email_sent,
            sms_sent,
        };
        tracing::info!("Daily horoscope delivery completed - {}", report);
        report
    }

    /// Run on a separate task so that a panic anywhere in the run is contained.
    /// Returns `None` when the run was abandoned.
    pub async fn run_guarded(self: &Arc<Self>) -> Option<DeliveryReport> {
        let pipeline = Arc::clone(self);
        match tokio::spawn(async move { pipeline.run().await }).await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::error!(error = %e, "Error in daily horoscope delivery");
                None
            }
        }
    }
}
