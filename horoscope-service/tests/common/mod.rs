#![allow(dead_code)]

use horoscope_service::config::{HoroscopeConfig, SmtpConfig, TwilioConfig};
use horoscope_service::services::{
    DailyPipeline, EmailSender, HoroscopeProvider, MailTransport, MessageComposer, SmsProvider,
    SmsSender, TranslationProvider,
};
use horoscope_service::startup::HealthServer;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::collections::HashMap;
use std::sync::Arc;

pub const FROM_NUMBER: &str = "+15550000000";

/// Configuration as if the process environment held exactly `pairs`.
pub fn config_from(pairs: &[(&str, &str)]) -> HoroscopeConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    HoroscopeConfig::from_lookup(CoreConfig::default(), |key| vars.get(key).cloned())
        .expect("Failed to build test configuration")
}

pub fn smtp_config() -> SmtpConfig {
    SmtpConfig {
        host: "smtp.test.local".to_string(),
        port: 587,
        user: Some("sender@example.com".to_string()),
        password: Some(Secret::new("app-password".to_string())),
        recipient: Some("love@example.com".to_string()),
    }
}

pub fn twilio_config(recipients: &[&str]) -> TwilioConfig {
    TwilioConfig {
        account_sid: Some("AC123".to_string()),
        auth_token: Some(Secret::new("secret-token".to_string())),
        from_number: Some(FROM_NUMBER.to_string()),
        recipients: recipients.iter().map(|r| r.to_string()).collect(),
        api_base_url: "http://127.0.0.1:1".to_string(),
    }
}

pub struct TestPipeline {
    pub horoscope: Arc<dyn HoroscopeProvider>,
    pub translator: Arc<dyn TranslationProvider>,
    pub mail: Arc<dyn MailTransport>,
    pub sms: Option<Arc<dyn SmsProvider>>,
    pub smtp: SmtpConfig,
    pub twilio: TwilioConfig,
}

impl TestPipeline {
    pub fn build(self) -> DailyPipeline {
        let config = config_from(&[]);
        DailyPipeline::new(
            config.signs,
            MessageComposer::new(self.horoscope, self.translator),
            EmailSender::new(self.smtp, self.mail),
            SmsSender::new(self.sms, &self.twilio),
        )
    }
}

pub struct TestHealthApp {
    pub address: String,
    pub port: u16,
}

impl TestHealthApp {
    pub async fn spawn() -> Self {
        let server = HealthServer::build(0)
            .await
            .expect("Failed to bind health server");
        let port = server.port();

        tokio::spawn(async move {
            server.run_until_stopped().await.ok();
        });

        TestHealthApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }
}
