pub mod channels;
pub mod composer;
pub mod content;
pub mod metrics;
pub mod pipeline;
pub mod providers;

pub use channels::{EmailSender, SmsSender};
pub use composer::MessageComposer;
pub use metrics::{get_metrics, init_metrics, record_delivery, record_provider_call};
pub use pipeline::DailyPipeline;
pub use providers::{
    GoogleTranslateProvider, HoroscopeProvider, MailTransport, MockHoroscopeProvider,
    MockMailTransport, MockSmsProvider, MockTranslationProvider, ProviderError,
    ProviderResponse, RapidApiHoroscopeProvider, SmsMessage, SmsProvider, SmtpRelay,
    TranslationProvider, TwilioProvider,
};
