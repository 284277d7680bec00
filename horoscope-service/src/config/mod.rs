use crate::models::ZodiacSign;
use chrono::NaiveTime;
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_RAPIDAPI_HOST: &str = "horoscope-astrology.p.rapidapi.com";
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com";
pub const DEFAULT_TWILIO_URL: &str = "https://api.twilio.com";

/// Process-wide configuration, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct HoroscopeConfig {
    pub common: core_config::Config,
    pub smtp: SmtpConfig,
    pub twilio: TwilioConfig,
    pub horoscope_api: HoroscopeApiConfig,
    pub translation: TranslationConfig,
    pub schedule: ScheduleConfig,
    pub health: HealthConfig,
    /// Signs delivered on every run, in order.
    pub signs: Vec<ZodiacSign>,
    pub send_on_startup: bool,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<Secret<String>>,
    pub recipient: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<Secret<String>>,
    pub from_number: Option<String>,
    pub recipients: Vec<String>,
    pub api_base_url: String,
}

#[derive(Debug, Clone)]
pub struct HoroscopeApiConfig {
    pub base_url: String,
    pub host: String,
    pub api_key: Option<Secret<String>>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct TranslationConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub run_at: NaiveTime,
    pub poll_interval: Duration,
}

#[derive(Debug, Clone)]
pub struct HealthConfig {
    pub enabled: bool,
    pub port: u16,
}

impl HoroscopeConfig {
    /// Load from `.env`, the optional `configuration` file and the process environment.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let rapidapi_host = get("RAPIDAPI_HOST").unwrap_or_else(|| DEFAULT_RAPIDAPI_HOST.into());
        let horoscope_url = get("HOROSCOPE_API_URL")
            .unwrap_or_else(|| format!("https://{}", rapidapi_host));

        let signs = match get("HOROSCOPE_SIGNS") {
            Some(raw) => parse_signs(&raw)?,
            None => vec![ZodiacSign::Cancer, ZodiacSign::Aquarius],
        };

        let run_at = match get("SCHEDULE_TIME") {
            Some(raw) => NaiveTime::parse_from_str(&raw, "%H:%M").map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "SCHEDULE_TIME must be HH:MM, got '{}': {}",
                    raw,
                    e
                ))
            })?,
            None => NaiveTime::from_hms_opt(8, 0, 0)
                .ok_or_else(|| AppError::ConfigError(anyhow::anyhow!("invalid default time")))?,
        };

        let fetch_timeout =
            seconds("HOROSCOPE_TIMEOUT_SECONDS", get("HOROSCOPE_TIMEOUT_SECONDS"), 10)?;
        let translate_timeout =
            seconds("TRANSLATE_TIMEOUT_SECONDS", get("TRANSLATE_TIMEOUT_SECONDS"), 30)?;
        let poll_interval = seconds("SCHEDULE_POLL_SECONDS", get("SCHEDULE_POLL_SECONDS"), 60)?;

        Ok(HoroscopeConfig {
            smtp: SmtpConfig {
                host: get("SMTP_SERVER").unwrap_or_else(|| "smtp.gmail.com".into()),
                port: parse_or("SMTP_PORT", get("SMTP_PORT"), 587)?,
                user: get("EMAIL_USER"),
                password: get("EMAIL_PASSWORD").map(Secret::new),
                recipient: get("RECIPIENT_EMAIL"),
            },
            twilio: TwilioConfig {
                account_sid: get("TWILIO_ACCOUNT_SID"),
                auth_token: get("TWILIO_AUTH_TOKEN").map(Secret::new),
                from_number: get("TWILIO_PHONE_NUMBER"),
                recipients: get("RECIPIENT_PHONE")
                    .map(|raw| split_list(&raw))
                    .unwrap_or_default(),
                api_base_url: get("TWILIO_API_URL").unwrap_or_else(|| DEFAULT_TWILIO_URL.into()),
            },
            horoscope_api: HoroscopeApiConfig {
                base_url: horoscope_url,
                host: rapidapi_host,
                api_key: get("RAPIDAPI_KEY").map(Secret::new),
                timeout: fetch_timeout,
            },
            translation: TranslationConfig {
                base_url: get("TRANSLATE_API_URL").unwrap_or_else(|| DEFAULT_TRANSLATE_URL.into()),
                timeout: translate_timeout,
            },
            schedule: ScheduleConfig {
                run_at,
                poll_interval,
            },
            health: HealthConfig {
                enabled: flag(get("ENABLE_HEALTH_CHECK"), true),
                port: parse_or("HEALTH_PORT", get("HEALTH_PORT"), common.port)?,
            },
            signs,
            send_on_startup: flag(get("SEND_ON_STARTUP"), false),
            otlp_endpoint: get("OTLP_ENDPOINT"),
            common,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_signs(raw: &str) -> Result<Vec<ZodiacSign>, AppError> {
    let signs = split_list(raw)
        .iter()
        .map(|s| s.parse::<ZodiacSign>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!("HOROSCOPE_SIGNS: {}", e)))?;

    if signs.is_empty() {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "HOROSCOPE_SIGNS must name at least one sign"
        )));
    }
    Ok(signs)
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
        }),
        None => Ok(default),
    }
}

/// A strictly positive number of seconds.
fn seconds(key: &str, value: Option<String>, default: u64) -> Result<Duration, AppError> {
    match parse_or(key, value, default)? {
        0 => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} must be greater than zero",
            key
        ))),
        secs => Ok(Duration::from_secs(secs)),
    }
}

fn flag(value: Option<String>, default: bool) -> bool {
    value
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
