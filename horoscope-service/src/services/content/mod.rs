//! Static Spanish content and message layout.
//!
//! Everything here is pure: random choices take an injected [`rand::Rng`] and
//! dates are passed in, so callers decide what "today" is.

pub mod fallback;
pub mod format;

pub use fallback::{
    decorate, fetch_fallback, select_template, select_translation_fallback, templates,
    translation_fallbacks,
};
pub use format::{email_body, email_subject, format_date, sms_body};
