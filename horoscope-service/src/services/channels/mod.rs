//! Delivery channels. Each reports its own success flag and never fails the run.

pub mod email;
pub mod sms;

pub use email::EmailSender;
pub use sms::SmsSender;
