//! service-core: Shared infrastructure for the horoscope services.
pub mod config;
pub mod error;
pub mod observability;
