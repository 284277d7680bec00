//! HTTP handlers for the health server.
//!
//! These only prove the process is alive; they never look at pipeline state.

pub mod health;

pub use health::{health_check, metrics_endpoint, not_found, readiness_check, SERVICE_NAME};
