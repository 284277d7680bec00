//! Horoscope Service - daily Spanish horoscopes delivered over email and SMS.

pub mod config;
pub mod handlers;
pub mod models;
pub mod scheduler;
pub mod services;
pub mod startup;
