//! Application startup and lifecycle management.
//!
//! Wires providers into the delivery pipeline, runs the optional health server on
//! its own task and drives the scheduler until the process is signalled.

use crate::config::HoroscopeConfig;
use crate::handlers::{health_check, metrics_endpoint, not_found, readiness_check};
use crate::scheduler::Scheduler;
use crate::services::{
    DailyPipeline, EmailSender, GoogleTranslateProvider, MessageComposer,
    RapidApiHoroscopeProvider, SmsProvider, SmsSender, SmtpRelay, TwilioProvider,
};
use axum::{routing::get, Router};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Router for the liveness/readiness endpoints.
pub fn health_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// Minimal HTTP server for container probes.
pub struct HealthServer {
    port: u16,
    listener: TcpListener,
}

impl HealthServer {
    /// Bind on all interfaces (port 0 = random port for testing).
    pub async fn build(port: u16) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind health listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Health check server started on port {}", self.port);
        axum::serve(self.listener, health_router()).await
    }
}

/// Production wiring of every provider from configuration.
pub fn build_pipeline(config: &HoroscopeConfig) -> Result<DailyPipeline, AppError> {
    let horoscope = RapidApiHoroscopeProvider::new(config.horoscope_api.clone())
        .map_err(|e| AppError::ConfigError(e.into()))?;
    let translator = GoogleTranslateProvider::new(config.translation.clone())
        .map_err(|e| AppError::ConfigError(e.into()))?;

    if config.horoscope_api.api_key.is_none() {
        tracing::warn!("RAPIDAPI_KEY not provided - fallback horoscopes will be used");
    }

    let email = EmailSender::new(
        config.smtp.clone(),
        Arc::new(SmtpRelay::new(config.smtp.host.clone(), config.smtp.port)),
    );
    if !email.is_configured() {
        tracing::warn!("Email credentials not provided - email disabled");
    }

    let sms_provider: Option<Arc<dyn SmsProvider>> = match TwilioProvider::from_config(&config.twilio)
    {
        Some(provider) => {
            tracing::info!("Twilio SMS provider initialized");
            Some(Arc::new(provider))
        }
        None => {
            tracing::warn!("Twilio credentials not provided - SMS disabled");
            None
        }
    };
    let sms = SmsSender::new(sms_provider, &config.twilio);

    Ok(DailyPipeline::new(
        config.signs.clone(),
        MessageComposer::new(Arc::new(horoscope), Arc::new(translator)),
        email,
        sms,
    ))
}

/// Application container for managing the process lifecycle.
pub struct Application {
    config: HoroscopeConfig,
    pipeline: Arc<DailyPipeline>,
}

impl Application {
    pub fn build(config: HoroscopeConfig) -> Result<Self, AppError> {
        let pipeline = Arc::new(build_pipeline(&config)?);
        Ok(Self::with_pipeline(config, pipeline))
    }

    /// Use a pre-built pipeline instead of the configured providers.
    pub fn with_pipeline(config: HoroscopeConfig, pipeline: Arc<DailyPipeline>) -> Self {
        Self { config, pipeline }
    }

    /// Run until SIGINT/SIGTERM. A health server failure is logged and leaves the
    /// scheduler running.
    pub async fn run_until_stopped(self) {
        if self.config.health.enabled {
            let port = self.config.health.port;
            tokio::spawn(async move {
                let result = match HealthServer::build(port).await {
                    Ok(server) => server.run_until_stopped().await.map_err(AppError::from),
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    tracing::error!("Health server stopped: {}", e);
                }
            });
        } else {
            tracing::info!("Health check server disabled");
        }

        if self.config.send_on_startup {
            tracing::info!("Sending horoscopes on startup...");
            self.pipeline.run_guarded().await;
        }

        let scheduler = Scheduler::new(Arc::clone(&self.pipeline), &self.config.schedule);
        tracing::info!(
            "Scheduler started - horoscopes will be sent daily at {}",
            self.config.schedule.run_at.format("%H:%M")
        );

        tokio::select! {
            _ = scheduler.run() => {},
            _ = shutdown_signal() => {},
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
