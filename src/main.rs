use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod domain;
mod metrics;
mod notify;
mod server;

use config::AppConfig;
use domain::order::SubmissionHandler;
use notify::{Notifier, SmtpNotifier};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,woodcrate=debug")),
        )
        .init();

    tracing::info!("🚀 Starting woodcrate order service");

    // === 1. Load and validate configuration ===
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!(
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        "SMTP transport configured"
    );

    // === 2. Initialize Prometheus metrics ===
    let metrics = Arc::new(metrics::Metrics::new()?);
    tracing::info!(
        "📊 Metrics registry created with {} metrics",
        metrics.registry().gather().len()
    );

    // === 3. Create the SMTP notifier ===
    let notifier: Arc<dyn Notifier> = Arc::new(SmtpNotifier::new(&config.smtp)?);

    // === 4. Wire the submission flow ===
    let handler = Arc::new(SubmissionHandler::new(notifier, metrics.clone()));

    // === 5. Serve the API ===
    server::run(handler, metrics, config.http_port).await?;

    Ok(())
}
