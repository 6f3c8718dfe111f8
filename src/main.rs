//! BioSentinel+ API server

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use biosentinel::adapters::content::source_for;
use biosentinel::adapters::http::{api_router, AppState};
use biosentinel::config::{self, AppConfig};
use biosentinel::ports::TipCatalogError;

/// Failures that stop the server before it starts serving
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] config::ValidationError),

    #[error("Tip catalog unavailable: {0}")]
    TipCatalog(#[from] TipCatalogError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let source = source_for(config.content.tips_path.as_deref());
    let catalog = source.load().await.inspect_err(|e| {
        tracing::error!(error = %e, source = %source.describe(), "Failed to load tip catalog");
    })?;
    info!(
        source = %source.describe(),
        categories = catalog.len(),
        "Tip catalog loaded"
    );

    let app = api_router(AppState::new(catalog), &config.server, &config.features);

    let addr = config.server.resolve_addr().await?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        "BioSentinel+ API listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
