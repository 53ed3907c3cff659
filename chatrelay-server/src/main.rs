//! chatrelay server binary

use anyhow::{Context, Result};
use chatrelay_core::config::{RelayConfig, SafeLogging};
use chatrelay_core::http::HttpClient;
use chatrelay_core::providers::{AdapterRegistry, ProviderKind};
use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "chatrelay", version, about = "Normalize chat requests across LLM providers")]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "CHATRELAY_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Provider used by `POST /api/ai`
    #[arg(long, env = "CHATRELAY_PROVIDER", default_value = "deepseek")]
    provider: ProviderKind,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "CHATRELAY_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = RelayConfig::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded: {}", config.deepseek.safe_for_logging());
    info!("Configuration loaded: {}", config.openai.safe_for_logging());

    if config.deepseek.api_key.is_none() {
        warn!("DEEPSEEK_API_KEY is not set; deepseek requests will fail");
    }
    if config.openai.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; openai requests will fail");
    }

    let http = HttpClient::new().context("Failed to create HTTP client")?;
    let registry = AdapterRegistry::from_config(&config, cli.provider, http);
    let app = chatrelay_server::app(registry);

    let listener = TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", cli.bind))?;

    info!("Listening on {} (default provider: {})", cli.bind, cli.provider);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
