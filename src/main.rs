use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edge_router::config::{load_config, validate_config, ConfigError, RouterConfig};
use edge_router::lifecycle::{wait_for_signal, Shutdown};
use edge_router::observability::{logging, metrics};
use edge_router::HttpServer;

#[derive(Parser)]
#[command(name = "edge-router", version)]
#[command(about = "Forwards API paths to the backend origin and everything else to the frontend origin")]
struct Args {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(long)]
    bind: Option<String>,

    /// Override origins.frontend.
    #[arg(long)]
    frontend_origin: Option<String>,

    /// Override origins.backend.
    #[arg(long)]
    backend_origin: Option<String>,
}

fn resolve_config(args: Args) -> Result<RouterConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(frontend) = args.frontend_origin {
        config.origins.frontend = frontend;
    }
    if let Some(backend) = args.backend_origin {
        config.origins.backend = backend;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(Args::parse())?;

    logging::init_tracing(&config.observability.log_level);

    tracing::info!("edge-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        frontend = %config.origins.frontend,
        backend = %config.origins.backend,
        api_prefix = %config.routing.api_prefix,
        operational_paths = ?config.routing.operational_paths,
        failure_policy = ?config.failures.policy,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Checked by validate_config.
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => tracing::info!(signal, "Signal received"),
            Err(e) => tracing::error!(error = %e, "Failed to install signal handler"),
        }
        signal_shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
