//! Content server for vitrin
//!
//! Serves the JSON content directory over HTTP for the storefront and
//! the admin surface, plus the static site files with a single-page
//! fallback. Any origin may read and write; the server adds no access
//! control of its own.

mod app;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use libvitrin_core::{ContentDir, SiteConfig};

use app::{build_router, AppState};

#[derive(Parser)]
#[command(name = "vitrin-server", about = "Vitrin content server", version)]
struct Cli {
    /// Site configuration file (vitrin.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Site root directory (static files, admin/)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("vitrin.toml"));
    let mut config = match SiteConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load configuration: {}", e);
            std::process::exit(e.exit_code());
        }
    };
    if let Some(site_root) = cli.site_root {
        config.site_root = site_root;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let state = AppState::new(ContentDir::new(config.content_root()), &config.site_root);
    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {}: {}", addr, e);
            std::process::exit(5);
        }
    };

    info!(%addr, site_root = %config.site_root.display(), "vitrin-server listening");

    let shutdown = setup_signal_handlers();
    tokio::select! {
        result = axum::serve(listener, router) => {
            if let Err(e) = result {
                error!("server error: {}", e);
            }
        }
        _ = shutdown => {
            info!("received shutdown signal");
        }
    }

    info!("vitrin-server stopped");
}

/// Set up signal handlers for graceful shutdown
fn setup_signal_handlers() -> impl std::future::Future<Output = ()> {
    async {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {}
            _ = terminate => {}
        }
    }
}
