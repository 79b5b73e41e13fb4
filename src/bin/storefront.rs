//! storefront - serve collection listings over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront::{http, InMemoryCatalogStore, Storefront};

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "storefront",
    about = "Serve ranked, paginated app collection listings",
    version
)]
struct Cli {
    /// Address to listen on
    #[clap(long, default_value = "0.0.0.0:8080")]
    bind: String,

    /// JSON catalog to serve (apps and collections). Starts empty if omitted.
    #[clap(long)]
    catalog: Option<PathBuf>,

    /// Set log level. RUST_LOG takes precedence when set.
    #[clap(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn init_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let store = match &cli.catalog {
        Some(path) => InMemoryCatalogStore::load_json(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => InMemoryCatalogStore::new(),
    };
    info!(
        apps = store.app_count()?,
        collections = store.collection_count()?,
        "catalog loaded"
    );

    let storefront = Arc::new(Storefront::new(store));
    http::serve(storefront, &cli.bind)
        .await
        .with_context(|| format!("server on {} failed", cli.bind))
}
