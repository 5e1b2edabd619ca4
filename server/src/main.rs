//! Serves the bookshelf GraphQL API over HTTP.
//!
//! The books are loaded once from the seed file and live only as long as the process does.
use crate::{app_builder::build_app, config::ServerConfig};
use axum::serve;
use bookshelf::{BookStore, build_schema, seed};
use dotenvy::dotenv;
use std::error::Error;
use tokio::net::TcpListener;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
mod api_testing;
mod app_builder;
mod config;

/// Used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

/// # Errors
/// Returns an error if the configuration is invalid, the address cannot be bound or the server
/// stops unexpectedly.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Loaded before the subscriber so that `RUST_LOG` may come from the file.
    let dotenv_result = dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match dotenv_result {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(err) => debug!(error = %err, "no environment file loaded"),
    }

    let config = ServerConfig::from_env()?;
    let store = BookStore::new(seed::load_or_empty(&config.seed_path));
    let app = build_app(build_schema(store));

    let listener = TcpListener::bind(config.address).await?;
    info!(address = %listener.local_addr()?, "server is listening");
    serve(listener, app).await?;

    Ok(())
}
