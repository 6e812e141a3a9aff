//! Backend entry-point: resolves configuration, prepares the document store
//! and serves the REST API.

use actix_web::web;
use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use booking_backend::inbound::http::health::HealthState;
use booking_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use booking_backend::settings::{AppSettings, CliArgs};

mod server;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_cli(CliArgs::parse()).map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let mut config = ServerConfig::new(bind_addr);

    if let Some(database_url) = settings.database_url() {
        // An unreachable database still starts the server; GET /test reports it.
        if let Err(e) = run_migrations(database_url).await {
            error!(error = %e, "database migrations failed");
        }
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
