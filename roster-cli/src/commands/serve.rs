//! HTTP server command
//!
//! Connects to Postgres, bootstraps the schema, and serves the course and
//! person API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use roster_server::db::pool::{connect, DEFAULT_MAX_CONNECTIONS};
use roster_server::db::schema;
use roster_server::http::{run_server, ServerConfig};

use crate::config::resolve_connect_options;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (falls back to DATABASE_USER/DATABASE_NAME/... when unset)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let options = resolve_connect_options(args.database_url)?;

    let pool = connect(options, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.skip_schema {
        tracing::info!("Skipping schema bootstrap");
    } else {
        schema::bootstrap(&pool)
            .await
            .context("Failed to bootstrap schema")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!(max_connections = args.max_connections, "Starting roster server on {}", config.bind_addr);

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
