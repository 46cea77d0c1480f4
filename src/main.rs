//! Application entry point for the `soilsense-telemetry` service.
//!
//! This binary runs the full startup sequence:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Opening the SQLite connection pool
//! - Creating the reading schema if it does not exist (fatal on failure)
//! - Mounting the API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP listener on all interfaces and serving requests
//!
//! # Environment Variables
//! - `DATABASE_URL` (optional) – SQLite connection string
//!   (default: `sqlite://sensor_data.db?mode=rwc`)
//! - `DB_POOL_MAX` (optional) – maximum number of store connections (default: 5)
//! - `PORT` (optional) – listen port (default: 5000)
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity (default: `info`)
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing

use std::{env, io::IsTerminal, net::SocketAddr};

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use soilsense_telemetry::{config, routes, schema};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    tracing::info!("Opening reading store: {}", cfg.db_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.db_pool_max)
        .connect(&cfg.db_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open store '{}': {}", cfg.db_url, e))?;

    // Schema must exist before the listener binds; failure aborts startup.
    schema::create_schema(&pool).await?;
    tracing::info!("Reading schema ready");

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));

    // Build app from routes gateway (EMBP)
    let app: Router = routes::router(pool, cfg);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// Span event emission is controlled by `AXUM_SPAN_EVENTS` (`"full"`,
/// `"enter_exit"`, or CLOSE-only by default). The filter honors `RUST_LOG`
/// when set and falls back to `AXUM_LOG_LEVEL` (default `info`), with sqlx
/// statement logging capped at `warn`. Must be called once before any
/// logging macros run.
fn init_tracing() {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = env::var("AXUM_LOG_LEVEL").unwrap_or_else(|_| "info".into());
        EnvFilter::new(format!("{level},sqlx::query=warn"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(std::io::stdout().is_terminal())
        .compact()
        .init();
}
