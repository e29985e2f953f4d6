//! Clinic backend server binary.

use clap::Parser;
use tracing::info;

/// CLI arguments for the clinic server.
#[derive(Parser, Debug)]
#[command(name = "clinic_server", about = "Clinic management REST backend")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    bind_addr: String,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/clinic"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clinic_api=debug,clinic_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(database_url = %args.database_url, bind_addr = %args.bind_addr, "starting clinic_server");

    let pool = clinic_core::db::connect(&args.database_url, args.max_connections).await?;

    info!("running database migrations");
    clinic_api::migrate(&pool).await?;

    let config = clinic_api::config::ApiConfig {
        bind_addr: args.bind_addr,
        database_url: args.database_url,
        token: clinic_api::config::TokenConfig::from_env()?,
    };

    let state = clinic_api::AppState {
        pool: pool.clone(),
        config: config.clone(),
    };

    let app = clinic_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("closing connection pool");
    pool.close().await;

    Ok(())
}

/// Resolves on Ctrl-C, triggering graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
    }
}
