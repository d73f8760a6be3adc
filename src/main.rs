//! Gym tracker server binary.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gym_tracker::adapters::http::access::{AccessState, CookieSettings};
use gym_tracker::adapters::http::build_router;
use gym_tracker::adapters::http::workouts::WorkoutHandlers;
use gym_tracker::adapters::postgres::{
    run_migrations, PostgresWorkoutLogReader, PostgresWorkoutLogWriter,
};
use gym_tracker::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use gym_tracker::domain::access::{AccessError, SharedSecretGate};
use gym_tracker::domain::foundation::DomainError;
use gym_tracker::domain::program::CatalogError;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to load program catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to initialize access gate: {0}")]
    Access(#[from] AccessError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(DomainError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    tracing::info!(database = %config.database.redacted_url(), "Connected to database");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(StartupError::Migration)?;
    }

    let catalog = Arc::new(config.program.load_catalog()?);
    tracing::info!(
        program = %catalog.program.name,
        weeks = catalog.total_weeks(),
        "Program catalog loaded"
    );

    let gate = Arc::new(SharedSecretGate::new(config.auth.app_password.clone())?);
    let access = AccessState::new(
        gate,
        CookieSettings::from_config(&config.auth, config.is_production()),
    );

    let workouts = WorkoutHandlers::from_ports(
        Arc::new(PostgresWorkoutLogReader::new(pool.clone())),
        Arc::new(PostgresWorkoutLogWriter::new(pool.clone())),
        catalog,
    );

    let mut app = build_router(workouts, access)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());
    if let Some(cors) = cors_layer(&config.server) {
        app = app.layer(cors);
    }

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "gym-tracker listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn cors_layer(server: &ServerConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not register SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Shutdown signal received");
}
