//! HTTP server initialization and runtime setup.
//!
//! Builds the registry store, then serves the management API and the resolver
//! on their own listeners according to the configured role.

use crate::api::routes::{management_app, resolver_router};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use crate::state::{ManagementState, ResolverState};

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Runs the enabled HTTP services with the given configuration.
///
/// Initializes:
/// - Registry store (PostgreSQL pool + migrations, or in-memory map)
/// - Management API listener (roles `all` and `management`)
/// - Resolver listener (roles `all` and `resolver`)
///
/// Both listeners stop gracefully on Ctrl-C.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - A listener cannot bind
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let management = async {
        if !config.service_role.runs_management() {
            return Ok(());
        }
        let state = ManagementState::new(repository.clone(), &config);
        serve(
            management_app(state),
            &config.management_listen_addr,
            "Management API",
        )
        .await
    };

    let resolver = async {
        if !config.service_role.runs_resolver() {
            return Ok(());
        }
        let state = ResolverState::new(repository.clone());
        serve(
            resolver_router(state),
            &config.resolver_listen_addr,
            "Resolver",
        )
        .await
    };

    tokio::try_join!(management, resolver)?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Creates the registry store selected by `STORAGE_BACKEND`.
async fn build_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; links are lost on restart");
            Ok(Arc::new(InMemoryLinkRepository::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
                .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            run_migrations(&pool).await?;

            Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
        }
    }
}

/// Applies the embedded migrations in `./migrations`.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply database migrations")?;
    tracing::info!("Database migrations applied");
    Ok(())
}

async fn serve(app: Router, addr: &str, name: &str) -> Result<()> {
    let listener = bind(addr).await?;
    tracing::info!("{name} listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn bind(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))
}

/// Resolves when Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
