//! Runtime setup: logging, database pool, and service wiring.

use crate::application::services::ClinicService;
use crate::config::Config;
use crate::infrastructure::memory::InMemoryClinicStore;
use crate::infrastructure::persistence::{
    PgOwnerRepository, PgPetRepository, PgVetRepository, PgVisitRepository,
};

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` directives win over `config.log_level`; `config.log_format`
/// selects human-readable or JSON lines. Logs go to stderr so command output
/// on stdout stays clean.
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Opens the PostgreSQL pool and applies bundled migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        migrate(&pool).await?;
    }

    Ok(pool)
}

/// Applies the migrations under `migrations/`.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");
    Ok(())
}

/// Builds a [`ClinicService`] over PostgreSQL repositories sharing one pool.
pub fn postgres_service(pool: PgPool) -> ClinicService {
    let pool = Arc::new(pool);
    ClinicService::new(
        Arc::new(PgOwnerRepository::new(pool.clone())),
        Arc::new(PgPetRepository::new(pool.clone())),
        Arc::new(PgVisitRepository::new(pool.clone())),
        Arc::new(PgVetRepository::new(pool)),
    )
}

/// Builds a [`ClinicService`] where one in-memory store backs every repository.
pub fn memory_service(store: Arc<InMemoryClinicStore>) -> ClinicService {
    ClinicService::new(store.clone(), store.clone(), store.clone(), store)
}
