use crate::server::{config::Config, error::AppError};

/// Connects to the database and optionally runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration. When
/// `DATABASE_MIGRATE` is enabled the bundled SeaORM migrations are applied before the
/// connection is handed out; otherwise the schema is assumed to be managed by the hosting
/// database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.database_migrate {
        tracing::info!("Applying database migrations");
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}

/// Resolves when the process receives Ctrl+C, starting a graceful shutdown.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
