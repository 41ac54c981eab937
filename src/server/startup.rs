use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::server::{config::Config, error::AppError};

/// Connects to the database and ensures the students table exists.
///
/// Establishes a connection pool using the connection string from configuration, then
/// creates the `students` table from its entity definition if it is not present yet.
/// This function must complete successfully before the application can access the
/// database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with the students table in place
/// - `Err(AppError::DbErr)` - Failed to connect to database or create the table
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    ensure_schema(&db).await?;

    Ok(db)
}

/// Creates the students table if it does not exist.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    let schema = Schema::new(db.get_database_backend());
    let stmt = schema
        .create_table_from_entity(entity::prelude::Student)
        .if_not_exists()
        .to_owned();

    db.execute(&stmt).await?;

    Ok(())
}

/// Resolves once the process receives Ctrl-C, letting in-flight requests finish.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received");
}
