//! Connection cleanup run after the server stops accepting requests.

use tracing::{error, info};

/// Close a SeaORM connection pool, logging the outcome.
///
/// ```ignore
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     close_postgres(db, "users").await;
/// })
/// .await?;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
