use crate::modules::user::entity;
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Open the pool and make sure the `users` table matches the entity.
pub async fn connect_database(url: &str) -> Result<DatabaseConnection, DbErr> {
    tracing::info!("Connecting to database: {}", url);
    let db = Database::connect(url).await?;

    db.get_schema_builder()
        .register(entity::Entity)
        .sync(&db)
        .await?;
    tracing::info!("Database schema synced");

    Ok(db)
}
