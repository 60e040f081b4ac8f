use anyhow::Context;
use campus_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

/// 连接数据库并执行迁移。
pub async fn connect_and_migrate(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(database_url)
        .await
        .context("failed to connect to database")?;

    Migrator::up(&db, None)
        .await
        .context("failed to apply database migrations")?;
    info!("database schema is up to date");

    Ok(db)
}
