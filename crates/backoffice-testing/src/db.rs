use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use backoffice_staffs_migration::Migrator;

const MEMORY_URL: &str = "sqlite::memory:";

/// Open a fresh in-memory SQLite database with every staffs migration applied.
///
/// The pool is pinned to a single connection: each SQLite in-memory
/// connection is its own database.
pub async fn migrated_db() -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(MEMORY_URL);
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(opts).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Count rows in `table`.
pub async fn count_rows(db: &DatabaseConnection, table: &str) -> Result<i64, DbErr> {
    let backend = db.get_database_backend();
    let row = db
        .query_one(sea_orm::Statement::from_string(
            backend,
            format!("SELECT COUNT(*) AS n FROM {table}"),
        ))
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("count of {table}")))?;
    row.try_get("", "n")
}
