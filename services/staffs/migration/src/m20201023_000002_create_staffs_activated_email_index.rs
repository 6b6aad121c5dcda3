use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Partial expression indexes are not expressible through the index builder.
// The statement is valid on both PostgreSQL and SQLite.
const CREATE_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS idx_staffs_activated_email \
     ON staffs (lower(email)) WHERE activated";
const DROP_INDEX: &str = "DROP INDEX IF EXISTS idx_staffs_activated_email";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_INDEX)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(DROP_INDEX).await?;
        Ok(())
    }
}
