use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staffs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Staffs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Staffs::Name).string().not_null())
                    .col(ColumnDef::new(Staffs::Email).string().not_null())
                    .col(ColumnDef::new(Staffs::PasswordDigest).string().not_null())
                    .col(
                        ColumnDef::new(Staffs::Activated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Staffs::Admin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Staffs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Staffs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staffs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Staffs {
    Table,
    Id,
    Name,
    Email,
    PasswordDigest,
    Activated,
    Admin,
    CreatedAt,
    UpdatedAt,
}
