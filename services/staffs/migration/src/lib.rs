use sea_orm_migration::prelude::*;

mod m20201023_000001_create_staffs;
mod m20201023_000002_create_staffs_activated_email_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20201023_000001_create_staffs::Migration),
            Box::new(m20201023_000002_create_staffs_activated_email_index::Migration),
        ]
    }
}
