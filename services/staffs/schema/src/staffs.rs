use sea_orm::entity::prelude::*;

/// Administrative staff account.
///
/// `email` is stored lower-cased. Uniqueness of `email` holds only among rows
/// with `activated = true`, enforced by the partial index
/// `idx_staffs_activated_email`, so the column carries no plain unique flag.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staffs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub activated: bool,
    pub admin: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
