use sea_orm::DatabaseConnection;

use crate::infra::db::DbStaffRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn staff_repo(&self) -> DbStaffRepository {
        DbStaffRepository {
            db: self.db.clone(),
        }
    }
}
