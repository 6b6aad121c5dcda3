use sea_orm::DatabaseConnection;

use backoffice_staffs::domain::types::{Staff, StaffDraft};
use backoffice_staffs::error::StaffsServiceError;
use backoffice_staffs::infra::db::DbStaffRepository;
use backoffice_staffs::infra::password::{Argon2Digest, HashingParams};
use backoffice_staffs::usecase::staff::SaveStaffUseCase;

pub use backoffice_testing::db::{count_rows, migrated_db};

/// Smallest Argon2 costs the library accepts, so tests stay fast.
pub fn cheap_digest() -> Argon2Digest {
    Argon2Digest::new(HashingParams {
        memory_kib: 256,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}

pub fn save_usecase(db: &DatabaseConnection) -> SaveStaffUseCase<DbStaffRepository, Argon2Digest> {
    SaveStaffUseCase {
        repo: DbStaffRepository { db: db.clone() },
        digest: cheap_digest(),
    }
}

pub async fn create_staff(
    db: &DatabaseConnection,
    draft: StaffDraft,
) -> Result<Staff, StaffsServiceError> {
    save_usecase(db).execute(draft).await
}

pub async fn count_activated(db: &DatabaseConnection) -> i64 {
    use sea_orm::{ConnectionTrait, Statement};

    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT COUNT(*) AS n FROM staffs WHERE activated",
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get("", "n").unwrap()
}
