use backoffice_staffs::domain::repository::StaffRepository;
use backoffice_staffs::infra::db::DbStaffRepository;
use backoffice_staffs::usecase::seed::{
    DEFAULT_SEED_COUNT, DEFAULT_SEED_PASSWORD, SeedStaffsUseCase,
};

use crate::helpers::{count_activated, count_rows, migrated_db, save_usecase};

#[tokio::test]
async fn should_seed_ten_activated_staff_once() {
    let db = migrated_db().await.unwrap();
    let seed = SeedStaffsUseCase {
        save: save_usecase(&db),
    };

    let first = seed
        .execute(DEFAULT_SEED_COUNT, DEFAULT_SEED_PASSWORD)
        .await
        .unwrap();
    assert_eq!(first.created, 10);

    let second = seed
        .execute(DEFAULT_SEED_COUNT, DEFAULT_SEED_PASSWORD)
        .await
        .unwrap();
    assert_eq!(second.created, 0);
    assert_eq!(second.existing, 10);
    assert_eq!(second.rows, 10);

    assert_eq!(count_rows(&db, "staffs").await.unwrap(), 10);
    assert_eq!(count_activated(&db).await, 10);

    let staffs = DbStaffRepository { db: db.clone() }.find_all().await.unwrap();
    assert_eq!(staffs[0].name, "staff0");
    assert_eq!(staffs[0].email, "staff0@example.com");
    assert_eq!(staffs[9].email, "staff9@example.com");
}
