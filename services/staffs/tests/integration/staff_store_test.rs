use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordVerifier};
use sea_orm::ConnectionTrait;

use backoffice_staffs::domain::repository::StaffRepository;
use backoffice_staffs::domain::types::{StaffDraft, StaffRecord};
use backoffice_staffs::domain::validation::{Field, ValidationErrorKind};
use backoffice_staffs::error::StaffsServiceError;
use backoffice_staffs::infra::db::DbStaffRepository;
use backoffice_staffs::usecase::staff::DeleteStaffUseCase;

use crate::helpers::{count_activated, count_rows, create_staff, migrated_db, save_usecase};

fn draft(email: &str) -> StaffDraft {
    StaffDraft::new("test", email, "password")
}

// ── Activated-email uniqueness ───────────────────────────────────────────────

// Unactivated saves are never checked, even while an activated row holds the
// email; only activation conflicts.
#[tokio::test]
async fn should_enforce_uniqueness_only_among_activated_staff() {
    let db = migrated_db().await.unwrap();
    let save = save_usecase(&db);

    let mut rows = Vec::new();
    for _ in 0..3 {
        rows.push(save.execute(draft("test@example.com")).await.unwrap());
    }
    assert_eq!(count_rows(&db, "staffs").await.unwrap(), 3);

    let mut activate = rows[0].to_draft();
    activate.activated = true;
    let activated = save.execute(activate).await.unwrap();
    assert!(activated.activated);

    let fourth = save.execute(draft("test@example.com")).await.unwrap();
    assert!(!fourth.activated);

    let mut activate_fourth = fourth.to_draft();
    activate_fourth.activated = true;
    let result = save.execute(activate_fourth).await;
    let Err(StaffsServiceError::Validation(errors)) = result else {
        panic!("expected validation failure, got {result:?}");
    };
    assert!(errors.contains(Field::Email, ValidationErrorKind::AlreadyTaken));
    assert_eq!(count_activated(&db).await, 1);

    DeleteStaffUseCase {
        repo: DbStaffRepository { db: db.clone() },
    }
    .execute(activated.id)
    .await
    .unwrap();

    let recreated = save
        .execute(draft("test@example.com").activated(true))
        .await
        .unwrap();
    assert!(recreated.activated);
    assert_eq!(count_activated(&db).await, 1);
    assert_eq!(count_rows(&db, "staffs").await.unwrap(), 4);
}

#[tokio::test]
async fn should_treat_emails_differing_in_case_as_equal() {
    let db = migrated_db().await.unwrap();
    create_staff(&db, draft("Test@Example.com").activated(true))
        .await
        .unwrap();

    let result = create_staff(&db, draft("TEST@EXAMPLE.COM").activated(true)).await;
    assert!(matches!(result, Err(StaffsServiceError::Validation(_))));
    assert_eq!(count_rows(&db, "staffs").await.unwrap(), 1);
}

#[tokio::test]
async fn should_reject_second_activated_row_at_the_index() {
    let db = migrated_db().await.unwrap();
    create_staff(&db, draft("test@example.com").activated(true))
        .await
        .unwrap();

    let result = db
        .execute_unprepared(
            "INSERT INTO staffs (name, email, password_digest, activated, admin, created_at, updated_at) \
             VALUES ('raw', 'TEST@example.com', 'x', true, false, \
             '2020-01-01T00:00:00Z', '2020-01-01T00:00:00Z')",
        )
        .await;
    assert!(result.is_err());
    assert_eq!(count_activated(&db).await, 1);
}

#[tokio::test]
async fn should_reject_conflicting_record_saved_directly() {
    let db = migrated_db().await.unwrap();
    create_staff(&db, draft("test@example.com").activated(true))
        .await
        .unwrap();

    let repo = DbStaffRepository { db: db.clone() };
    let result = repo
        .save(&StaffRecord {
            id: None,
            name: "direct".into(),
            email: "test@example.com".into(),
            password_digest: "digest".into(),
            activated: true,
            admin: false,
        })
        .await;
    let err = result.unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert!(errors.contains(Field::Email, ValidationErrorKind::AlreadyTaken));
    assert_eq!(count_rows(&db, "staffs").await.unwrap(), 1);
}

#[tokio::test]
async fn should_map_index_violation_to_already_taken() {
    let db = migrated_db().await.unwrap();
    create_staff(&db, draft("test@example.com").activated(true))
        .await
        .unwrap();

    // The in-transaction lookup compares emails exactly, so a record that
    // skipped normalization is only caught by the `lower(email)` index.
    let repo = DbStaffRepository { db: db.clone() };
    let result = repo
        .save(&StaffRecord {
            id: None,
            name: "direct".into(),
            email: "TEST@example.com".into(),
            password_digest: "digest".into(),
            activated: true,
            admin: false,
        })
        .await;
    let err = result.unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert!(errors.contains(Field::Email, ValidationErrorKind::AlreadyTaken));
    assert_eq!(errors.len(), 1);
    assert_eq!(count_activated(&db).await, 1);
}

// ── Normalization and field rules ────────────────────────────────────────────

#[tokio::test]
async fn should_store_and_read_back_lowercased_email() {
    let db = migrated_db().await.unwrap();
    let staff = create_staff(&db, draft("Mixed.Case@Example.COM")).await.unwrap();
    assert_eq!(staff.email, "mixed.case@example.com");

    let stored = DbStaffRepository { db: db.clone() }
        .find_by_id(staff.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.email, "mixed.case@example.com");
}

#[tokio::test]
async fn should_accept_thirty_multibyte_characters_as_name() {
    let db = migrated_db().await.unwrap();
    let name = "あ".repeat(30);
    let staff = create_staff(&db, StaffDraft::new(name.clone(), "a@example.com", "password"))
        .await
        .unwrap();
    assert_eq!(staff.name, name);

    let result = create_staff(
        &db,
        StaffDraft::new("あ".repeat(31), "b@example.com", "password"),
    )
    .await;
    assert!(matches!(result, Err(StaffsServiceError::Validation(_))));
}

#[tokio::test]
async fn should_enforce_password_length_bounds() {
    let db = migrated_db().await.unwrap();
    for (password, ok) in [
        ("a".repeat(7), false),
        ("a".repeat(8), true),
        ("a".repeat(72), true),
        ("a".repeat(73), false),
    ] {
        let result = create_staff(&db, StaffDraft::new("test", "a@example.com", password.clone())).await;
        assert_eq!(result.is_ok(), ok, "password of {} chars", password.len());
    }
    assert_eq!(count_rows(&db, "staffs").await.unwrap(), 2);
}

#[tokio::test]
async fn should_write_nothing_when_validation_fails() {
    let db = migrated_db().await.unwrap();
    let result = create_staff(&db, StaffDraft::new("", "not-an-email", "pass word")).await;
    let Err(StaffsServiceError::Validation(errors)) = result else {
        panic!("expected validation failure, got {result:?}");
    };
    assert_eq!(
        errors.messages(),
        [
            "Name can't be blank",
            "Email is invalid",
            "Password may only contain letters, digits, hyphens and underscores",
        ]
    );
    assert_eq!(count_rows(&db, "staffs").await.unwrap(), 0);
}

// ── Password digest ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_verifiable_digest_and_keep_it_on_update() {
    let db = migrated_db().await.unwrap();
    let save = save_usecase(&db);
    let staff = save.execute(draft("test@example.com")).await.unwrap();
    assert_ne!(staff.password_digest, "password");

    let parsed = PasswordHash::new(&staff.password_digest).unwrap();
    assert!(Argon2::default().verify_password(b"password", &parsed).is_ok());

    let mut rename = staff.to_draft();
    rename.name = "renamed".into();
    let updated = save.execute(rename).await.unwrap();
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.password_digest, staff.password_digest);
    assert_eq!(updated.created_at, staff.created_at);
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_row() {
    let db = migrated_db().await.unwrap();
    let repo = DbStaffRepository { db: db.clone() };
    let result = repo
        .save(&StaffRecord {
            id: Some(999),
            name: "ghost".into(),
            email: "ghost@example.com".into(),
            password_digest: "digest".into(),
            activated: false,
            admin: false,
        })
        .await;
    assert!(matches!(result, Err(StaffsServiceError::StaffNotFound)));
}
