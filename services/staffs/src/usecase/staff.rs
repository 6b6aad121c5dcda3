use tracing::{debug, info};

use crate::domain::repository::{PasswordDigestPort, StaffRepository};
use crate::domain::types::{Staff, StaffDraft, StaffRecord, StaffSummary};
use crate::domain::validation::{
    Field, FieldCheck, ValidationError, ValidationErrorKind, check_fields,
};
use crate::error::StaffsServiceError;

// ── SaveStaff ────────────────────────────────────────────────────────────────

/// Validate, normalize, hash and persist a staff draft.
///
/// Every violation is collected before anything is written. Nothing is
/// persisted unless all rules pass; on success exactly one insert or update
/// happens.
pub struct SaveStaffUseCase<R: StaffRepository, D: PasswordDigestPort> {
    pub repo: R,
    pub digest: D,
}

impl<R: StaffRepository, D: PasswordDigestPort> SaveStaffUseCase<R, D> {
    pub async fn execute(&self, draft: StaffDraft) -> Result<Staff, StaffsServiceError> {
        let existing = match draft.id {
            Some(id) => Some(
                self.repo
                    .find_by_id(id)
                    .await?
                    .ok_or(StaffsServiceError::StaffNotFound)?,
            ),
            None => None,
        };

        let FieldCheck {
            email,
            email_well_formed,
            mut errors,
        } = check_fields(&draft);
        if email_well_formed
            && draft.activated
            && self.repo.activated_email_taken(&email, draft.id).await?
        {
            errors.push(ValidationError::new(
                Field::Email,
                ValidationErrorKind::AlreadyTaken,
            ));
        }
        if !errors.is_empty() {
            debug!(
                staff_id = ?draft.id,
                violations = errors.len(),
                "staff rejected by validation"
            );
            return Err(errors.into());
        }

        let password_digest = match (draft.new_password(), existing) {
            (Some(password), _) => self.digest.digest(password).await?,
            (None, Some(existing)) => existing.password_digest,
            (None, None) => {
                return Err(StaffsServiceError::Validation(
                    ValidationError::new(Field::Password, ValidationErrorKind::Required).into(),
                ));
            }
        };

        let created = draft.is_new();
        let record = StaffRecord {
            id: draft.id,
            name: draft.name,
            email,
            password_digest,
            activated: draft.activated,
            admin: draft.admin,
        };
        let staff = self.repo.save(&record).await?;
        info!(staff_id = staff.id, created, activated = staff.activated, "staff saved");
        Ok(staff)
    }
}

// ── ListStaffs ───────────────────────────────────────────────────────────────

pub struct ListStaffsUseCase<R: StaffRepository> {
    pub repo: R,
}

impl<R: StaffRepository> ListStaffsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<StaffSummary>, StaffsServiceError> {
        let staffs = self.repo.find_all().await?;
        Ok(staffs.into_iter().map(StaffSummary::from).collect())
    }
}

// ── DeleteStaff ──────────────────────────────────────────────────────────────

pub struct DeleteStaffUseCase<R: StaffRepository> {
    pub repo: R,
}

impl<R: StaffRepository> DeleteStaffUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), StaffsServiceError> {
        if !self.repo.delete(id).await? {
            return Err(StaffsServiceError::StaffNotFound);
        }
        info!(staff_id = id, "staff deleted");
        Ok(())
    }
}
