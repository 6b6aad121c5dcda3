#![allow(async_fn_in_trait)]

use crate::domain::types::{Staff, StaffRecord};
use crate::error::StaffsServiceError;

/// Repository for staff accounts.
pub trait StaffRepository: Send + Sync {
    /// Every staff, ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<Staff>, StaffsServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Staff>, StaffsServiceError>;

    /// Whether an activated staff other than `except_id` already uses `email`.
    async fn activated_email_taken(
        &self,
        email: &str,
        except_id: Option<i32>,
    ) -> Result<bool, StaffsServiceError>;

    /// Insert (`record.id == None`) or update a staff as one atomic unit.
    ///
    /// Activated-email uniqueness is re-checked inside the write; a conflict
    /// surfaces as `Validation` with `AlreadyTaken` on email. Updating a
    /// missing id returns `StaffNotFound`.
    async fn save(&self, record: &StaffRecord) -> Result<Staff, StaffsServiceError>;

    /// Delete a staff. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, StaffsServiceError>;
}

/// Port for the one-way password digest.
pub trait PasswordDigestPort: Send + Sync {
    async fn digest(&self, password: &str) -> Result<String, StaffsServiceError>;
}
