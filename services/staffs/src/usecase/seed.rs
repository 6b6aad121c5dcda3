use tracing::info;

use crate::domain::repository::{PasswordDigestPort, StaffRepository};
use crate::domain::types::StaffDraft;
use crate::error::StaffsServiceError;
use crate::usecase::staff::SaveStaffUseCase;

pub const DEFAULT_SEED_COUNT: u32 = 10;
pub const DEFAULT_SEED_PASSWORD: &str = "password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub created: u32,
    pub existing: u32,
    /// Every staff row in the store after seeding, seeded or not.
    pub rows: usize,
}

/// Populate `staff0`..`staff{count-1}` at `example.com`, activated.
///
/// Rows that already exist activated under the same name and email are left
/// untouched, so running twice creates nothing the second time.
pub struct SeedStaffsUseCase<R: StaffRepository, D: PasswordDigestPort> {
    pub save: SaveStaffUseCase<R, D>,
}

impl<R: StaffRepository, D: PasswordDigestPort> SeedStaffsUseCase<R, D> {
    pub async fn execute(
        &self,
        count: u32,
        password: &str,
    ) -> Result<SeedReport, StaffsServiceError> {
        let staffs = self.save.repo.find_all().await?;
        let mut report = SeedReport {
            created: 0,
            existing: 0,
            rows: 0,
        };

        for n in 0..count {
            let name = format!("staff{n}");
            let email = format!("staff{n}@example.com");
            let present = staffs
                .iter()
                .any(|s| s.activated && s.name == name && s.email == email);
            if present {
                report.existing += 1;
                continue;
            }
            let staff = self
                .save
                .execute(StaffDraft::new(name, email, password).activated(true))
                .await?;
            info!(staff_id = staff.id, email = %staff.email, "seeded staff");
            report.created += 1;
        }

        report.rows = self.save.repo.find_all().await?.len();
        Ok(report)
    }
}
