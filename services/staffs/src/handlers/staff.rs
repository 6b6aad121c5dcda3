use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::StaffSummary;
use crate::error::StaffsServiceError;
use crate::state::AppState;
use crate::usecase::staff::ListStaffsUseCase;

// ── Response types ───────────────────────────────────────────────────────────

/// Public view of a staff. Credentials and flags are never part of it.
#[derive(Serialize)]
pub struct StaffResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "backoffice_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<StaffSummary> for StaffResponse {
    fn from(summary: StaffSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            email: summary.email,
            created_at: summary.created_at,
        }
    }
}

// ── GET /api/v1/staffs ───────────────────────────────────────────────────────

pub async fn list_staffs(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffResponse>>, StaffsServiceError> {
    let usecase = ListStaffsUseCase {
        repo: state.staff_repo(),
    };
    let staffs = usecase.execute().await?;
    Ok(Json(staffs.into_iter().map(StaffResponse::from).collect()))
}
