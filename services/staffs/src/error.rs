use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use backoffice_core::error::ErrorBody;

use crate::domain::validation::{
    Field, ValidationError, ValidationErrorKind, ValidationErrors,
};

/// Staffs service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum StaffsServiceError {
    #[error("staff not found")]
    StaffNotFound,
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StaffsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StaffNotFound => "STAFF_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn email_taken() -> Self {
        Self::Validation(
            ValidationError::new(Field::Email, ValidationErrorKind::AlreadyTaken).into(),
        )
    }

    /// Field violations, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct FieldErrorBody {
    field: &'static str,
    kind: &'static str,
    message: String,
}

impl From<&ValidationError> for FieldErrorBody {
    fn from(error: &ValidationError) -> Self {
        Self {
            field: error.field.as_str(),
            kind: error.kind.code(),
            message: error.message(),
        }
    }
}

impl IntoResponse for StaffsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::StaffNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors and TraceLayer already records them.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        match &self {
            Self::Validation(errors) => {
                let details: Vec<FieldErrorBody> = errors.iter().map(FieldErrorBody::from).collect();
                ErrorBody::with_errors(self.kind(), self.to_string(), details)
                    .into_response_with(status)
            }
            _ => ErrorBody::new(self.kind(), self.to_string()).into_response_with(status),
        }
    }
}
