use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error envelope shared by every service.
///
/// Wire format: `{ "kind": "SCREAMING_CODE", "message": "human text" }`, with an
/// optional `errors` array for per-field details.
#[derive(Debug, Serialize)]
pub struct ErrorBody<E = ()> {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<E>,
}

impl ErrorBody {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: None,
        }
    }
}

impl<E: Serialize> ErrorBody<E> {
    pub fn with_errors(kind: &'static str, message: impl Into<String>, errors: E) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: Some(errors),
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, axum::Json(self)).into_response()
    }
}
