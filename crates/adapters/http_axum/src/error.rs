//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use staffhub_domain::error::{StaffHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

impl ErrorBody {
    pub(crate) fn respond(status: StatusCode, error: impl Into<String>) -> Response {
        (
            status,
            Json(Self {
                error: error.into(),
            }),
        )
            .into_response()
    }
}

/// Maps [`StaffHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(StaffHubError);

impl From<StaffHubError> for ApiError {
    fn from(err: StaffHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StaffHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            StaffHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            StaffHubError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            StaffHubError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        ErrorBody::respond(status, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffhub_domain::error::{ConflictError, NotFoundError};
    use staffhub_domain::id::LocationId;

    #[test]
    fn should_map_domain_errors_to_status_codes() {
        let cases: Vec<(StaffHubError, StatusCode)> = vec![
            (ValidationError::EmptyName.into(), StatusCode::BAD_REQUEST),
            (
                NotFoundError {
                    entity: "Employee",
                    id: "x".to_string(),
                }
                .into(),
                StatusCode::NOT_FOUND,
            ),
            (
                ConflictError::LocationExists {
                    id: LocationId::new(1),
                }
                .into(),
                StatusCode::CONFLICT,
            ),
            (
                StaffHubError::Storage("disk on fire".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
