//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;

use crate::appointments::AppointmentError;
use crate::identity::IdentityError;

// Errors

/// Structured error response body: `{"error": {"code", "message"}}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// Errors a handler can surface, each mapped to an HTTP status and a
/// structured body. Domain messages pass through verbatim; storage
/// and internal errors are logged and replaced with a generic body.
pub enum ApiError {
    Appointment(AppointmentError),
    Identity(IdentityError),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Appointment(err) => {
                let status = match &err {
                    AppointmentError::Unauthenticated => StatusCode::UNAUTHORIZED,
                    AppointmentError::InvalidDate(_)
                    | AppointmentError::InvalidFirstName
                    | AppointmentError::InvalidLastName => StatusCode::UNPROCESSABLE_ENTITY,
                    AppointmentError::NotFound => StatusCode::NOT_FOUND,
                    AppointmentError::NotAuthorized => StatusCode::FORBIDDEN,
                    AppointmentError::ConflictAllDay | AppointmentError::ConflictRegular => {
                        StatusCode::CONFLICT
                    }
                    AppointmentError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };

                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!("{}", err);
                    (status, err.code(), "Something went wrong".to_string())
                } else {
                    (status, err.code(), err.to_string())
                }
            }
            ApiError::Identity(err) => match &err {
                IdentityError::InvalidCredentials => {
                    (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", err.to_string())
                }
                IdentityError::InvalidUsername => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_USERNAME", err.to_string())
                }
                IdentityError::UsernameTaken => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "USERNAME_TAKEN", err.to_string())
                }
                IdentityError::Storage(_) => {
                    tracing::error!("{}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "STORAGE",
                        "Something went wrong".to_string(),
                    )
                }
            },
            ApiError::Internal(err) => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Something went wrong".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: ErrorDetail { code, message },
            }),
        )
            .into_response()
    }
}

impl From<AppointmentError> for ApiError {
    fn from(err: AppointmentError) -> Self {
        ApiError::Appointment(err)
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        ApiError::Identity(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

// Re-export public types from each route

pub mod appointments {
    pub use crate::api::routes::appointments::public::*;
}

pub mod auth {
    pub use crate::api::routes::auth::public::*;
}
