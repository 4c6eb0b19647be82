use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::accounts::{LookupError, RegistrationError};
use crate::application::use_cases::courses::CourseError;
use crate::application::use_cases::enrollments::EnrollmentError;
use crate::domain::courses::course::parse_course_id;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Client-facing failure rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Logs the cause; the client only sees `failure`.
    pub fn internal(failure: &'static str, cause: &anyhow::Error) -> Self {
        tracing::error!(error = ?cause, "{}", failure);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: failure.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

pub fn course_id(raw: &str) -> Result<i32, ApiError> {
    parse_course_id(raw).ok_or_else(|| ApiError::bad_request("Invalid course ID"))
}

/// Maps a use-case error to a response, naming the failed action for 500s.
pub trait IntoApiError {
    fn into_api_error(self, failure: &'static str) -> ApiError;
}

impl IntoApiError for CourseError {
    fn into_api_error(self, failure: &'static str) -> ApiError {
        match self {
            CourseError::Storage(e) => ApiError::internal(failure, &e),
            CourseError::NotFound | CourseError::InstructorNotFound => {
                ApiError::not_found(self.to_string())
            }
            CourseError::MissingField(_)
            | CourseError::InvalidTimeWindow
            | CourseError::InvalidPrice(_)
            | CourseError::InvalidWallet(_) => ApiError::bad_request(self.to_string()),
        }
    }
}

impl IntoApiError for RegistrationError {
    fn into_api_error(self, failure: &'static str) -> ApiError {
        match self {
            RegistrationError::Storage(e) => ApiError::internal(failure, &e),
            RegistrationError::InvalidWallet(_)
            | RegistrationError::MissingName
            | RegistrationError::AlreadyExists(_) => ApiError::bad_request(self.to_string()),
        }
    }
}

impl IntoApiError for LookupError {
    fn into_api_error(self, failure: &'static str) -> ApiError {
        match self {
            LookupError::Storage(e) => ApiError::internal(failure, &e),
            LookupError::InvalidWallet(_) => ApiError::bad_request(self.to_string()),
            LookupError::NotFound(_) => ApiError::not_found(self.to_string()),
        }
    }
}

impl IntoApiError for EnrollmentError {
    fn into_api_error(self, failure: &'static str) -> ApiError {
        match self {
            EnrollmentError::Storage(e) => ApiError::internal(failure, &e),
            EnrollmentError::CourseNotFound | EnrollmentError::LearnerNotFound => {
                ApiError::not_found(self.to_string())
            }
            EnrollmentError::InvalidWallet(_)
            | EnrollmentError::InvalidTxHash(_)
            | EnrollmentError::CourseNotActive
            | EnrollmentError::AlreadyEnrolled
            | EnrollmentError::TransactionAlreadyUsed => ApiError::bad_request(self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::accounts::AccountKind;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn storage_errors_hide_details() {
        let err = CourseError::Storage(anyhow::anyhow!("connection refused"))
            .into_api_error("Failed to fetch courses");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Failed to fetch courses");
    }

    #[tokio::test]
    async fn validation_errors_are_bad_requests() {
        let response = RegistrationError::AlreadyExists(AccountKind::Learner)
            .into_api_error("Failed to create learner")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Learner already exists");

        let response = EnrollmentError::AlreadyEnrolled
            .into_api_error("Failed to enroll")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_records_are_not_found() {
        let response = LookupError::NotFound(AccountKind::Instructor)
            .into_api_error("Failed to fetch instructor")
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Instructor not found");
    }

    #[test]
    fn course_id_rejects_non_numeric() {
        assert_eq!(course_id("17").unwrap(), 17);
        let err = course_id("seventeen").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid course ID");
    }
}
