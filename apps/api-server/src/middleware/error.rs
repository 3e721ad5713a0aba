//! Error handling - RFC 7807 problem responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::{DomainError, RepoError};
use blog_shared::ErrorResponse;
use std::fmt;

/// Every way a request can fail, as seen from the HTTP boundary.
#[derive(Debug)]
pub enum AppError {
    /// Unknown or malformed identifier.
    NotFound(String),
    /// Payload failed validation.
    Validation(String),
    /// Request body is not the expected JSON.
    Decode(String),
    /// Storage failure.
    Persistence(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(msg) => write!(f, "Invalid post: {}", msg),
            AppError::Decode(msg) => write!(f, "Malformed body: {}", msg),
            AppError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Decode(_) | AppError::Persistence(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Validation(detail) => ErrorResponse::invalid_post(detail),
            AppError::Decode(detail) => {
                tracing::warn!("Failed to decode request body: {}", detail);
                ErrorResponse::malformed_body(detail)
            }
            AppError::Persistence(detail) | AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Connection(msg) => {
                AppError::Persistence(format!("database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Persistence(format!("database query error: {}", msg)),
            RepoError::Constraint(msg) => {
                AppError::Persistence(format!("constraint violation: {}", msg))
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn maps_error_kinds_to_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Decode("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Persistence("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn repo_not_found_becomes_404() {
        let err: AppError = RepoError::NotFound.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn repo_constraint_is_a_persistence_failure() {
        let err: AppError = RepoError::Constraint("duplicate id".into()).into();
        assert!(matches!(err, AppError::Persistence(_)));
    }

    #[test]
    fn domain_not_found_names_the_entity() {
        let id = Uuid::new_v4();
        let err: AppError = DomainError::NotFound {
            entity_type: "Post",
            id,
        }
        .into();
        assert_eq!(err.to_string(), format!("Not found: Post with id {} not found", id));
    }
}
