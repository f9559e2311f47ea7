// ============================
// catalog-backend/src/error.rs
// ============================
//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("username already exists")]
    UsernameTaken,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing bearer credential")]
    MissingCredential,

    #[error("invalid token")]
    InvalidToken,

    #[error("expired token")]
    ExpiredToken,

    #[error("insufficient role")]
    Forbidden,

    #[error("product not found")]
    ProductNotFound,

    #[error("product name already exists")]
    ProductNameTaken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UsernameTaken | AppError::ProductNameTaken => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            // token-layer failures share one status so the boundary does not
            // reveal which check rejected the request
            AppError::MissingCredential
            | AppError::InvalidToken
            | AppError::ExpiredToken
            | AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::ProductNotFound => StatusCode::NOT_FOUND,
            AppError::Io(_) | AppError::Json(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "v-1",
            AppError::UsernameTaken => "a-2",
            AppError::InvalidCredentials => "a-1",
            AppError::MissingCredential | AppError::InvalidToken | AppError::ExpiredToken => "a-3",
            AppError::Forbidden => "a-4",
            AppError::ProductNotFound => "pdm-1",
            AppError::ProductNameTaken => "pdm-2",
            AppError::Io(_) | AppError::Json(_) | AppError::Internal(_) => "g-1",
        }
    }

    /// Get a sanitized message suitable for clients
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::UsernameTaken => "username already exists".to_string(),
            AppError::InvalidCredentials => "invalid credentials".to_string(),
            AppError::MissingCredential | AppError::InvalidToken | AppError::ExpiredToken => {
                "access denied".to_string()
            }
            AppError::Forbidden => "insufficient permissions".to_string(),
            AppError::ProductNotFound => "product not found".to_string(),
            AppError::ProductNameTaken => "product name already exists".to_string(),
            AppError::Io(_) | AppError::Json(_) | AppError::Internal(_) => {
                "an internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.sanitized_message(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::InvalidCredentials.to_string(),
            "invalid credentials"
        );
        assert_eq!(AppError::UsernameTaken.to_string(), "username already exists");
        assert!(AppError::Validation("username: must not be blank".to_string())
            .to_string()
            .contains("must not be blank"));
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::UsernameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::MissingCredential.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::ExpiredToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::ProductNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::ProductNameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_error_codes() {
        assert_eq!(AppError::InvalidCredentials.error_code(), "a-1");
        assert_eq!(AppError::UsernameTaken.error_code(), "a-2");
        assert_eq!(AppError::MissingCredential.error_code(), "a-3");
        assert_eq!(AppError::InvalidToken.error_code(), "a-3");
        assert_eq!(AppError::ExpiredToken.error_code(), "a-3");
        assert_eq!(AppError::Forbidden.error_code(), "a-4");
        assert_eq!(AppError::ProductNotFound.error_code(), "pdm-1");
        assert_eq!(AppError::ProductNameTaken.error_code(), "pdm-2");
        assert_eq!(AppError::Validation("bad".to_string()).error_code(), "v-1");
        assert_eq!(AppError::Internal("boom".to_string()).error_code(), "g-1");
    }

    #[test]
    fn token_failures_share_one_surface() {
        // expired vs tampered must be indistinguishable to the client
        for err in [
            AppError::MissingCredential,
            AppError::InvalidToken,
            AppError::ExpiredToken,
        ] {
            assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
            assert_eq!(err.error_code(), "a-3");
            assert_eq!(err.sanitized_message(), "access denied");
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let err = AppError::Internal("password hashing failed: oom".to_string());
        assert_eq!(err.sanitized_message(), "an internal error occurred");
    }

    #[test]
    fn test_error_from_impls() {
        use std::io::{Error as IoError, ErrorKind};

        let io_err = IoError::new(ErrorKind::PermissionDenied, "permission denied");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert_eq!(app_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_err.error_code(), "g-1");

        let json_err: serde_json::Error =
            serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
        assert_eq!(app_err.sanitized_message(), "an internal error occurred");
    }

    #[test]
    fn test_app_error_into_response() {
        let response = AppError::ProductNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("application/json"));
    }
}
