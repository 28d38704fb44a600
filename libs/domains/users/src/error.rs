use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i32),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            UserError::DuplicateEmail(_) => AppError::Conflict("Email already exists".to_string()),
            UserError::Validation(errors) => AppError::ValidationError(errors),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn maps_to_expected_status_codes() {
        let cases = [
            (UserError::NotFound(1), StatusCode::NOT_FOUND),
            (
                UserError::DuplicateEmail("a@b.com".into()),
                StatusCode::CONFLICT,
            ),
            (
                UserError::Internal("Database error: boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn not_found_message_names_the_id() {
        match AppError::from(UserError::NotFound(42)) {
            AppError::NotFound(msg) => assert_eq!(msg, "User 42 not found"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
