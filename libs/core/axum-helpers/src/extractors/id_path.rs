//! Integer id path extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extracts a single `i32` path parameter.
///
/// Non-integer values produce a 400 `INVALID_ID` instead of axum's plain-text
/// rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::InvalidId(format!("Invalid id: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn handler(IdPath(id): IdPath) -> String {
        id.to_string()
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = Router::new()
            .route("/items/{id}", get(handler))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn parses_integer_id() {
        let (status, body) = call("/items/42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "42");
    }

    #[tokio::test]
    async fn rejects_non_integer_id() {
        let (status, body) = call("/items/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("INVALID_ID"));
    }
}
