//! Request body extraction with API-shaped rejections.
//!
//! [`JsonBody`] wraps [`axum::Json`] and [`RecordId`] wraps a UUID path
//! segment; both turn their rejections into [`AppError`]s, so malformed
//! input produces the same JSON error shape as every other failure. Field
//! validation is not done here: the viewset validates every write payload
//! before it reaches a repository.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use classbook_core::AppError;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// The `{id}` segment of a detail route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub Uuid);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(anyhow!("Missing record id")))?;

        Uuid::parse_str(&raw)
            .map(RecordId)
            .map_err(|_| AppError::bad_request(anyhow!("'{raw}' is not a valid UUID.")))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        Ok(JsonBody(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::field(field, "This field is required.");
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    if matches!(rejection, JsonRejection::JsonDataError(_)) {
        return AppError::bad_request(anyhow!("Invalid field value in request"));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        name: String,
        #[allow(dead_code)]
        age: u32,
    }

    async fn send(content_type: Option<&str>, body: &str) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route(
            "/",
            post(|JsonBody(_): JsonBody<Payload>| async { StatusCode::NO_CONTENT }),
        );

        let mut request = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }
        let response = app
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_valid_body() {
        let (status, _) = send(Some("application/json"), r#"{"name":"a","age":3}"#).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_missing_field() {
        let (status, body) = send(Some("application/json"), r#"{"age":3}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["fields"]["name"][0], "This field is required.");
    }

    #[tokio::test]
    async fn test_invalid_type() {
        let (status, body) = send(Some("application/json"), r#"{"name":"a","age":"old"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid field type in request");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = send(Some("application/json"), r#"{"name":"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }

    async fn fetch_id(id: &str) -> (StatusCode, serde_json::Value) {
        let app = Router::new().route(
            "/{id}",
            axum::routing::get(|RecordId(id): RecordId| async move { id.to_string() }),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()));
        (status, body)
    }

    #[tokio::test]
    async fn test_record_id_parses_uuid() {
        let id = Uuid::new_v4();
        let (status, body) = fetch_id(&id.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::Value::String(id.to_string()));
    }

    #[tokio::test]
    async fn test_record_id_rejects_garbage() {
        let (status, body) = fetch_id("42").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "'42' is not a valid UUID.");
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let (status, body) = send(None, r#"{"name":"a","age":3}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Missing 'Content-Type: application/json' header"
        );
    }
}
