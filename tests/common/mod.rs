use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use classbook::router::init_router;
use classbook::state::AppState;
use classbook_config::CorsConfig;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

/// Router backed by empty in-memory stores.
pub fn setup_test_app() -> Router {
    init_router(AppState::in_memory(CorsConfig::default()))
}

pub fn generate_unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            request = request.header("content-type", "application/json");
            Body::from(serde_json::to_string(&body).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[allow(dead_code)]
pub async fn create_teacher(app: &Router, first_name: &str, last_name: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/teachers",
        Some(json!({
            "first_name": first_name,
            "last_name": last_name,
            "email": generate_unique_email(),
            "subject": "Mathematics"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[allow(dead_code)]
pub async fn create_student(app: &Router, first_name: &str, last_name: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/students",
        Some(json!({
            "first_name": first_name,
            "last_name": last_name,
            "email": generate_unique_email(),
            "date_of_birth": "2010-01-15",
            "grade_level": "8"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}
