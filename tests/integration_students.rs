mod common;

use axum::http::StatusCode;
use common::{create_student, create_teacher, generate_unique_email, send, setup_test_app};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_student() {
    let app = setup_test_app();
    let email = generate_unique_email();

    let (status, body) = send(
        &app,
        "POST",
        "/api/students",
        Some(json!({
            "first_name": "Student",
            "last_name": "Test",
            "email": email,
            "date_of_birth": "2010-01-15",
            "grade_level": "10"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["first_name"], "Student");
    assert_eq!(body["email"], email);
    assert_eq!(body["date_of_birth"], "2010-01-15");
    assert_eq!(body["grade_level"], "10");
}

#[tokio::test]
async fn test_create_student_minimal() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/students",
        Some(json!({
            "first_name": "Student",
            "last_name": "Test",
            "email": generate_unique_email()
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["date_of_birth"].is_null());
    assert!(body["grade_level"].is_null());
}

#[tokio::test]
async fn test_create_student_invalid_date() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/students",
        Some(json!({
            "first_name": "Student",
            "last_name": "Test",
            "email": generate_unique_email(),
            "date_of_birth": "15/01/2010"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_student_grade_level_too_long() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/students",
        Some(json!({
            "first_name": "Student",
            "last_name": "Test",
            "email": generate_unique_email(),
            "grade_level": "Kindergarten"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["fields"]["grade_level"][0],
        "Must be at most 10 characters."
    );
}

#[tokio::test]
async fn test_create_student_duplicate_email() {
    let app = setup_test_app();
    let existing = create_student(&app, "Student", "One").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/students",
        Some(json!({
            "first_name": "Student",
            "last_name": "Two",
            "email": existing["email"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["fields"]["email"][0],
        "student with this email already exists."
    );
}

#[tokio::test]
async fn test_student_email_may_match_teacher_email() {
    let app = setup_test_app();
    let teacher = create_teacher(&app, "Ada", "Lovelace").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/students",
        Some(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": teacher["email"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_list_students() {
    let app = setup_test_app();
    create_student(&app, "Bea", "Young").await;
    create_student(&app, "Cal", "Xu").await;
    create_teacher(&app, "Ada", "Lovelace").await;

    let (status, body) = send(&app, "GET", "/api/students", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["last_name"], "Xu");
    assert_eq!(data[1]["last_name"], "Young");
    assert_eq!(body["meta"]["total"], 2);
}

#[tokio::test]
async fn test_list_students_limit_is_clamped() {
    let app = setup_test_app();
    create_student(&app, "Bea", "Young").await;

    let (status, body) = send(&app, "GET", "/api/students?limit=1000", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["limit"], 100);
}

#[tokio::test]
async fn test_get_student_not_found() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/students/{}", Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn test_update_student() {
    let app = setup_test_app();
    let created = create_student(&app, "Student", "Test").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/students/{id}"),
        Some(json!({
            "first_name": "Updated",
            "last_name": "Name",
            "email": created["email"],
            "grade_level": "9"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Updated");
    assert_eq!(body["grade_level"], "9");
    assert!(body["date_of_birth"].is_null());
}

#[tokio::test]
async fn test_partial_update_student() {
    let app = setup_test_app();
    let created = create_student(&app, "Student", "Test").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/students/{id}"),
        Some(json!({ "grade_level": "9", "date_of_birth": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["grade_level"], "9");
    assert!(body["date_of_birth"].is_null());
    assert_eq!(body["first_name"], "Student");
    assert_eq!(body["email"], created["email"]);
}

#[tokio::test]
async fn test_partial_update_student_rejects_null_email() {
    let app = setup_test_app();
    let created = create_student(&app, "Student", "Test").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/students/{id}"),
        Some(json!({ "email": null, "last_name": null })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["email"][0], "This field may not be null.");
    assert_eq!(body["fields"]["last_name"][0], "This field may not be null.");

    let (_, unchanged) = send(&app, "GET", &format!("/api/students/{id}"), None).await;
    assert_eq!(unchanged["email"], created["email"]);
    assert_eq!(unchanged["last_name"], "Test");
}

#[tokio::test]
async fn test_partial_update_student_empty_body() {
    let app = setup_test_app();
    let created = create_student(&app, "Student", "Test").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, "PATCH", &format!("/api/students/{id}"), Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], created["first_name"]);
    assert_eq!(body["date_of_birth"], created["date_of_birth"]);
    assert_eq!(body["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_delete_student() {
    let app = setup_test_app();
    let created = create_student(&app, "Student", "Test").await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", "/api/students", None).await;
    assert_eq!(body["meta"]["total"], 0);
}

#[tokio::test]
async fn test_delete_student_malformed_id() {
    let app = setup_test_app();

    let (status, _) = send(&app, "DELETE", "/api/students/123", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
