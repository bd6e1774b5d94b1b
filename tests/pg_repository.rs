//! Runs the PostgreSQL repositories against a real database.
//!
//! `sqlx::test` creates a fresh database per test from `DATABASE_URL`; run
//! with `cargo test -- --ignored` when one is available.

use axum::http::StatusCode;
use classbook::modules::students::repository::PgStudentRepository;
use classbook::modules::teachers::repository::PgTeacherRepository;
use classbook_core::{ModelViewSet, PaginationParams, Repository};
use classbook_models::{StudentInput, StudentPatch, TeacherInput, TeacherPatch};
use sqlx::PgPool;
use uuid::Uuid;

fn teacher_input(first_name: &str, last_name: &str, email: &str) -> TeacherInput {
    TeacherInput {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        subject: Some("History".to_string()),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_teacher_crud(pool: PgPool) {
    let repo = PgTeacherRepository::new(pool);

    let created = repo
        .insert(teacher_input("Ada", "Lovelace", "ada@school.test"))
        .await
        .unwrap();
    assert_eq!(created.email, "ada@school.test");

    let fetched = repo.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let replaced = repo
        .replace(created.id, teacher_input("Ada", "King", "ada@school.test"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.last_name, "King");
    assert_eq!(replaced.created_at, created.created_at);
    assert!(replaced.updated_at >= created.updated_at);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.get(created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_teacher_duplicate_email(pool: PgPool) {
    let repo = PgTeacherRepository::new(pool);
    repo.insert(teacher_input("Ada", "Lovelace", "dup@school.test"))
        .await
        .unwrap();

    let err = repo
        .insert(teacher_input("Alan", "Turing", "dup@school.test"))
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        err.fields.unwrap()["email"][0],
        "teacher with this email already exists."
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_teacher_list_order_and_count(pool: PgPool) {
    let repo = PgTeacherRepository::new(pool);
    repo.insert(teacher_input("Zoe", "Brown", "zoe@school.test"))
        .await
        .unwrap();
    repo.insert(teacher_input("Amy", "Brown", "amy@school.test"))
        .await
        .unwrap();
    repo.insert(teacher_input("Max", "Adams", "max@school.test"))
        .await
        .unwrap();

    let (page, total) = repo.list(2, 1).await.unwrap();

    assert_eq!(total, 3);
    let names: Vec<&str> = page.iter().map(|t| t.first_name.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Zoe"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_replace_missing_teacher(pool: PgPool) {
    let repo = PgTeacherRepository::new(pool);

    let result = repo
        .replace(Uuid::new_v4(), teacher_input("Ada", "Lovelace", "x@school.test"))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_student_viewset_over_postgres(pool: PgPool) {
    let students = ModelViewSet::new(PgStudentRepository::new(pool));

    let created = students
        .create(StudentInput {
            first_name: "Bea".to_string(),
            last_name: "Young".to_string(),
            email: "bea@school.test".to_string(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(2011, 3, 4),
            grade_level: Some("7".to_string()),
        })
        .await
        .unwrap();

    let patched = students
        .partial_update(
            created.id,
            StudentPatch {
                grade_level: Some(Some("8".to_string())),
                date_of_birth: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.grade_level.as_deref(), Some("8"));
    assert!(patched.date_of_birth.is_none());
    assert_eq!(patched.email, created.email);

    let page = students.list(&PaginationParams::default()).await.unwrap();
    assert_eq!(page.meta.total, 1);

    students.destroy(created.id).await.unwrap();
    let err = students.retrieve(created.id).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_teacher_patch_clears_subject(pool: PgPool) {
    let teachers = ModelViewSet::new(PgTeacherRepository::new(pool));
    let created = teachers
        .create(teacher_input("Ada", "Lovelace", "ada@school.test"))
        .await
        .unwrap();

    let patched = teachers
        .partial_update(
            created.id,
            TeacherPatch {
                subject: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(patched.subject.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_student_replace_and_duplicate_email(pool: PgPool) {
    let repo = PgStudentRepository::new(pool);
    let input = |email: &str| StudentInput {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: email.to_string(),
        date_of_birth: None,
        grade_level: Some("7".to_string()),
    };

    let first = repo.insert(input("grace@school.test")).await.unwrap();
    repo.insert(input("other@school.test")).await.unwrap();

    let replaced = repo
        .replace(first.id, input("grace.h@school.test"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.email, "grace.h@school.test");
    assert_eq!(replaced.created_at, first.created_at);
    assert_eq!(repo.get(first.id).await.unwrap(), Some(replaced));

    let err = repo
        .replace(first.id, input("other@school.test"))
        .await
        .unwrap_err();
    assert_eq!(
        err.fields.unwrap()["email"][0],
        "student with this email already exists."
    );

    assert!(repo
        .replace(Uuid::new_v4(), input("nobody@school.test"))
        .await
        .unwrap()
        .is_none());
}
