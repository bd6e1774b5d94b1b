//! PostgreSQL-backed [`Repository`] for [`Student`] records.

use anyhow::Context;
use async_trait::async_trait;
use classbook_core::viewset::duplicate_error;
use classbook_core::{AppError, Repository};
use classbook_db::is_unique_violation;
use classbook_models::{Student, StudentInput};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

const COUNT: &str = "SELECT COUNT(*) FROM students";

const SELECT_PAGE: &str = r#"
    SELECT id, first_name, last_name, email, date_of_birth, grade_level, created_at, updated_at
    FROM students
    ORDER BY last_name, first_name, id
    LIMIT $1 OFFSET $2
"#;

const SELECT_BY_ID: &str = r#"
    SELECT id, first_name, last_name, email, date_of_birth, grade_level, created_at, updated_at
    FROM students
    WHERE id = $1
"#;

const INSERT: &str = r#"
    INSERT INTO students (first_name, last_name, email, date_of_birth, grade_level)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, first_name, last_name, email, date_of_birth, grade_level, created_at, updated_at
"#;

const UPDATE: &str = r#"
    UPDATE students
    SET first_name = $1, last_name = $2, email = $3, date_of_birth = $4, grade_level = $5,
        updated_at = NOW()
    WHERE id = $6
    RETURNING id, first_name, last_name, email, date_of_birth, grade_level, created_at, updated_at
"#;

const DELETE_BY_ID: &str = "DELETE FROM students WHERE id = $1";

pub struct PgStudentRepository {
    db: PgPool,
}

impl PgStudentRepository {
    #[must_use]
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn write_error(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        return duplicate_error::<Student>();
    }
    AppError::database(anyhow::Error::from(e).context("Failed to write student"))
}

#[async_trait]
impl Repository<Student> for PgStudentRepository {
    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<Student>, i64), AppError> {
        let total: i64 = sqlx::query_scalar(COUNT)
            .fetch_one(&self.db)
            .await
            .context("Failed to count students")
            .map_err(AppError::database)?;

        let students = sqlx::query_as::<_, Student>(SELECT_PAGE)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.db)
            .await
            .context("Failed to fetch students")
            .map_err(AppError::database)?;

        Ok((students, total))
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .context("Failed to fetch student by ID")
            .map_err(AppError::database)?;

        Ok(student)
    }

    #[instrument(skip(self, input))]
    async fn insert(&self, input: StudentInput) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(INSERT)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.date_of_birth)
            .bind(&input.grade_level)
            .fetch_one(&self.db)
            .await
            .map_err(write_error)
    }

    #[instrument(skip(self, input))]
    async fn replace(&self, id: Uuid, input: StudentInput) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>(UPDATE)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.date_of_birth)
            .bind(&input.grade_level)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(write_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id)
            .execute(&self.db)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}
