//! PostgreSQL-backed [`Repository`] for [`Teacher`] records.

use anyhow::Context;
use async_trait::async_trait;
use classbook_core::viewset::duplicate_error;
use classbook_core::{AppError, Repository};
use classbook_db::is_unique_violation;
use classbook_models::{Teacher, TeacherInput};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

const COUNT: &str = "SELECT COUNT(*) FROM teachers";

const SELECT_PAGE: &str = r#"
    SELECT id, first_name, last_name, email, subject, created_at, updated_at
    FROM teachers
    ORDER BY last_name, first_name, id
    LIMIT $1 OFFSET $2
"#;

const SELECT_BY_ID: &str = r#"
    SELECT id, first_name, last_name, email, subject, created_at, updated_at
    FROM teachers
    WHERE id = $1
"#;

const INSERT: &str = r#"
    INSERT INTO teachers (first_name, last_name, email, subject)
    VALUES ($1, $2, $3, $4)
    RETURNING id, first_name, last_name, email, subject, created_at, updated_at
"#;

const UPDATE: &str = r#"
    UPDATE teachers
    SET first_name = $1, last_name = $2, email = $3, subject = $4, updated_at = NOW()
    WHERE id = $5
    RETURNING id, first_name, last_name, email, subject, created_at, updated_at
"#;

const DELETE_BY_ID: &str = "DELETE FROM teachers WHERE id = $1";

pub struct PgTeacherRepository {
    db: PgPool,
}

impl PgTeacherRepository {
    #[must_use]
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn write_error(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        return duplicate_error::<Teacher>();
    }
    AppError::database(anyhow::Error::from(e).context("Failed to write teacher"))
}

#[async_trait]
impl Repository<Teacher> for PgTeacherRepository {
    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<Teacher>, i64), AppError> {
        let total: i64 = sqlx::query_scalar(COUNT)
            .fetch_one(&self.db)
            .await
            .context("Failed to count teachers")
            .map_err(AppError::database)?;

        let teachers = sqlx::query_as::<_, Teacher>(SELECT_PAGE)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.db)
            .await
            .context("Failed to fetch teachers")
            .map_err(AppError::database)?;

        Ok((teachers, total))
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> Result<Option<Teacher>, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .context("Failed to fetch teacher by ID")
            .map_err(AppError::database)?;

        Ok(teacher)
    }

    #[instrument(skip(self, input))]
    async fn insert(&self, input: TeacherInput) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(INSERT)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.subject)
            .fetch_one(&self.db)
            .await
            .map_err(write_error)
    }

    #[instrument(skip(self, input))]
    async fn replace(&self, id: Uuid, input: TeacherInput) -> Result<Option<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(UPDATE)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.subject)
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
            .context("Failed to delete teacher")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}
