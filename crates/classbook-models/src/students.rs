//! Student records and payloads.

use chrono::{DateTime, NaiveDate, Utc};
use classbook_core::serde::deserialize_some;
use classbook_core::viewset::reject_null_fields;
use classbook_core::{AppError, Model};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A student in the system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub grade_level: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a student or replacing one with PUT.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct StudentInput {
    #[validate(length(min = 1, max = 100, message = "Must be between 1 and 100 characters."))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Must be between 1 and 100 characters."))]
    pub last_name: String,
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 255, message = "Must be at most 255 characters.")
    )]
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(max = 10, message = "Must be at most 10 characters."))]
    pub grade_level: Option<String>,
}

/// Payload for PATCH. Absent fields keep their current value; `null` clears
/// the optional ones and is rejected on the rest.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct StudentPatch {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<NaiveDate>)]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub grade_level: Option<Option<String>>,
}

impl Model for Student {
    type Input = StudentInput;
    type Patch = StudentPatch;

    const NAME: &'static str = "Student";
    const UNIQUE_FIELD: &'static str = "email";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn unique_key(&self) -> &str {
        &self.email
    }

    fn ordering_key(&self) -> (&str, &str) {
        (&self.last_name, &self.first_name)
    }

    fn apply(&self, patch: StudentPatch) -> Result<StudentInput, AppError> {
        reject_null_fields(&[
            ("first_name", matches!(patch.first_name, Some(None))),
            ("last_name", matches!(patch.last_name, Some(None))),
            ("email", matches!(patch.email, Some(None))),
        ])?;

        Ok(StudentInput {
            first_name: patch
                .first_name
                .flatten()
                .unwrap_or_else(|| self.first_name.clone()),
            last_name: patch
                .last_name
                .flatten()
                .unwrap_or_else(|| self.last_name.clone()),
            email: patch.email.flatten().unwrap_or_else(|| self.email.clone()),
            date_of_birth: patch.date_of_birth.unwrap_or(self.date_of_birth),
            grade_level: patch
                .grade_level
                .unwrap_or_else(|| self.grade_level.clone()),
        })
    }

    fn from_input(
        id: Uuid,
        input: StudentInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            date_of_birth: input.date_of_birth,
            grade_level: input.grade_level,
            created_at,
            updated_at,
        }
    }
}
