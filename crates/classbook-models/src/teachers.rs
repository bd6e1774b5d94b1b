//! Teacher records and payloads.

use chrono::{DateTime, Utc};
use classbook_core::serde::deserialize_some;
use classbook_core::viewset::reject_null_fields;
use classbook_core::{AppError, Model};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A teacher in the system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a teacher or replacing one with PUT.
///
/// Unknown fields, including `id` and the timestamps, are ignored.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct TeacherInput {
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
    #[validate(length(max = 100, message = "Must be at most 100 characters."))]
    pub subject: Option<String>,
}

/// Payload for PATCH. Absent fields keep their current value; `subject: null`
/// clears it, while `null` on any other field is rejected.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct TeacherPatch {
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
    #[schema(value_type = Option<String>)]
    pub subject: Option<Option<String>>,
}

impl Model for Teacher {
    type Input = TeacherInput;
    type Patch = TeacherPatch;

    const NAME: &'static str = "Teacher";
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

    fn apply(&self, patch: TeacherPatch) -> Result<TeacherInput, AppError> {
        reject_null_fields(&[
            ("first_name", matches!(patch.first_name, Some(None))),
            ("last_name", matches!(patch.last_name, Some(None))),
            ("email", matches!(patch.email, Some(None))),
        ])?;

        Ok(TeacherInput {
            first_name: patch
                .first_name
                .flatten()
                .unwrap_or_else(|| self.first_name.clone()),
            last_name: patch
                .last_name
                .flatten()
                .unwrap_or_else(|| self.last_name.clone()),
            email: patch.email.flatten().unwrap_or_else(|| self.email.clone()),
            subject: patch.subject.unwrap_or_else(|| self.subject.clone()),
        })
    }

    fn from_input(
        id: Uuid,
        input: TeacherInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            subject: input.subject,
            created_at,
            updated_at,
        }
    }
}
