//! The model-viewset layer.
//!
//! A [`Model`] describes a stored record together with its two write
//! payloads: `Input` (full write, used by create and PUT) and `Patch`
//! (partial write, used by PATCH). A [`Repository`] is the persistence port
//! that holds those records, and [`ModelViewSet`] binds one to the six
//! standard CRUD actions:
//!
//! | Action           | HTTP                  | Success |
//! |------------------|-----------------------|---------|
//! | `list`           | `GET /{basename}`        | 200     |
//! | `create`         | `POST /{basename}`       | 201     |
//! | `retrieve`       | `GET /{basename}/{id}`   | 200     |
//! | `update`         | `PUT /{basename}/{id}`   | 200     |
//! | `partial_update` | `PATCH /{basename}/{id}` | 200     |
//! | `destroy`        | `DELETE /{basename}/{id}`| 204     |
//!
//! Input is validated before any write reaches the repository. A patch is
//! merged over the current record and the merged result is validated like a
//! full write.

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
mod repository;

pub use repository::Repository;

use std::fmt;
use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, FieldErrors};
use crate::pagination::{Paginated, PaginationMeta, PaginationParams};

/// A stored record exposed through a [`ModelViewSet`].
pub trait Model: Clone + Serialize + Send + Sync + 'static {
    /// Payload for create and full update.
    type Input: Validate + Send + Sync + 'static;
    /// Payload for partial update.
    type Patch: Send + Sync + 'static;

    /// Display name, e.g. `"Teacher"`.
    const NAME: &'static str;
    /// Field that must be unique across all records.
    const UNIQUE_FIELD: &'static str;

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    /// Value of [`Model::UNIQUE_FIELD`] on this record.
    fn unique_key(&self) -> &str;

    /// `(last_name, first_name)`; lists are ordered by this, then by id.
    fn ordering_key(&self) -> (&str, &str);

    /// Merges `patch` over this record, producing a full write payload.
    ///
    /// Fails when the patch sets a non-nullable field to `null`.
    fn apply(&self, patch: Self::Patch) -> Result<Self::Input, AppError>;

    /// Builds a record from a validated payload and store-managed fields.
    fn from_input(
        id: Uuid,
        input: Self::Input,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self;
}

/// Error returned when a write collides with an existing unique value.
pub fn duplicate_error<M: Model>() -> AppError {
    AppError::field(
        M::UNIQUE_FIELD,
        format!(
            "{} with this {} already exists.",
            M::NAME.to_lowercase(),
            M::UNIQUE_FIELD
        ),
    )
}

pub const NULL_FIELD_MESSAGE: &str = "This field may not be null.";

/// Fails with one field error for every `(field, is_null)` pair that is null.
///
/// Used by [`Model::apply`] to reject PATCH payloads such as
/// `{"email": null}` on non-nullable fields.
pub fn reject_null_fields(fields: &[(&str, bool)]) -> Result<(), AppError> {
    let errors: FieldErrors = fields
        .iter()
        .filter(|(_, is_null)| *is_null)
        .map(|(field, _)| (field.to_string(), vec![NULL_FIELD_MESSAGE.to_string()]))
        .collect();

    if errors.is_empty() {
        return Ok(());
    }
    Err(AppError::fields(errors))
}

/// Error returned when no record has the requested id.
pub fn not_found_error<M: Model>() -> AppError {
    AppError::not_found(anyhow!("{} not found", M::NAME))
}

/// CRUD actions for one [`Model`], backed by a shared [`Repository`].
pub struct ModelViewSet<M: Model> {
    repository: Arc<dyn Repository<M>>,
}

impl<M: Model> Clone for ModelViewSet<M> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<M: Model> fmt::Debug for ModelViewSet<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelViewSet")
            .field("model", &M::NAME)
            .finish_non_exhaustive()
    }
}

impl<M: Model> ModelViewSet<M> {
    pub fn new<R>(repository: R) -> Self
    where
        R: Repository<M> + 'static,
    {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self), fields(model = M::NAME))]
    pub async fn list(&self, params: &PaginationParams) -> Result<Paginated<M>, AppError> {
        let (data, total) = self
            .repository
            .list(params.limit(), params.offset())
            .await?;

        Ok(Paginated {
            data,
            meta: PaginationMeta::new(params, total),
        })
    }

    #[instrument(skip(self), fields(model = M::NAME))]
    pub async fn retrieve(&self, id: Uuid) -> Result<M, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(not_found_error::<M>)
    }

    #[instrument(skip(self, input), fields(model = M::NAME))]
    pub async fn create(&self, input: M::Input) -> Result<M, AppError> {
        input.validate().map_err(AppError::validation)?;

        let record = self.repository.insert(input).await?;
        tracing::info!(id = %record.id(), "{} created", M::NAME);
        Ok(record)
    }

    #[instrument(skip(self, input), fields(model = M::NAME))]
    pub async fn update(&self, id: Uuid, input: M::Input) -> Result<M, AppError> {
        input.validate().map_err(AppError::validation)?;

        self.repository
            .replace(id, input)
            .await?
            .ok_or_else(not_found_error::<M>)
    }

    #[instrument(skip(self, patch), fields(model = M::NAME))]
    pub async fn partial_update(&self, id: Uuid, patch: M::Patch) -> Result<M, AppError> {
        let current = self.retrieve(id).await?;
        self.update(id, current.apply(patch)?).await
    }

    #[instrument(skip(self), fields(model = M::NAME))]
    pub async fn destroy(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error::<M>());
        }

        tracing::info!(%id, "{} deleted", M::NAME);
        Ok(())
    }
}
