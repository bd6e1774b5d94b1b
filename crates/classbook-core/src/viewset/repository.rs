use async_trait::async_trait;
use uuid::Uuid;

use super::Model;
use crate::errors::AppError;

/// Persistence port for one [`Model`]: the record set a viewset operates on.
///
/// Implementations own the store-managed fields (`id`, `created_at`,
/// `updated_at`) and must report a collision on [`Model::UNIQUE_FIELD`] with
/// [`super::duplicate_error`].
#[async_trait]
pub trait Repository<M: Model>: Send + Sync {
    /// Returns one page ordered by `(last_name, first_name, id)` plus the total row count.
    async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<M>, i64), AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<M>, AppError>;

    async fn insert(&self, input: M::Input) -> Result<M, AppError>;

    /// Overwrites every client-writable field. `None` if `id` is unknown.
    async fn replace(&self, id: Uuid, input: M::Input) -> Result<Option<M>, AppError>;

    /// `false` if `id` is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
