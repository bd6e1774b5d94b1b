//! In-memory [`Repository`] used by tests and local tooling.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Model, Repository, duplicate_error};
use crate::errors::AppError;

pub struct MemoryRepository<M> {
    records: RwLock<HashMap<Uuid, M>>,
}

impl<M> Default for MemoryRepository<M> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<M: Model> MemoryRepository<M> {
    pub fn new() -> Self {
        Self::default()
    }
}

fn collides<M: Model>(records: &HashMap<Uuid, M>, candidate: &M) -> bool {
    records
        .values()
        .any(|r| r.id() != candidate.id() && r.unique_key() == candidate.unique_key())
}

#[async_trait]
impl<M: Model> Repository<M> for MemoryRepository<M> {
    async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<M>, i64), AppError> {
        let records = self.records.read().await;

        let mut all: Vec<&M> = records.values().collect();
        all.sort_by(|a, b| {
            a.ordering_key()
                .cmp(&b.ordering_key())
                .then_with(|| a.id().cmp(&b.id()))
        });

        let page = all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();

        Ok((page, records.len() as i64))
    }

    async fn get(&self, id: Uuid) -> Result<Option<M>, AppError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn insert(&self, input: M::Input) -> Result<M, AppError> {
        let now = Utc::now();
        let record = M::from_input(Uuid::new_v4(), input, now, now);

        let mut records = self.records.write().await;
        if collides(&records, &record) {
            return Err(duplicate_error::<M>());
        }

        records.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn replace(&self, id: Uuid, input: M::Input) -> Result<Option<M>, AppError> {
        let mut records = self.records.write().await;

        let Some(existing) = records.get(&id) else {
            return Ok(None);
        };

        let record = M::from_input(id, input, existing.created_at(), Utc::now());
        if collides(&records, &record) {
            return Err(duplicate_error::<M>());
        }

        records.insert(id, record.clone());
        Ok(Some(record))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}
