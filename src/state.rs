use classbook_config::{CorsConfig, DatabaseConfig};
use classbook_core::ModelViewSet;
use classbook_db::init_db_pool;
use classbook_models::{Student, Teacher};
use sqlx::PgPool;

use crate::modules::students::repository::PgStudentRepository;
use crate::modules::teachers::repository::PgTeacherRepository;

/// Shared application state: one viewset per exposed model.
#[derive(Clone, Debug)]
pub struct AppState {
    pub teachers: ModelViewSet<Teacher>,
    pub students: ModelViewSet<Student>,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Binds both viewsets to PostgreSQL tables.
    pub fn postgres(db: PgPool, cors_config: CorsConfig) -> Self {
        Self {
            teachers: ModelViewSet::new(PgTeacherRepository::new(db.clone())),
            students: ModelViewSet::new(PgStudentRepository::new(db)),
            cors_config,
        }
    }

    /// Binds both viewsets to in-memory stores.
    #[cfg(feature = "test-utils")]
    pub fn in_memory(cors_config: CorsConfig) -> Self {
        use classbook_core::viewset::memory::MemoryRepository;

        Self {
            teachers: ModelViewSet::new(MemoryRepository::<Teacher>::new()),
            students: ModelViewSet::new(MemoryRepository::<Student>::new()),
            cors_config,
        }
    }
}

pub async fn init_app_state(
    database: &DatabaseConfig,
    cors_config: CorsConfig,
) -> anyhow::Result<AppState> {
    let db = init_db_pool(database).await?;
    Ok(AppState::postgres(db, cors_config))
}
