use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{MemberRepository, TeamRepository};
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresMemberRepository, PostgresMemberSearchStore, PostgresTeamRepository,
};
use crate::search::MemberSearchService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamRepository>,
    pub members: Arc<dyn MemberRepository>,
    pub search: MemberSearchService,
}

impl AppState {
    /// State backed by PostgreSQL adapters sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
            members: Arc::new(PostgresMemberRepository::new(pool.clone())),
            search: MemberSearchService::new(Arc::new(PostgresMemberSearchStore::new(pool))),
        }
    }

    /// State backed by a single in-memory store
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            teams: store.clone(),
            members: store.clone(),
            search: MemberSearchService::new(store),
        }
    }
}
