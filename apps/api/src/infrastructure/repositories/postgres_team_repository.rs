use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// PostgreSQL implementation of TeamRepository
///
/// Provides persistence for Team aggregates using SQLx against PostgreSQL.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_team((id, name): (Uuid, String)) -> Result<Team, String> {
    Team::from_persistence(id, name).map_err(|e| format!("Invalid team from database: {}", e))
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save team: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let row = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            SELECT id, name
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by id: {}", e))?;

        row.map(to_team).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, String> {
        let row = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            SELECT id, name
            FROM teams
            WHERE name = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by name: {}", e))?;

        row.map(to_team).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            SELECT id, name
            FROM teams
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list teams: {}", e))?;

        rows.into_iter().map(to_team).collect()
    }
}
