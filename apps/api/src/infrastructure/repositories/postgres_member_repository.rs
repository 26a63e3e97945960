use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::member::Member;
use crate::domain::repositories::MemberRepository;

/// PostgreSQL implementation of MemberRepository
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Creates a new PostgresMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type MemberRecord = (Uuid, Option<String>, i32, Option<Uuid>);

fn to_member((id, username, age, team_id): MemberRecord) -> Member {
    Member::from_persistence(id, username, age, team_id)
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: &Member) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO members (id, username, age, team_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                username = EXCLUDED.username,
                age = EXCLUDED.age,
                team_id = EXCLUDED.team_id
            "#,
        )
        .bind(member.id())
        .bind(member.username())
        .bind(member.age())
        .bind(member.team_id())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save member: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, String> {
        let row = sqlx::query_as::<_, MemberRecord>(
            r#"
            SELECT id, username, age, team_id
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find member by id: {}", e))?;

        Ok(row.map(to_member))
    }

    async fn find_all(&self) -> Result<Vec<Member>, String> {
        let rows = sqlx::query_as::<_, MemberRecord>(
            r#"
            SELECT id, username, age, team_id
            FROM members
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list members: {}", e))?;

        Ok(rows.into_iter().map(to_member).collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, String> {
        let rows = sqlx::query_as::<_, MemberRecord>(
            r#"
            SELECT id, username, age, team_id
            FROM members
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find members by username: {}", e))?;

        Ok(rows.into_iter().map(to_member).collect())
    }
}
