use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::member::Member;

/// Repository trait for Member entity
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a member (insert or update)
    async fn save(&self, member: &Member) -> Result<(), String>;

    /// Find a member by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, String>;

    /// List all members
    async fn find_all(&self) -> Result<Vec<Member>, String>;

    /// Find all members with exactly this username
    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, String>;
}
