use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Projection of a member joined with its (optional) team
///
/// Team columns are `None` for members that belong to no team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MemberTeamRow {
    pub member_id: Uuid,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
}
