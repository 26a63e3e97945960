use crate::domain::team::Team;
use uuid::Uuid;

/// Member entity
///
/// A person with an optional username and an age, optionally belonging to
/// one team.
///
/// # Invariants
/// - Age is never negative
///
/// # Example
/// ```
/// use member_search_api::domain::member::Member;
/// use member_search_api::domain::team::Team;
///
/// let team = Team::new("teamA").expect("valid team");
/// let member = Member::new(Some("member1".to_string()), 10, Some(&team))
///     .expect("valid member");
///
/// assert_eq!(member.team_id(), Some(team.id()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: Uuid,
    username: Option<String>,
    age: i32,
    team_id: Option<Uuid>,
}

impl Member {
    /// Creates a new Member
    ///
    /// # Arguments
    /// * `username` - Optional display name
    /// * `age` - Age in years (must not be negative)
    /// * `team` - Team to join, if any
    pub fn new(username: Option<String>, age: i32, team: Option<&Team>) -> Result<Self, String> {
        if age < 0 {
            return Err(format!("Age cannot be negative: {}", age));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            username,
            age,
            team_id: team.map(Team::id),
        })
    }

    /// Moves the member to another team, or out of any team with `None`
    pub fn change_team(&mut self, team: Option<&Team>) {
        self.team_id = team.map(Team::id);
    }

    // ===== Getters =====

    /// Returns the member's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the member's username, if set
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the member's age
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Returns the ID of the team the member belongs to, if any
    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    /// Reconstructs a Member from persistence layer data
    ///
    /// This method bypasses validation since the data is already
    /// validated and stored in the database.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        username: Option<String>,
        age: i32,
        team_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            username,
            age,
            team_id,
        }
    }
}
