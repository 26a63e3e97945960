use super::value_objects::TeamName;
use uuid::Uuid;

/// Team aggregate root
///
/// A named group that members may belong to. A team owns no member list
/// of its own; membership is recorded on the member side.
///
/// # Example
/// ```
/// use member_search_api::domain::team::Team;
///
/// let team = Team::new("teamA").expect("valid team");
/// assert_eq!(team.name(), "teamA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: TeamName,
}

impl Team {
    /// Creates a new Team
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a fresh ID
    /// * `Err(String)` - If the name is empty or blank
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: TeamName::new(name)?,
        })
    }

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(id: Uuid, name: String) -> Result<Self, String> {
        Ok(Self {
            id,
            name: TeamName::new(name)?,
        })
    }
}
