use serde::{Deserialize, Serialize};
use std::fmt;

/// TeamName value object
///
/// # Invariants
/// - Must contain at least one non-whitespace character
/// - Stored as given (no trimming), so lookups by name stay exact
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Creates a new TeamName value object
    ///
    /// # Returns
    /// * `Ok(TeamName)` - If the name has text
    /// * `Err(String)` - If the name is empty or blank
    ///
    /// # Example
    /// ```
    /// use member_search_api::domain::team::value_objects::TeamName;
    ///
    /// let name = TeamName::new("teamA").expect("valid name");
    /// assert_eq!(name.as_str(), "teamA");
    /// assert!(TeamName::new("   ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }
        Ok(TeamName(name))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TeamName::new(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
