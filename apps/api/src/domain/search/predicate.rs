use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::SearchError;
use super::row::MemberTeamRow;

/// A single filter condition on the member/team relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberPredicate {
    /// `member.username = value`
    UsernameEq(String),
    /// `team.name = value`
    TeamNameEq(String),
    /// `member.age >= value`
    AgeGoe(i32),
    /// `member.age <= value`
    AgeLoe(i32),
}

impl MemberPredicate {
    /// Evaluates the predicate against a joined row.
    ///
    /// Comparisons against a NULL column are false, as in SQL.
    pub fn matches(&self, row: &MemberTeamRow) -> bool {
        match self {
            MemberPredicate::UsernameEq(name) => row.username.as_deref() == Some(name.as_str()),
            MemberPredicate::TeamNameEq(name) => row.team_name.as_deref() == Some(name.as_str()),
            MemberPredicate::AgeGoe(age) => row.age >= *age,
            MemberPredicate::AgeLoe(age) => row.age <= *age,
        }
    }
}

/// How members are joined to their team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamJoin {
    /// Keep members without a team; team columns are NULL for them
    Left,
}

/// Join plus AND-combined predicates
///
/// Content and count queries are both built from one `MemberFilter`, so
/// they always agree on which rows match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFilter {
    join: TeamJoin,
    predicates: Vec<MemberPredicate>,
}

impl MemberFilter {
    pub fn left_joined(predicates: Vec<MemberPredicate>) -> Self {
        Self {
            join: TeamJoin::Left,
            predicates,
        }
    }

    pub fn join(&self) -> TeamJoin {
        self.join
    }

    pub fn predicates(&self) -> &[MemberPredicate] {
        &self.predicates
    }

    /// True when every predicate holds (vacuously true for no predicates)
    pub fn matches(&self, row: &MemberTeamRow) -> bool {
        self.predicates.iter().all(|p| p.matches(row))
    }
}

/// Columns a search may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Username,
    Age,
    TeamName,
}

impl FromStr for SortField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(SortField::Id),
            "username" => Ok(SortField::Username),
            "age" => Ok(SortField::Age),
            "team_name" => Ok(SortField::TeamName),
            other => Err(SearchError::InvalidSort(format!("unknown field '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// One ordering key. NULLs sort last ascending and first descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parses `field[,asc|desc]` keys separated by `;`
    ///
    /// # Example
    /// ```
    /// use member_search_api::domain::search::{Sort, SortField};
    ///
    /// let sort = Sort::parse_list("age,desc;username").unwrap();
    /// assert_eq!(sort, vec![Sort::desc(SortField::Age), Sort::asc(SortField::Username)]);
    /// ```
    pub fn parse_list(value: &str) -> Result<Vec<Sort>, SearchError> {
        value
            .split(';')
            .filter(|key| !key.trim().is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for Sort {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',');
        let field = parts.next().unwrap_or_default().parse::<SortField>()?;
        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            None => SortDirection::Asc,
            Some(d) if d == "asc" => SortDirection::Asc,
            Some(d) if d == "desc" => SortDirection::Desc,
            Some(d) => {
                return Err(SearchError::InvalidSort(format!("unknown direction '{}'", d)));
            }
        };

        Ok(Sort { field, direction })
    }
}

/// Offset/limit window applied to a content query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub offset: i64,
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn row(username: Option<&str>, age: i32, team_name: Option<&str>) -> MemberTeamRow {
        MemberTeamRow {
            member_id: Uuid::new_v4(),
            username: username.map(str::to_string),
            age,
            team_id: team_name.map(|_| Uuid::new_v4()),
            team_name: team_name.map(str::to_string),
        }
    }

    #[test]
    fn team_name_never_matches_missing_team() {
        let predicate = MemberPredicate::TeamNameEq("teamA".to_string());

        assert!(predicate.matches(&row(Some("a"), 10, Some("teamA"))));
        assert!(!predicate.matches(&row(Some("b"), 10, Some("teamB"))));
        assert!(!predicate.matches(&row(Some("c"), 10, None)));
    }

    #[test]
    fn username_never_matches_null_username() {
        let predicate = MemberPredicate::UsernameEq("member1".to_string());
        assert!(!predicate.matches(&row(None, 10, None)));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let goe = MemberPredicate::AgeGoe(20);
        let loe = MemberPredicate::AgeLoe(30);

        assert!(goe.matches(&row(None, 20, None)));
        assert!(!goe.matches(&row(None, 19, None)));
        assert!(loe.matches(&row(None, 30, None)));
        assert!(!loe.matches(&row(None, 31, None)));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = MemberFilter::left_joined(Vec::new());
        assert!(filter.matches(&row(None, 0, None)));
    }

    #[test]
    fn filter_is_conjunctive() {
        let filter = MemberFilter::left_joined(vec![
            MemberPredicate::AgeGoe(20),
            MemberPredicate::TeamNameEq("teamA".to_string()),
        ]);

        assert!(filter.matches(&row(None, 25, Some("teamA"))));
        assert!(!filter.matches(&row(None, 15, Some("teamA"))));
        assert!(!filter.matches(&row(None, 25, Some("teamB"))));
    }

    #[test]
    fn parse_sort_defaults_to_ascending() {
        assert_eq!("age".parse::<Sort>().unwrap(), Sort::asc(SortField::Age));
        assert_eq!(
            "team_name,DESC".parse::<Sort>().unwrap(),
            Sort::desc(SortField::TeamName)
        );
    }

    #[test]
    fn parse_sort_rejects_unknown_field() {
        let result = Sort::parse_list("age,desc;password");
        assert!(matches!(result, Err(SearchError::InvalidSort(_))));
    }

    #[test]
    fn parse_sort_rejects_unknown_direction() {
        let result = "age,sideways".parse::<Sort>();
        assert!(matches!(result, Err(SearchError::InvalidSort(_))));
    }

    #[test]
    fn parse_empty_sort_list() {
        assert!(Sort::parse_list("").unwrap().is_empty());
    }
}
