use serde::{Deserialize, Serialize};

use super::predicate::{MemberFilter, MemberPredicate};

/// Sparse set of member search criteria
///
/// Every field is optional. An absent field places no constraint on its
/// dimension; it never means "match NULL". Text fields that are empty or
/// whitespace-only count as absent.
///
/// # Example
/// ```
/// use member_search_api::domain::search::SearchCondition;
///
/// let condition = SearchCondition::default()
///     .with_team_name("teamB")
///     .with_age_goe(35);
///
/// assert_eq!(condition.to_filter().predicates().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl SearchCondition {
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn with_age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Builds the AND-combined predicate list, one entry per present field
    pub fn predicates(&self) -> Vec<MemberPredicate> {
        [
            text(&self.username).map(MemberPredicate::UsernameEq),
            text(&self.team_name).map(MemberPredicate::TeamNameEq),
            self.age_goe.map(MemberPredicate::AgeGoe),
            self.age_loe.map(MemberPredicate::AgeLoe),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Builds the left-joined filter shared by content and count queries
    pub fn to_filter(&self) -> MemberFilter {
        MemberFilter::left_joined(self.predicates())
    }
}

fn text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::predicate::TeamJoin;

    #[test]
    fn empty_condition_has_no_predicates() {
        let condition = SearchCondition::default();

        assert!(condition.predicates().is_empty());
    }

    #[test]
    fn each_present_field_adds_one_predicate() {
        let condition = SearchCondition::default()
            .with_username("member1")
            .with_team_name("teamA")
            .with_age_goe(20)
            .with_age_loe(30);

        assert_eq!(
            condition.predicates(),
            vec![
                MemberPredicate::UsernameEq("member1".to_string()),
                MemberPredicate::TeamNameEq("teamA".to_string()),
                MemberPredicate::AgeGoe(20),
                MemberPredicate::AgeLoe(30),
            ]
        );
    }

    #[test]
    fn blank_text_fields_are_absent() {
        let condition = SearchCondition {
            username: Some("".to_string()),
            team_name: Some("   ".to_string()),
            age_goe: None,
            age_loe: Some(40),
        };

        assert_eq!(condition.predicates(), vec![MemberPredicate::AgeLoe(40)]);
    }

    #[test]
    fn zero_is_a_present_age_bound() {
        let condition = SearchCondition::default().with_age_goe(0);
        assert_eq!(condition.predicates(), vec![MemberPredicate::AgeGoe(0)]);
    }

    #[test]
    fn filter_always_left_joins_team() {
        let filter = SearchCondition::default().to_filter();
        assert_eq!(filter.join(), TeamJoin::Left);

        let filter = SearchCondition::default().with_team_name("teamA").to_filter();
        assert_eq!(filter.join(), TeamJoin::Left);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let condition: SearchCondition = serde_json::from_str(r#"{"age_goe": 20}"#).unwrap();
        assert_eq!(condition, SearchCondition::default().with_age_goe(20));
    }
}
