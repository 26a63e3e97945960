use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::member::Member;
use crate::domain::repositories::{MemberRepository, MemberSearchStore, TeamRepository};
use crate::domain::search::{
    MemberFilter, MemberTeamRow, Slice, Sort, SortDirection, SortField, StoreError,
};
use crate::domain::team::Team;

/// In-process implementation of the member, team and search ports
///
/// Rows are kept in insertion order, which is also the order unsorted
/// queries return. Intended for tests and for running the API without a
/// database.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    teams: RwLock<Vec<Team>>,
    members: RwLock<Vec<Member>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn joined_rows(&self) -> Vec<MemberTeamRow> {
        let teams = self.teams.read().await;
        let members = self.members.read().await;

        members
            .iter()
            .map(|member| {
                let team = member
                    .team_id()
                    .and_then(|id| teams.iter().find(|t| t.id() == id));

                MemberTeamRow {
                    member_id: member.id(),
                    username: member.username().map(str::to_string),
                    age: member.age(),
                    team_id: team.map(Team::id),
                    team_name: team.map(|t| t.name().to_string()),
                }
            })
            .collect()
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn save(&self, team: &Team) -> Result<(), String> {
        let mut teams = self.teams.write().await;
        match teams.iter_mut().find(|t| t.id() == team.id()) {
            Some(existing) => *existing = team.clone(),
            None => teams.push(team.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        Ok(self.teams.read().await.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, String> {
        Ok(self
            .teams
            .read()
            .await
            .iter()
            .find(|t| t.name() == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        let mut teams = self.teams.read().await.clone();
        teams.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(teams)
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn save(&self, member: &Member) -> Result<(), String> {
        if let Some(team_id) = member.team_id() {
            let team_exists = self.teams.read().await.iter().any(|t| t.id() == team_id);
            if !team_exists {
                return Err(format!("Team not found: {}", team_id));
            }
        }

        let mut members = self.members.write().await;
        match members.iter_mut().find(|m| m.id() == member.id()) {
            Some(existing) => *existing = member.clone(),
            None => members.push(member.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, String> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .find(|m| m.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>, String> {
        Ok(self.members.read().await.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, String> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .filter(|m| m.username() == Some(username))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MemberSearchStore for InMemoryStore {
    async fn query(
        &self,
        filter: &MemberFilter,
        order: &[Sort],
        slice: Option<Slice>,
    ) -> Result<Vec<MemberTeamRow>, StoreError> {
        let mut rows: Vec<MemberTeamRow> = self
            .joined_rows()
            .await
            .into_iter()
            .filter(|row| filter.matches(row))
            .collect();

        rows.sort_by(|a, b| compare_rows(a, b, order));

        let Some(slice) = slice else {
            return Ok(rows);
        };
        let offset = usize::try_from(slice.offset)
            .map_err(|_| StoreError::Query(format!("Negative offset: {}", slice.offset)))?;
        let limit = usize::try_from(slice.limit)
            .map_err(|_| StoreError::Query(format!("Negative limit: {}", slice.limit)))?;

        Ok(rows.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self, filter: &MemberFilter) -> Result<i64, StoreError> {
        let matching = self
            .joined_rows()
            .await
            .iter()
            .filter(|row| filter.matches(row))
            .count();

        i64::try_from(matching)
            .map_err(|_| StoreError::Query(format!("Count out of range: {}", matching)))
    }
}

fn compare_rows(a: &MemberTeamRow, b: &MemberTeamRow, order: &[Sort]) -> Ordering {
    order
        .iter()
        .map(|sort| {
            let ordering = match sort.field {
                SortField::Id => a.member_id.cmp(&b.member_id),
                SortField::Username => nulls_last(&a.username, &b.username),
                SortField::Age => a.age.cmp(&b.age),
                SortField::TeamName => nulls_last(&a.team_name, &b.team_name),
            };
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

// NULL compares greater than any value, matching PostgreSQL's default.
fn nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::MemberPredicate;

    async fn store_with(members: &[(Option<&str>, i32, Option<&Team>)], teams: &[&Team]) -> InMemoryStore {
        let store = InMemoryStore::new();
        for team in teams {
            TeamRepository::save(&store, team).await.unwrap();
        }
        for (name, age, team) in members {
            let member = Member::new(name.map(str::to_string), *age, *team).unwrap();
            MemberRepository::save(&store, &member).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn member_with_unknown_team_is_rejected() {
        let store = InMemoryStore::new();
        let orphan_team = Team::new("ghost").unwrap();
        let member = Member::new(Some("member1".to_string()), 10, Some(&orphan_team)).unwrap();

        let result = MemberRepository::save(&store, &member).await;

        assert!(result.unwrap_err().contains("Team not found"));
    }

    #[tokio::test]
    async fn save_updates_existing_member() {
        let team = Team::new("teamA").unwrap();
        let store = store_with(&[], &[&team]).await;
        let mut member = Member::new(Some("member1".to_string()), 10, None).unwrap();
        MemberRepository::save(&store, &member).await.unwrap();

        member.change_team(Some(&team));
        MemberRepository::save(&store, &member).await.unwrap();

        let all = MemberRepository::find_all(&store).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].team_id(), Some(team.id()));
    }

    #[tokio::test]
    async fn find_team_by_name() {
        let team = Team::new("teamA").unwrap();
        let store = store_with(&[], &[&team]).await;

        assert_eq!(store.find_by_name("teamA").await.unwrap(), Some(team));
        assert!(store.find_by_name("teamZ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_members_by_username() {
        let store = store_with(&[(Some("member1"), 10, None), (Some("member2"), 20, None)], &[]).await;

        let found = store.find_by_username("member2").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].age(), 20);
    }

    #[tokio::test]
    async fn unsorted_query_keeps_insertion_order() {
        let store = store_with(
            &[(Some("b"), 20, None), (Some("a"), 10, None), (Some("c"), 30, None)],
            &[],
        )
        .await;

        let rows = store
            .query(&MemberFilter::left_joined(Vec::new()), &[], None)
            .await
            .unwrap();

        let names: Vec<_> = rows.iter().filter_map(|r| r.username.as_deref()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn sort_puts_null_usernames_last_ascending() {
        let store = store_with(
            &[(None, 100, None), (Some("member6"), 100, None), (Some("member5"), 100, None)],
            &[],
        )
        .await;
        let order = [Sort::desc(SortField::Age), Sort::asc(SortField::Username)];

        let rows = store
            .query(&MemberFilter::left_joined(Vec::new()), &order, None)
            .await
            .unwrap();

        let names: Vec<_> = rows.iter().map(|r| r.username.as_deref()).collect();
        assert_eq!(names, vec![Some("member5"), Some("member6"), None]);
    }

    #[tokio::test]
    async fn slice_skips_and_limits() {
        let store = store_with(
            &[(Some("m1"), 10, None), (Some("m2"), 20, None), (Some("m3"), 30, None), (Some("m4"), 40, None)],
            &[],
        )
        .await;
        let order = [Sort::desc(SortField::Age)];

        let rows = store
            .query(
                &MemberFilter::left_joined(Vec::new()),
                &order,
                Some(Slice { offset: 1, limit: 2 }),
            )
            .await
            .unwrap();

        let ages: Vec<_> = rows.iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![30, 20]);
    }

    #[tokio::test]
    async fn count_uses_filter() {
        let team = Team::new("teamA").unwrap();
        let store = store_with(
            &[(Some("m1"), 10, Some(&team)), (Some("m2"), 20, None)],
            &[&team],
        )
        .await;
        let filter = MemberFilter::left_joined(vec![MemberPredicate::TeamNameEq("teamA".to_string())]);

        assert_eq!(store.count(&filter).await.unwrap(), 1);
    }
}
