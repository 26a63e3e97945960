use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::repositories::MemberSearchStore;
use crate::domain::search::{
    MemberFilter, MemberPredicate, MemberTeamRow, Slice, Sort, SortField, StoreError, TeamJoin,
};

const SELECT_ROWS: &str =
    "SELECT m.id AS member_id, m.username, m.age, t.id AS team_id, t.name AS team_name";
const SELECT_COUNT: &str = "SELECT COUNT(m.id)";

/// PostgreSQL implementation of MemberSearchStore
///
/// Builds parameterized SQL with `sqlx::QueryBuilder`. Content and count
/// queries share one FROM/JOIN/WHERE builder so their filtering can't drift.
pub struct PostgresMemberSearchStore {
    pool: PgPool,
}

impl PostgresMemberSearchStore {
    /// Creates a new PostgresMemberSearchStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err.to_string()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}

fn push_from_where(builder: &mut QueryBuilder<'static, Postgres>, filter: &MemberFilter) {
    builder.push(" FROM members m");
    match filter.join() {
        TeamJoin::Left => builder.push(" LEFT JOIN teams t ON t.id = m.team_id"),
    };

    for (i, predicate) in filter.predicates().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        match predicate {
            MemberPredicate::UsernameEq(name) => builder.push("m.username = ").push_bind(name.clone()),
            MemberPredicate::TeamNameEq(name) => builder.push("t.name = ").push_bind(name.clone()),
            MemberPredicate::AgeGoe(age) => builder.push("m.age >= ").push_bind(*age),
            MemberPredicate::AgeLoe(age) => builder.push("m.age <= ").push_bind(*age),
        };
    }
}

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Id => "m.id",
        SortField::Username => "m.username",
        SortField::Age => "m.age",
        SortField::TeamName => "t.name",
    }
}

pub(crate) fn content_query(
    filter: &MemberFilter,
    order: &[Sort],
    slice: Option<Slice>,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_ROWS);
    push_from_where(&mut builder, filter);

    for (i, sort) in order.iter().enumerate() {
        builder.push(if i == 0 { " ORDER BY " } else { ", " });
        builder.push(sort_column(sort.field));
        builder.push(format!(" {}", sort.direction));
    }

    if let Some(slice) = slice {
        builder.push(" LIMIT ").push_bind(slice.limit);
        builder.push(" OFFSET ").push_bind(slice.offset);
    }

    builder
}

pub(crate) fn count_query(filter: &MemberFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_COUNT);
    push_from_where(&mut builder, filter);
    builder
}

#[async_trait]
impl MemberSearchStore for PostgresMemberSearchStore {
    async fn query(
        &self,
        filter: &MemberFilter,
        order: &[Sort],
        slice: Option<Slice>,
    ) -> Result<Vec<MemberTeamRow>, StoreError> {
        let mut builder = content_query(filter, order, slice);
        let rows = builder
            .build_query_as::<MemberTeamRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Member search query failed");
                StoreError::from(e)
            })?;

        Ok(rows)
    }

    async fn count(&self, filter: &MemberFilter) -> Result<i64, StoreError> {
        let mut builder = count_query(filter);
        let (total,) = builder
            .build_query_as::<(i64,)>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Member count query failed");
                StoreError::from(e)
            })?;

        Ok(total)
    }
}
