use async_trait::async_trait;

use crate::domain::search::{MemberFilter, MemberTeamRow, Slice, Sort, StoreError};

/// Read capability the member search runs against
///
/// `query` and `count` take the same [`MemberFilter`], so a count always
/// covers exactly the rows the content query can return.
#[async_trait]
pub trait MemberSearchStore: Send + Sync {
    /// Fetch projected rows matching `filter`, in `order`, within `slice`
    ///
    /// With an empty `order` the row order is whatever the store yields.
    async fn query(
        &self,
        filter: &MemberFilter,
        order: &[Sort],
        slice: Option<Slice>,
    ) -> Result<Vec<MemberTeamRow>, StoreError>;

    /// Count all rows matching `filter`
    async fn count(&self, filter: &MemberFilter) -> Result<i64, StoreError>;
}
