use std::sync::Arc;

use crate::domain::repositories::MemberSearchStore;
use crate::domain::search::{MemberTeamRow, Page, PageRequest, SearchCondition, SearchResult, Sort};

/// Dynamic member search over a [`MemberSearchStore`]
///
/// Stateless apart from the store handle; clones share the same store and
/// may run concurrently.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use member_search_api::domain::search::{PageRequest, SearchCondition};
/// use member_search_api::infrastructure::repositories::InMemoryStore;
/// use member_search_api::search::MemberSearchService;
///
/// # #[tokio::main]
/// # async fn main() {
/// let service = MemberSearchService::new(Arc::new(InMemoryStore::new()));
/// let page = service
///     .search_paged(&SearchCondition::default(), &PageRequest::new(0, 10).unwrap())
///     .await
///     .unwrap();
/// assert_eq!(page.total(), 0);
/// # }
/// ```
#[derive(Clone)]
pub struct MemberSearchService {
    store: Arc<dyn MemberSearchStore>,
}

impl MemberSearchService {
    pub fn new(store: Arc<dyn MemberSearchStore>) -> Self {
        Self { store }
    }

    /// All rows matching `condition`, in store order
    pub async fn search(&self, condition: &SearchCondition) -> SearchResult<Vec<MemberTeamRow>> {
        self.search_sorted(condition, &[]).await
    }

    /// All rows matching `condition`, ordered by `sort`
    pub async fn search_sorted(
        &self,
        condition: &SearchCondition,
        sort: &[Sort],
    ) -> SearchResult<Vec<MemberTeamRow>> {
        let filter = condition.to_filter();
        tracing::debug!(predicates = filter.predicates().len(), "Searching members");

        Ok(self.store.query(&filter, sort, None).await?)
    }

    /// One page of rows matching `condition`, plus the total match count
    ///
    /// The count query is skipped when the page content already determines
    /// the total (see [`PageRequest::known_total`]).
    pub async fn search_paged(
        &self,
        condition: &SearchCondition,
        request: &PageRequest,
    ) -> SearchResult<Page<MemberTeamRow>> {
        let filter = condition.to_filter();
        tracing::debug!(
            predicates = filter.predicates().len(),
            offset = request.offset(),
            page_size = request.page_size(),
            "Searching members page"
        );

        let content = self
            .store
            .query(&filter, request.sort(), Some(request.slice()))
            .await?;

        let total = match request.known_total(content.len()) {
            Some(total) => {
                tracing::debug!(total, "Count query elided");
                total
            }
            None => self.store.count(&filter).await?,
        };

        Ok(Page::new(content, request.clone(), total))
    }
}
