// Search domain module
// Sparse search conditions, the predicates they fold into, and pagination

pub mod condition;
pub mod errors;
pub mod page;
pub mod predicate;
pub mod row;

pub use condition::SearchCondition;
pub use errors::{SearchError, SearchResult, StoreError};
pub use page::{Page, PageRequest};
pub use predicate::{MemberFilter, MemberPredicate, Slice, Sort, SortDirection, SortField, TeamJoin};
pub use row::MemberTeamRow;
