use thiserror::Error;

/// Failures reported by a member search store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store query failed: {0}")]
    Query(String),
}

/// Errors that can occur while searching members
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Invalid page request: offset {offset}, page size {page_size} (offset must be >= 0, page size > 0)")]
    InvalidPageRequest { offset: i64, page_size: i64 },

    #[error("Invalid sort: {0}")]
    InvalidSort(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_converts_unchanged() {
        let err: SearchError = StoreError::Unavailable("connection refused".to_string()).into();
        assert_eq!(
            err,
            SearchError::Store(StoreError::Unavailable("connection refused".to_string()))
        );
        assert_eq!(err.to_string(), "Store unavailable: connection refused");
    }

    #[test]
    fn invalid_page_request_message() {
        let err = SearchError::InvalidPageRequest {
            offset: -1,
            page_size: 10,
        };
        assert!(err.to_string().contains("offset -1"));
    }
}
