use super::errors::SearchError;
use super::predicate::{Slice, Sort};

/// Requested window into a result set
///
/// # Invariants
/// - `offset >= 0`
/// - `page_size > 0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    offset: i64,
    page_size: i64,
    sort: Vec<Sort>,
}

impl PageRequest {
    /// Creates a page request from a raw offset and page size
    ///
    /// # Returns
    /// * `Err(SearchError::InvalidPageRequest)` - If offset < 0 or page_size <= 0
    pub fn new(offset: i64, page_size: i64) -> Result<Self, SearchError> {
        if offset < 0 || page_size <= 0 {
            return Err(SearchError::InvalidPageRequest { offset, page_size });
        }

        Ok(Self {
            offset,
            page_size,
            sort: Vec::new(),
        })
    }

    /// Creates a request for the zero-based `page_number` of `page_size` rows
    ///
    /// # Example
    /// ```
    /// use member_search_api::domain::search::PageRequest;
    ///
    /// let request = PageRequest::of_page(2, 10).unwrap();
    /// assert_eq!(request.offset(), 20);
    /// ```
    pub fn of_page(page_number: i64, page_size: i64) -> Result<Self, SearchError> {
        let offset = page_number
            .checked_mul(page_size)
            .filter(|_| page_number >= 0)
            .ok_or(SearchError::InvalidPageRequest {
                offset: page_number.saturating_mul(page_size),
                page_size,
            })?;

        Self::new(offset, page_size)
    }

    pub fn with_sort(mut self, sort: Vec<Sort>) -> Self {
        self.sort = sort;
        self
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn sort(&self) -> &[Sort] {
        &self.sort
    }

    /// Zero-based page number (offset divided by page size)
    pub fn page_number(&self) -> i64 {
        self.offset / self.page_size
    }

    pub fn slice(&self) -> Slice {
        Slice {
            offset: self.offset,
            limit: self.page_size,
        }
    }

    /// Total row count implied by the page content alone, if it is implied
    ///
    /// A page shorter than `page_size` is the last page, so the total is
    /// `offset + content_len`. An empty page past offset 0 proves nothing
    /// (the offset may lie beyond the end), and a full page says nothing
    /// about the rows after it; both need a count query.
    pub fn known_total(&self, content_len: usize) -> Option<i64> {
        let len = i64::try_from(content_len).ok()?;

        if self.offset == 0 {
            return (len < self.page_size).then_some(len);
        }
        if len != 0 && len < self.page_size {
            return self.offset.checked_add(len);
        }
        None
    }
}

/// One page of results plus the total across all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    total: i64,
    request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            content,
            total,
            request,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Total matching rows across all pages
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn total_pages(&self) -> i64 {
        if self.total <= 0 {
            return 0;
        }
        (self.total - 1) / self.request.page_size + 1
    }

    pub fn page_number(&self) -> i64 {
        self.request.page_number()
    }

    pub fn has_next(&self) -> bool {
        let len = i64::try_from(self.content.len()).unwrap_or(i64::MAX);
        self.request.offset.saturating_add(len) < self.total
    }

    pub fn is_first(&self) -> bool {
        self.request.offset == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }
}
