//! Page requests and paged results.

use crate::error::Error;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A request for one slice of the remote record set.
///
/// `page_index` is zero-based, as table pagers count; the API itself is
/// 1-based, see [`PageRequest::page_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page_index: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Creates a request for `page_index` with `page_size` records per page.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// The first page at the default size.
    pub fn first() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }

    /// The 1-based page number sent to the API.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }

    /// 1-based position of the first record of this page.
    pub fn first_row(&self) -> usize {
        self.page_index * self.page_size + 1
    }

    /// The following page, if `total` records reach past this one.
    pub fn next(&self, total: usize) -> Option<Self> {
        let page_index = self.page_index + 1;
        (page_index < page_count(total, self.page_size)).then(|| Self::new(page_index, self.page_size))
    }

    /// The preceding page, unless this is the first.
    pub fn previous(&self) -> Option<Self> {
        let page_index = self.page_index.checked_sub(1)?;
        Some(Self::new(page_index, self.page_size))
    }

    /// Rejects requests the API cannot answer.
    pub fn validate(&self) -> Result<(), Error> {
        if self.page_size == 0 {
            return Err(Error::InvalidRequest("page size must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of results and the dataset total.
///
/// # Example
///
/// ```ignore
/// let page = client.artworks(PageRequest::new(2, 25)).await?;
///
/// for record in page.records() {
///     println!("{}", record.title);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    records: Vec<T>,
    total: usize,
    request: PageRequest,
}

impl<T> Page<T> {
    /// Creates a page from decoded records and the dataset total.
    pub fn new(records: Vec<T>, total: usize, request: PageRequest) -> Self {
        Self {
            records,
            total,
            request,
        }
    }

    /// Returns the records in server order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Total number of records in the remote dataset.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The request this page answers.
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Number of pages needed to show `total` records at `page_size` per page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_is_one_based() {
        assert_eq!(PageRequest::new(0, 10).page_number(), 1);
        assert_eq!(PageRequest::new(4, 10).page_number(), 5);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = PageRequest::new(0, 0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert!(PageRequest::new(3, 1).validate().is_ok());
    }

    #[test]
    fn test_neighbouring_pages() {
        let request = PageRequest::new(2, 10);
        assert_eq!(request.first_row(), 21);
        assert_eq!(request.next(23), None);
        assert_eq!(request.next(31), Some(PageRequest::new(3, 10)));
        assert_eq!(request.previous(), Some(PageRequest::new(1, 10)));
        assert_eq!(PageRequest::first().previous(), None);
        assert_eq!(PageRequest::first().next(0), None);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(42, 10), 5);
        assert_eq!(page_count(40, 10), 4);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(5, 0), 0);
    }
}
