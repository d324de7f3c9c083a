//! Displayed page state.

use crate::api::PageRequest;
use crate::api::page_count;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::ArtworkRecord;

/// What a table renders: the records of the most recently applied fetch,
/// the dataset total and the loading/error flags.
///
/// A fetch in flight sets `loading` but leaves the previous records in
/// place until its response is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub(super) records: Vec<ArtworkRecord>,
    pub(super) total: usize,
    pub(super) request: PageRequest,
    pub(super) loading: bool,
    pub(super) error: Option<FetchFailure>,
}

impl PageState {
    /// Empty state at mount.
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            request: PageRequest::new(0, page_size),
            loading: false,
            error: None,
        }
    }

    /// Records of the displayed page, in server order.
    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    /// Total number of records in the remote dataset.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The page the displayed records belong to.
    pub fn request(&self) -> PageRequest {
        self.request
    }

    pub fn page_index(&self) -> usize {
        self.request.page_index
    }

    pub fn page_size(&self) -> usize {
        self.request.page_size
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total, self.request.page_size)
    }

    /// 1-based page number for the pager, or 0 when there are no pages.
    pub fn page_number(&self) -> usize {
        if self.page_count() == 0 {
            0
        } else {
            self.request.page_number()
        }
    }

    /// 1-based position of the first displayed record, or 0 when empty.
    pub fn first_row(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            self.request.first_row()
        }
    }

    /// 1-based position of the last displayed record, or 0 when empty.
    pub fn last_row(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            self.request.first_row() + self.records.len() - 1
        }
    }

    /// Returns `true` while the latest fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The failure of the latest fetch, if it failed.
    pub fn error(&self) -> Option<&FetchFailure> {
        self.error.as_ref()
    }

    /// Swaps in a freshly fetched page.
    pub(super) fn replace(&mut self, records: Vec<ArtworkRecord>, total: usize, request: PageRequest) {
        self.records = records;
        self.total = total;
        self.request = request;
        self.error = None;
    }
}

/// Kind of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request did not complete.
    Network,
    /// The server answered with an error status.
    Http(u16),
    /// The body was not the expected shape.
    Decode,
    /// The request was rejected before being sent.
    InvalidRequest,
}

/// A fetch failure retained for display and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// The request that failed; retrying re-issues it.
    pub request: PageRequest,
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    pub(super) fn new(request: PageRequest, error: &Error) -> Self {
        let kind = match error {
            Error::Api(ApiError::Http { status, .. }) => FailureKind::Http(*status),
            Error::Api(_) => FailureKind::Network,
            Error::Decode(_) => FailureKind::Decode,
            Error::InvalidRequest(_) => FailureKind::InvalidRequest,
        };
        Self {
            request,
            kind,
            message: error.to_string(),
        }
    }
}
