//! The view-state holder.

use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use log::debug;
use log::warn;
use tokio::sync::Notify;

use crate::api::DEFAULT_PAGE_SIZE;
use crate::api::Page;
use crate::api::PageRequest;
use crate::error::Error;
use crate::model::ArtworkRecord;

use super::FetchFailure;
use super::PageSource;
use super::PageState;
use super::SelectionSet;

/// Result of a fetch that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was applied to the displayed page.
    Applied {
        /// Number of records on the page.
        records: usize,
        /// Dataset total reported by the server.
        total: usize,
    },
    /// A newer fetch was issued before this one resolved; its response
    /// (success or failure) was discarded.
    Superseded,
}

#[derive(Debug)]
struct ViewInner {
    page: PageState,
    selection: SelectionSet,
    /// Last issued request-sequence token. Only the fetch holding it may
    /// write the page or clear the loading flag.
    latest: u64,
}

/// Page, selection, loading and error state of an artworks table.
///
/// Cheap to clone; clones share state, so fetches can run as independent
/// tasks. Fetches are not serialized: every fetch takes a new sequence
/// token and only the holder of the latest token may apply its response,
/// so a slow earlier response can never overwrite a newer page.
///
/// # Example
///
/// ```ignore
/// let view = ArtworkView::new(client);
/// view.mount().await?;
///
/// tokio::spawn({
///     let view = view.clone();
///     async move { view.on_page_change(1, 10).await }
/// });
/// ```
#[derive(Clone)]
pub struct ArtworkView {
    source: Arc<dyn PageSource>,
    inner: Arc<RwLock<ViewInner>>,
    default_page_size: usize,
    dirty: Arc<AtomicBool>,
    changed: Arc<Notify>,
}

impl ArtworkView {
    /// Creates an empty view backed by `source`, with the default page size.
    pub fn new(source: impl PageSource + 'static) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    /// Creates an empty view that mounts with `page_size` records per page.
    pub fn with_page_size(source: impl PageSource + 'static, page_size: usize) -> Self {
        Self {
            source: Arc::new(source),
            inner: Arc::new(RwLock::new(ViewInner {
                page: PageState::new(page_size),
                selection: SelectionSet::new(),
                latest: 0,
            })),
            default_page_size: page_size,
            dirty: Arc::new(AtomicBool::new(false)),
            changed: Arc::new(Notify::new()),
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Initial load: the first page at the default page size.
    pub async fn mount(&self) -> Result<FetchOutcome, Error> {
        self.fetch_page(0, self.default_page_size).await
    }

    /// Fetches `page_index` (zero-based) with `page_size` records per page.
    ///
    /// Sets the loading flag immediately. On success the displayed records
    /// and total are replaced wholesale; on failure they are kept and the
    /// failure is recorded for display and retry. Either way the loading flag
    /// is cleared when this fetch ends (even if the future is dropped), unless
    /// a newer fetch is still in flight.
    pub async fn fetch_page(&self, page_index: usize, page_size: usize) -> Result<FetchOutcome, Error> {
        let request = PageRequest::new(page_index, page_size);
        request.validate()?;

        let token = self.begin(request);
        let _loading = LoadingGuard { view: self, token };

        let result = self.source.fetch(request).await;
        self.finish(token, request, result)
    }

    /// Page-change event from the table: fetches exactly what was asked for.
    ///
    /// The selection is left as is.
    pub async fn on_page_change(&self, page_index: usize, page_size: usize) -> Result<FetchOutcome, Error> {
        self.fetch_page(page_index, page_size).await
    }

    /// Selection-change event from the table: replaces the selection with
    /// `records`. No network call.
    pub fn on_selection_change(&self, records: Vec<ArtworkRecord>) {
        let selection = SelectionSet::from_records(records);
        debug!("Selection changed: {} records", selection.len());
        if let Ok(mut guard) = self.inner.write() {
            guard.selection = selection;
        }
        self.mark_changed();
    }

    /// Re-issues the latest failed request, if the latest fetch failed.
    pub async fn retry(&self) -> Option<Result<FetchOutcome, Error>> {
        let request = self.failed_request()?;
        Some(self.fetch_page(request.page_index, request.page_size).await)
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Snapshot of the displayed page.
    pub fn page(&self) -> PageState {
        self.inner
            .read()
            .map(|g| g.page.clone())
            .unwrap_or_else(|_| PageState::new(self.default_page_size))
    }

    /// Snapshot of the selection.
    pub fn selection(&self) -> SelectionSet {
        self.inner
            .read()
            .map(|g| g.selection.clone())
            .unwrap_or_default()
    }

    /// Returns `true` while the latest fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.page.loading).unwrap_or(false)
    }

    /// The request to re-issue if the latest fetch failed.
    pub fn failed_request(&self) -> Option<PageRequest> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.page.error.as_ref().map(|e| e.request))
    }

    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Returns and clears the changed flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    /// Waits until the state changes.
    ///
    /// A change made while nobody is waiting is remembered, so the next call
    /// returns immediately.
    pub async fn changed(&self) {
        self.changed.notified().await;
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn begin(&self, request: PageRequest) -> u64 {
        let token = match self.inner.write() {
            Ok(mut guard) => {
                guard.latest += 1;
                guard.page.loading = true;
                guard.page.error = None;
                guard.latest
            }
            Err(_) => 0,
        };
        debug!(
            "Fetch #{} started: page {} (size {})",
            token,
            request.page_number(),
            request.page_size
        );
        self.mark_changed();
        token
    }

    fn finish(
        &self,
        token: u64,
        request: PageRequest,
        result: Result<Page<ArtworkRecord>, Error>,
    ) -> Result<FetchOutcome, Error> {
        let Ok(mut guard) = self.inner.write() else {
            return Ok(FetchOutcome::Superseded);
        };

        if guard.latest != token {
            debug!(
                "Fetch #{} superseded by #{}, discarding {}",
                token,
                guard.latest,
                if result.is_ok() { "response" } else { "error" }
            );
            return Ok(FetchOutcome::Superseded);
        }

        let outcome = match result {
            Ok(page) => {
                let total = page.total();
                let records = page.into_records();
                let len = records.len();
                guard.page.replace(records, total, request);
                debug!("Fetch #{} applied: {} records of {}", token, len, total);
                Ok(FetchOutcome::Applied {
                    records: len,
                    total,
                })
            }
            Err(err) => {
                warn!("Fetch #{} failed: {}", token, err);
                guard.page.error = Some(FetchFailure::new(request, &err));
                Err(err)
            }
        };
        drop(guard);

        self.mark_changed();
        outcome
    }

    fn end(&self, token: u64) {
        if let Ok(mut guard) = self.inner.write()
            && guard.latest == token
        {
            guard.page.loading = false;
        }
        self.mark_changed();
    }

    fn mark_changed(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        self.changed.notify_one();
    }
}

impl std::fmt::Debug for ArtworkView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtworkView")
            .field("inner", &self.inner)
            .field("default_page_size", &self.default_page_size)
            .finish_non_exhaustive()
    }
}

/// Clears the loading flag when a fetch ends, however it ends.
struct LoadingGuard<'a> {
    view: &'a ArtworkView,
    token: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.view.end(self.token);
    }
}
