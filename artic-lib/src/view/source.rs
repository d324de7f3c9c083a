//! Where pages come from.

use async_trait::async_trait;

use crate::ArticClient;
use crate::api::Page;
use crate::api::PageRequest;
use crate::error::Error;
use crate::model::ArtworkRecord;

/// A fetcher of artwork pages.
///
/// [`ArticClient`] is the production implementation; tests substitute
/// mocks to control timing and failures.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page described by `request`.
    async fn fetch(&self, request: PageRequest) -> Result<Page<ArtworkRecord>, Error>;
}

#[async_trait]
impl PageSource for ArticClient {
    async fn fetch(&self, request: PageRequest) -> Result<Page<ArtworkRecord>, Error> {
        self.artworks(request).await
    }
}
