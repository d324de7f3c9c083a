//! Wire envelope of list responses.

use serde::Deserialize;

use super::ArtworkRecord;

/// Body of `GET /artworks`.
///
/// Only `data` and `pagination.total` are required; everything else the API
/// sends alongside (`info`, `config`, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Decoded list of artworks.
pub type ArtworkList = ListResponse<ArtworkRecord>;

/// Pagination block of a list response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Total number of records in the remote dataset.
    pub total: usize,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub total_pages: Option<usize>,
    /// 1-based page number echoed back by the server.
    #[serde(default)]
    pub current_page: Option<usize>,
    #[serde(default)]
    pub next_url: Option<String>,
}
