//! Artwork records as served by the catalog.

use serde::Deserialize;

use super::nullable;

/// Image path rendered when a record has no image reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.png";

/// Fields read from the artworks endpoint.
///
/// Passed as the `fields` projection when the client is configured to request
/// only what the table shows.
pub const ARTWORK_FIELDS: &[&str] = &[
    "id",
    "title",
    "artist_display",
    "date_display",
    "place_of_origin",
    "inscriptions",
    "date_start",
    "date_end",
    "image_url",
];

/// Stable identifier of an artwork, used as the table row key.
pub type ArtworkId = u64;

/// One catalog entry.
///
/// Records are decoded fresh for every page and never mutated afterwards; a
/// page turn replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtworkRecord {
    /// Unique, stable identifier.
    pub id: ArtworkId,
    #[serde(deserialize_with = "nullable::text")]
    pub title: String,
    #[serde(deserialize_with = "nullable::text")]
    pub artist_display: String,
    #[serde(deserialize_with = "nullable::text")]
    pub date_display: String,
    #[serde(deserialize_with = "nullable::text")]
    pub place_of_origin: String,
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Earliest year of the work. The catalog has undated works, so `null` is accepted.
    #[serde(deserialize_with = "nullable::year")]
    pub date_start: Option<i32>,
    /// Latest year of the work.
    #[serde(deserialize_with = "nullable::year")]
    pub date_end: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ArtworkRecord {
    /// Returns the image to render: the record's image reference, or
    /// `placeholder` when it is missing or empty.
    pub fn image_source<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }
}
