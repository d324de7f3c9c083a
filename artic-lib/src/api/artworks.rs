//! The artworks listing endpoint.
//!
//! `GET {base}/artworks?page={1-based page}&limit={page size}` returns a
//! `data` array and a `pagination` block. This module builds that URL,
//! issues the request and decodes the body explicitly, so a body of the
//! wrong shape surfaces as a [`DecodeError`] instead of being trusted.

use log::debug;
use serde::Deserialize;
use url::Url;

use crate::ArticClient;
use crate::error::ApiError;
use crate::error::DecodeError;
use crate::error::Error;
use crate::model::ArtworkList;
use crate::model::ArtworkRecord;

use super::Page;
use super::PageRequest;

impl ArticClient {
    /// Fetches one page of artworks.
    ///
    /// Issues exactly one GET. Non-success statuses become
    /// [`ApiError::Http`], transport failures [`ApiError::Network`] (or
    /// [`ApiError::Timeout`] when a timeout is configured), and a body that
    /// does not match the expected shape [`Error::Decode`].
    pub async fn artworks(&self, request: PageRequest) -> Result<Page<ArtworkRecord>, Error> {
        request.validate()?;

        let url = artworks_url(self.base_url(), request, self.fields())?;
        debug!("GET {}", url);

        let mut builder = self.http().get(url);
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.timeout()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.timeout()))?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(ApiError::http(status.as_u16(), message).into());
        }

        let list = decode_artworks(&body)?;
        debug!(
            "Decoded {} artworks (total {}) for page {}",
            list.data.len(),
            list.pagination.total,
            request.page_number()
        );

        Ok(Page::new(list.data, list.pagination.total, request))
    }
}

/// Builds the listing URL for `request`.
///
/// The page number is 1-based; `fields`, when given, is sent as a
/// comma-separated projection.
pub fn artworks_url(
    base: &Url,
    request: PageRequest,
    fields: Option<&[String]>,
) -> Result<Url, ApiError> {
    let mut url = Url::parse(&format!("{}/artworks", base.as_str().trim_end_matches('/')))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("page", &request.page_number().to_string());
        query.append_pair("limit", &request.page_size.to_string());
        if let Some(fields) = fields.filter(|f| !f.is_empty()) {
            query.append_pair("fields", &fields.join(","));
        }
    }
    Ok(url)
}

/// Decodes a listing body.
pub fn decode_artworks(body: &str) -> Result<ArtworkList, DecodeError> {
    serde_json::from_str(body).map_err(|e| DecodeError::from_json(&e, body))
}

/// Error body the API sends with non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match (parsed.error, parsed.detail) {
        (Some(error), Some(detail)) => Some(format!("{}: {}", error, detail)),
        (Some(message), None) | (None, Some(message)) => Some(message),
        (None, None) => None,
    }
}
