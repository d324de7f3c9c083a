//! Main ArticClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;

/// Public endpoint of the Art Institute of Chicago API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// The client for the artworks catalog.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks. Requests carry no authentication and no custom headers.
///
/// # Example
///
/// ```ignore
/// use artic_lib::{ArticClient, DEFAULT_BASE_URL};
/// use artic_lib::api::PageRequest;
///
/// let client = ArticClient::builder()
///     .url(DEFAULT_BASE_URL)
///     .build()?;
///
/// let page = client.artworks(PageRequest::first()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

#[derive(Debug)]
struct ArticClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
    fields: Option<Vec<String>>,
}

impl ArticClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder<Missing> {
        ArticClientBuilder::new()
    }

    /// Returns the base URL of the API.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the per-request timeout, if one was configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    /// Returns the field projection sent with list requests, if any.
    pub fn fields(&self) -> Option<&[String]> {
        self.inner.fields.as_deref()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.inner.http_client
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`ArticClient`].
///
/// Uses the typestate pattern so the base URL must be provided before
/// [`build`](ArticClientBuilder::build) is available.
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder()
///     .url("https://api.artic.edu/api/v1")
///     .timeout(Duration::from_secs(30))
///     .fields(ARTWORK_FIELDS)
///     .build()?;
/// ```
pub struct ArticClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
    fields: Option<Vec<String>>,
}

impl ArticClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
            fields: None,
        }
    }

    /// Sets the API base URL, e.g. `https://api.artic.edu/api/v1`.
    pub fn url(self, url: impl Into<String>) -> ArticClientBuilder<Set<String>> {
        ArticClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
            fields: self.fields,
        }
    }
}

impl Default for ArticClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ArticClientBuilder<U> {
    /// Sets the request timeout. Requests have no timeout unless this is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Restricts list responses to the given fields.
    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = Some(fields.iter().map(|s| s.to_string()).collect());
        self
    }
}

impl ArticClientBuilder<Set<String>> {
    /// Builds the [`ArticClient`].
    ///
    /// Fails if the base URL cannot be parsed or the HTTP client cannot be
    /// initialised.
    pub fn build(self) -> Result<ArticClient, Error> {
        let base_url = Url::parse(self.url.0.trim_end_matches('/')).map_err(ApiError::from)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()).into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| ApiError::from_reqwest(e, None))?
            }
        };

        Ok(ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
                fields: self.fields,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_trims_trailing_slash() {
        let client = ArticClient::builder()
            .url("https://api.artic.edu/api/v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.artic.edu/api/v1");
        assert!(client.timeout().is_none());
        assert!(client.fields().is_none());
    }

    #[test]
    fn test_build_rejects_invalid_url() {
        let err = ArticClient::builder().url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_build_rejects_non_base_url() {
        let err = ArticClient::builder()
            .url("mailto:someone@example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));
    }
}
