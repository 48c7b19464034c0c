//! `OmdbClient` - OMDb API client implementation.

use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::api::LocalOmdbApi;
use crate::error::{OmdbError, Operation, Result};
use crate::params::{MediaKind, SearchParams, TitleLookupParams};
use crate::types::{MediaItem, ResponseFlag, SearchEnvelope, SearchResult};

/// Default base URL for the OMDb API.
const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// OMDb API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL.
    base_url: Url,
    /// API key, sent as the `apikey` parameter. Never empty.
    api_key: String,
}

/// Builder for `OmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl OmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required, must be non-empty).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the User-Agent (default: `omdb-client/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client. Performs no network activity.
    ///
    /// # Errors
    ///
    /// Returns [`OmdbError::Configuration`] if the API key is missing or
    /// empty, or if the HTTP client cannot be built.
    pub fn build(self) -> Result<OmdbClient> {
        let api_key = match self.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(OmdbError::Configuration {
                    message: String::from("API key is required"),
                });
            }
        };

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL).map_err(|e| OmdbError::Configuration {
                message: format!("invalid default base URL: {e}"),
            })?
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .map_err(|e| OmdbError::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(OmdbClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl OmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> OmdbClientBuilder {
        OmdbClientBuilder::new()
    }

    /// Creates a client with the default base URL and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns [`OmdbError::Configuration`] if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Starts a query with the `apikey` pair; it is always first.
    fn base_query(&self) -> Vec<(&'static str, String)> {
        vec![("apikey", self.api_key.clone())]
    }

    /// Sends a GET request and returns the response body on HTTP success.
    ///
    /// Failure classification is uniform across operations: a transport
    /// error becomes [`OmdbError::Request`] with the source attached, an
    /// HTTP 401 whose body carries an upstream message becomes
    /// [`OmdbError::Authentication`], and any other non-success status
    /// becomes [`OmdbError::Request`].
    #[instrument(skip_all)]
    async fn get(&self, operation: Operation, query: &[(&str, String)]) -> Result<String> {
        // The query string carries the API key, so full URLs are never logged.
        tracing::debug!(%operation, "OMDb API request");

        let send_result = self
            .http_client
            .get(self.base_url.clone())
            .query(query)
            .send()
            .await;
        let response = send_result.map_err(|e| OmdbError::Request {
            operation,
            source: Some(e),
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            if status == reqwest::StatusCode::UNAUTHORIZED
                && let Ok(flag) = serde_json::from_str::<ResponseFlag>(&body)
                && let Some(message) = flag.error
            {
                return Err(OmdbError::Authentication { message });
            }
            tracing::warn!(
                %operation,
                code = status.as_u16(),
                body_len = body.len(),
                "OMDb API error response"
            );
            return Err(OmdbError::Request {
                operation,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| OmdbError::Request {
            operation,
            source: Some(e),
        })?;
        tracing::debug!(%operation, body_len = body.len(), "Response body received");
        Ok(body)
    }

    /// Parses a search listing body. A body without a `Search` field
    /// (the API's "nothing matched" shape) yields an empty list.
    pub(crate) fn parse_search_body(operation: Operation, body: &str) -> Result<Vec<SearchResult>> {
        let raw_result: std::result::Result<SearchEnvelope, _> = serde_json::from_str(body);
        let envelope = raw_result.map_err(|e| OmdbError::Decode {
            operation,
            source: e,
        })?;
        Ok(envelope.results.unwrap_or_default())
    }

    /// Parses a single-item body. A body whose response flag reports a
    /// failed lookup yields `None`.
    pub(crate) fn parse_item_body(operation: Operation, body: &str) -> Result<Option<MediaItem>> {
        let flag_result: std::result::Result<ResponseFlag, _> = serde_json::from_str(body);
        let flag = flag_result.map_err(|e| OmdbError::Decode {
            operation,
            source: e,
        })?;
        if flag.is_failure() {
            tracing::debug!(
                %operation,
                message = flag.error.as_deref().unwrap_or("<no message>"),
                "OMDb API reported no match"
            );
            return Ok(None);
        }

        let raw_result: std::result::Result<MediaItem, _> = serde_json::from_str(body);
        let item = raw_result.map_err(|e| OmdbError::Decode {
            operation,
            source: e,
        })?;
        Ok(Some(item))
    }
}

impl LocalOmdbApi for OmdbClient {
    #[instrument(skip_all)]
    async fn search(&self, query: &str, params: &SearchParams) -> Result<Vec<SearchResult>> {
        let mut pairs = self.base_query();
        pairs.push(("s", String::from(query)));
        params.push_query(&mut pairs);

        let body = self.get(Operation::Search, &pairs).await?;
        Self::parse_search_body(Operation::Search, &body)
    }

    #[instrument(skip_all)]
    async fn search_movies(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> Result<Vec<SearchResult>> {
        let params = params.clone().kind(MediaKind::Movie);
        self.search(query, &params).await
    }

    #[instrument(skip_all)]
    async fn search_series(
        &self,
        query: &str,
        params: &SearchParams,
    ) -> Result<Vec<SearchResult>> {
        let params = params.clone().kind(MediaKind::Series);
        self.search(query, &params).await
    }

    #[instrument(skip_all)]
    async fn get_by_id(&self, imdb_id: &str) -> Result<Option<MediaItem>> {
        let mut pairs = self.base_query();
        pairs.push(("i", String::from(imdb_id)));

        let body = self.get(Operation::IdLookup, &pairs).await?;
        Self::parse_item_body(Operation::IdLookup, &body)
    }

    #[instrument(skip_all)]
    async fn get_by_title(
        &self,
        title: &str,
        params: &TitleLookupParams,
    ) -> Result<Option<MediaItem>> {
        let mut pairs = self.base_query();
        pairs.push(("t", String::from(title)));
        params.push_query(&mut pairs);

        let body = self.get(Operation::TitleLookup, &pairs).await?;
        Self::parse_item_body(Operation::TitleLookup, &body)
    }

    #[instrument(skip_all)]
    async fn get_movie_by_title(
        &self,
        title: &str,
        params: &TitleLookupParams,
    ) -> Result<Option<MediaItem>> {
        let params = params.clone().kind(MediaKind::Movie);
        self.get_by_title(title, &params).await
    }

    #[instrument(skip_all)]
    async fn get_series_by_title(
        &self,
        title: &str,
        params: &TitleLookupParams,
    ) -> Result<Option<MediaItem>> {
        let params = params.clone().kind(MediaKind::Series);
        self.get_by_title(title, &params).await
    }
}
