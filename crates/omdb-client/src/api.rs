//! `OmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;
use crate::params::{SearchParams, TitleLookupParams};
use crate::types::{MediaItem, SearchResult};

/// OMDb API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(OmdbApi: Send)]
pub trait LocalOmdbApi {
    /// Searches movies, series, and episodes by free text.
    ///
    /// Returns the matched entries in API order, or an empty list when
    /// nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the key,
    /// or the response cannot be decoded.
    async fn search(&self, query: &str, params: &SearchParams) -> Result<Vec<SearchResult>>;

    /// Searches movies only (`type=movie`); any kind set in `params` is
    /// overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the key,
    /// or the response cannot be decoded.
    async fn search_movies(&self, query: &str, params: &SearchParams)
    -> Result<Vec<SearchResult>>;

    /// Searches series only (`type=series`); any kind set in `params` is
    /// overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the key,
    /// or the response cannot be decoded.
    async fn search_series(&self, query: &str, params: &SearchParams)
    -> Result<Vec<SearchResult>>;

    /// Fetches a single item by IMDb ID.
    ///
    /// Returns `None` when the API reports no match for the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the key,
    /// or the response cannot be decoded.
    async fn get_by_id(&self, imdb_id: &str) -> Result<Option<MediaItem>>;

    /// Fetches the single best match for a title.
    ///
    /// Returns `None` when the API reports no match for the title.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the key,
    /// or the response cannot be decoded.
    async fn get_by_title(
        &self,
        title: &str,
        params: &TitleLookupParams,
    ) -> Result<Option<MediaItem>>;

    /// Fetches the single best movie match for a title (`type=movie`); any
    /// kind set in `params` is overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the key,
    /// or the response cannot be decoded.
    async fn get_movie_by_title(
        &self,
        title: &str,
        params: &TitleLookupParams,
    ) -> Result<Option<MediaItem>>;

    /// Fetches the single best series match for a title (`type=series`); any
    /// kind set in `params` is overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API rejects the key,
    /// or the response cannot be decoded.
    async fn get_series_by_title(
        &self,
        title: &str,
        params: &TitleLookupParams,
    ) -> Result<Option<MediaItem>>;
}
