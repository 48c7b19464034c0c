//! API client library for the OMDb API.
//!
//! Searches movies and series and fetches single-item details by IMDb ID
//! or title via the OMDb HTTP API.

mod api;
mod client;
mod error;
mod params;
mod types;

pub use api::{LocalOmdbApi, OmdbApi};
pub use client::{OmdbClient, OmdbClientBuilder};
pub use error::{OmdbError, Operation, Result};
pub use params::{MediaKind, PlotLength, SearchParams, TitleLookupParams};
pub use types::{MediaItem, Rating, SearchResult};
