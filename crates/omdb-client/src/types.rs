//! OMDb API response types.
//!
//! The API reports most values as display strings (`"181 min"`, `"N/A"`,
//! `"1,022,731"`); they are passed through verbatim. Kind-conditional fields
//! (`totalSeasons` for series, `DVD`/`BoxOffice`/`Production`/`Website` for
//! movies) are `Option` and absent rather than defaulted.

use serde::Deserialize;

use crate::params::MediaKind;

// --- Search ---

/// A single entry in a search result listing.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year or year range (e.g., "2019", "2011–2019", "N/A").
    #[serde(rename = "Year")]
    pub year: String,
    /// IMDb ID (e.g., "tt4154796").
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// Media kind.
    #[serde(rename = "Type")]
    pub kind: MediaKind,
    /// Poster image URL ("N/A" when unavailable).
    #[serde(rename = "Poster")]
    pub poster: String,
}

/// Search listing envelope.
///
/// The API omits the `Search` field entirely when nothing matched; the
/// `totalResults` and `Response` fields are not consumed.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchEnvelope {
    /// Matched entries, absent when nothing matched.
    #[serde(rename = "Search", default)]
    pub(crate) results: Option<Vec<SearchResult>>,
}

// --- Single item ---

/// An external rating entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Rating {
    /// Rating source (e.g., "Internet Movie Database", "Rotten Tomatoes").
    #[serde(rename = "Source")]
    pub source: String,
    /// Rating value in the source's own scale (e.g., "8.4/10", "94%").
    #[serde(rename = "Value")]
    pub value: String,
}

/// Full record for a single movie, series, or episode.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    /// Title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year or year range.
    #[serde(rename = "Year")]
    pub year: String,
    /// Content rating (e.g., "PG-13").
    #[serde(rename = "Rated")]
    pub rated: String,
    /// Release date (e.g., "26 Apr 2019").
    #[serde(rename = "Released")]
    pub released: String,
    /// Runtime (e.g., "181 min").
    #[serde(rename = "Runtime")]
    pub runtime: String,
    /// Comma-separated genres.
    #[serde(rename = "Genre")]
    pub genre: String,
    /// Director name(s).
    #[serde(rename = "Director")]
    pub director: String,
    /// Writer name(s).
    #[serde(rename = "Writer")]
    pub writer: String,
    /// Comma-separated principal cast.
    #[serde(rename = "Actors")]
    pub actors: String,
    /// Plot text (short or full, per the `plot` parameter).
    #[serde(rename = "Plot")]
    pub plot: String,
    /// Comma-separated languages.
    #[serde(rename = "Language")]
    pub language: String,
    /// Comma-separated countries.
    #[serde(rename = "Country")]
    pub country: String,
    /// Awards summary text.
    #[serde(rename = "Awards")]
    pub awards: String,
    /// Poster image URL ("N/A" when unavailable).
    #[serde(rename = "Poster")]
    pub poster: String,
    /// External ratings.
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
    /// Metascore (e.g., "78", "N/A").
    #[serde(rename = "Metascore")]
    pub metascore: String,
    /// IMDb rating (e.g., "8.4").
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    /// IMDb vote count (e.g., "1,022,731").
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    /// IMDb ID.
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// Media kind.
    #[serde(rename = "Type")]
    pub kind: MediaKind,
    /// Season count (series only).
    #[serde(rename = "totalSeasons", default)]
    pub total_seasons: Option<String>,
    /// DVD release date (movies only).
    #[serde(rename = "DVD", default)]
    pub dvd: Option<String>,
    /// Box office gross (movies only).
    #[serde(rename = "BoxOffice", default)]
    pub box_office: Option<String>,
    /// Production company (movies only).
    #[serde(rename = "Production", default)]
    pub production: Option<String>,
    /// Official website (movies only).
    #[serde(rename = "Website", default)]
    pub website: Option<String>,
}

/// Success/failure flag carried by every response body.
///
/// Single-item lookups consult it to distinguish "not found" from a real
/// record; search listings do not (an absent `Search` field already means
/// nothing matched).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResponseFlag {
    /// "True" on success, "False" when the lookup failed.
    #[serde(rename = "Response")]
    pub(crate) response: String,
    /// Upstream error message, present when `response` is "False".
    #[serde(rename = "Error", default)]
    pub(crate) error: Option<String>,
}

impl ResponseFlag {
    /// Whether the body reports a failed lookup.
    pub(crate) fn is_failure(&self) -> bool {
        self.response == "False"
    }
}
