//! OMDb API request parameter types.
//!
//! Search requests and single-item title lookups accept different optional
//! parameters, so each context has its own record: [`SearchParams`] carries
//! `year`/`kind`/`page`, [`TitleLookupParams`] carries `year`/`kind`/`plot`.
//! Combinations the API does not accept are unrepresentable.

use serde::Deserialize;

/// Media kind, used both as the `type` filter and in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Feature film.
    Movie,
    /// TV series.
    Series,
    /// Single episode of a series.
    Episode,
}

impl MediaKind {
    /// Wire value for the `type` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
            Self::Episode => "episode",
        }
    }
}

/// Plot length selector for the `plot` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotLength {
    /// Abbreviated plot (the API default).
    Short,
    /// Full plot text.
    Full,
}

impl PlotLength {
    /// Wire value for the `plot` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

/// Optional filters for search requests (`s=`).
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Release year filter (`y` parameter).
    pub year: Option<u32>,
    /// Media kind filter (`type` parameter).
    pub kind: Option<MediaKind>,
    /// Result page, 1-based (`page` parameter).
    pub page: Option<u32>,
}

impl SearchParams {
    /// Sets the release year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the media kind filter.
    #[must_use]
    pub const fn kind(mut self, kind: MediaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Appends the set filters as wire pairs, in `y`, `type`, `page` order.
    pub(crate) fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(year) = self.year {
            query.push(("y", year.to_string()));
        }
        if let Some(kind) = self.kind {
            query.push(("type", String::from(kind.as_str())));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
    }
}

/// Optional filters for single-item title lookups (`t=`).
#[derive(Debug, Clone, Default)]
pub struct TitleLookupParams {
    /// Release year filter (`y` parameter).
    pub year: Option<u32>,
    /// Media kind filter (`type` parameter).
    pub kind: Option<MediaKind>,
    /// Plot length (`plot` parameter).
    pub plot: Option<PlotLength>,
}

impl TitleLookupParams {
    /// Sets the release year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the media kind filter.
    #[must_use]
    pub const fn kind(mut self, kind: MediaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the plot length.
    #[must_use]
    pub const fn plot(mut self, plot: PlotLength) -> Self {
        self.plot = Some(plot);
        self
    }

    /// Appends the set filters as wire pairs, in `y`, `type`, `plot` order.
    pub(crate) fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(year) = self.year {
            query.push(("y", year.to_string()));
        }
        if let Some(kind) = self.kind {
            query.push(("type", String::from(kind.as_str())));
        }
        if let Some(plot) = self.plot {
            query.push(("plot", String::from(plot.as_str())));
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_media_kind_wire_values() {
        // Arrange & Act & Assert
        assert_eq!(MediaKind::Movie.as_str(), "movie");
        assert_eq!(MediaKind::Series.as_str(), "series");
        assert_eq!(MediaKind::Episode.as_str(), "episode");
    }

    #[test]
    fn test_media_kind_deserializes_from_wire_value() {
        // Arrange & Act
        let kind: MediaKind = serde_json::from_str(r#""series""#).unwrap();

        // Assert
        assert_eq!(kind, MediaKind::Series);
    }

    #[test]
    fn test_plot_length_wire_values() {
        // Arrange & Act & Assert
        assert_eq!(PlotLength::Short.as_str(), "short");
        assert_eq!(PlotLength::Full.as_str(), "full");
    }

    #[test]
    fn test_search_params_default_is_empty() {
        // Arrange & Act
        let params = SearchParams::default();

        // Assert
        assert!(params.year.is_none());
        assert!(params.kind.is_none());
        assert!(params.page.is_none());
    }

    #[test]
    fn test_search_params_push_query_order() {
        // Arrange
        let params = SearchParams::default()
            .year(2019)
            .kind(MediaKind::Movie)
            .page(2);
        let mut query: Vec<(&'static str, String)> = Vec::new();

        // Act
        params.push_query(&mut query);

        // Assert
        assert_eq!(
            query,
            vec![
                ("y", String::from("2019")),
                ("type", String::from("movie")),
                ("page", String::from("2")),
            ]
        );
    }

    #[test]
    fn test_search_params_push_query_empty_appends_nothing() {
        // Arrange
        let params = SearchParams::default();
        let mut query: Vec<(&'static str, String)> = Vec::new();

        // Act
        params.push_query(&mut query);

        // Assert
        assert!(query.is_empty());
    }

    #[test]
    fn test_search_params_push_query_partial() {
        // Arrange
        let params = SearchParams::default().page(3);
        let mut query: Vec<(&'static str, String)> = Vec::new();

        // Act
        params.push_query(&mut query);

        // Assert
        assert_eq!(query, vec![("page", String::from("3"))]);
    }

    #[test]
    fn test_title_lookup_params_push_query_order() {
        // Arrange
        let params = TitleLookupParams::default()
            .year(2011)
            .kind(MediaKind::Series)
            .plot(PlotLength::Full);
        let mut query: Vec<(&'static str, String)> = Vec::new();

        // Act
        params.push_query(&mut query);

        // Assert
        assert_eq!(
            query,
            vec![
                ("y", String::from("2011")),
                ("type", String::from("series")),
                ("plot", String::from("full")),
            ]
        );
    }

    #[test]
    fn test_title_lookup_params_push_query_empty_appends_nothing() {
        // Arrange
        let params = TitleLookupParams::default();
        let mut query: Vec<(&'static str, String)> = Vec::new();

        // Act
        params.push_query(&mut query);

        // Assert
        assert!(query.is_empty());
    }

    #[test]
    fn test_setters_override_previous_value() {
        // Arrange & Act
        let params = SearchParams::default()
            .kind(MediaKind::Series)
            .kind(MediaKind::Movie);

        // Assert
        assert_eq!(params.kind, Some(MediaKind::Movie));
    }
}
