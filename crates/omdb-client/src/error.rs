//! Error types for the OMDb API client.

use thiserror::Error;

/// The API operation an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Free-text search (`s=`).
    Search,
    /// Single-item lookup by IMDb ID (`i=`).
    IdLookup,
    /// Single-item lookup by title (`t=`).
    TitleLookup,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Search => "search request",
            Self::IdLookup => "lookup by id",
            Self::TitleLookup => "lookup by title",
        };
        f.write_str(name)
    }
}

/// Errors returned by the OMDb API client.
///
/// Classification is uniform across operations: transport failures and
/// unexpected statuses become [`OmdbError::Request`], an HTTP 401 whose body
/// carries an upstream message becomes [`OmdbError::Authentication`], and an
/// upstream "not found" is never an error (operations return `None` or an
/// empty list instead).
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum OmdbError {
    /// The client was misconfigured. Raised at construction only.
    #[error("configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration.
        message: String,
    },

    /// The API rejected the key (HTTP 401 with an upstream message).
    #[error("authentication failed: {message}")]
    Authentication {
        /// Error message reported by the API.
        message: String,
    },

    /// The HTTP exchange failed (transport error or unexpected status).
    #[error("{operation} failed")]
    Request {
        /// Operation the request belonged to.
        operation: Operation,
        /// Underlying transport error, when one exists.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The response body was not the expected JSON shape.
    #[error("{operation} JSON decoding failed")]
    Decode {
        /// Operation the response belonged to.
        operation: Operation,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for OMDb client operations.
pub type Result<T> = std::result::Result<T, OmdbError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_operation_display() {
        // Arrange & Act & Assert
        assert_eq!(Operation::Search.to_string(), "search request");
        assert_eq!(Operation::IdLookup.to_string(), "lookup by id");
        assert_eq!(Operation::TitleLookup.to_string(), "lookup by title");
    }

    #[test]
    fn test_request_error_display_identifies_operation() {
        // Arrange
        let err = OmdbError::Request {
            operation: Operation::Search,
            source: None,
        };

        // Act & Assert
        assert_eq!(err.to_string(), "search request failed");
    }

    #[test]
    fn test_authentication_error_preserves_message() {
        // Arrange
        let err = OmdbError::Authentication {
            message: String::from("Invalid API key!"),
        };

        // Act & Assert
        assert_eq!(err.to_string(), "authentication failed: Invalid API key!");
    }

    #[test]
    fn test_decode_error_chains_source() {
        // Arrange
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = OmdbError::Decode {
            operation: Operation::IdLookup,
            source,
        };

        // Act & Assert
        assert_eq!(err.to_string(), "lookup by id JSON decoding failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
