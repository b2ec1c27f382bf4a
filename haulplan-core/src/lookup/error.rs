use thiserror::Error;

/// Errors from [`crate::lookup::RouteLookup`] implementations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// The location query was empty or whitespace.
    #[error("location query must not be empty")]
    EmptyQuery,
    /// The geocoder returned no match for the query.
    #[error("no location matched {query:?}")]
    NoMatch {
        /// The query that failed to resolve.
        query: String,
    },
    /// The routing service found no route between the two points.
    #[error("no route found between the requested points")]
    NoRoute,
    /// A request URL could not be built from the configured base URL.
    #[error("invalid request URL {url:?}: {message}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Parser error description.
        message: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that timed out, without query parameters.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Endpoint that failed, without query parameters.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Endpoint that failed, without query parameters.
        url: String,
        /// Error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse lookup response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
}
