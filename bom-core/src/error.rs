use reqwest::StatusCode;

/// Errors surfaced by the API client.
///
/// The server signals "no such location/resource" with HTTP 400, not 404;
/// that status gets its own variant so callers can branch on it. Transport
/// failures (DNS, timeout, connection refused) pass through untranslated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered HTTP 400: the geohash or resource does not exist,
    /// or the key was malformed. Carries the response body for diagnostics.
    #[error("requested item not found: {body}")]
    NotFound { body: String },

    /// Any other non-success status.
    #[error("request returned an error (HTTP {status}): {body}")]
    Request { status: StatusCode, body: String },

    /// The server answered 200 but the payload did not decode into the
    /// expected shape, e.g. a required nested object was missing.
    #[error("malformed response payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
