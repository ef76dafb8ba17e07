use thiserror::Error;

/// Failure of a remote store call
///
/// Callers do not distinguish transient from permanent failures; every
/// variant means "operation failed".
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("row has no identifier")]
    MissingId,
}
