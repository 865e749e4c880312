use thiserror::Error;

/// Errors raised while fetching the Teskerti event feed.
///
/// [`crate::TeskertiClient::get_teskerti_events`] folds every variant into a
/// failure envelope; only [`crate::TeskertiClient::fetch_envelope`] surfaces
/// them directly.
#[derive(Debug, Error)]
pub enum TeskertiError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body was not JSON, or not shaped like an envelope.
    #[error("invalid response body from {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but violates the envelope's success/events contract.
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(String),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The caller's cancellation future resolved before the response did.
    #[error("request cancelled")]
    Cancelled,
}
