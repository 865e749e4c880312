//! HTTP client for the app's Teskerti aggregation route.
//!
//! Wraps `reqwest` with cache-bypassing headers, a hard request deadline, and
//! envelope shape checks. [`TeskertiClient::get_teskerti_events`] never fails:
//! every error is logged and folded into a `success: false` envelope so callers
//! only ever branch on `success`.

use std::future::Future;
use std::time::Duration;

use kolyoum_core::AppConfig;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::TeskertiError;
use crate::types::TeskertiApiResponse;

/// Route of the aggregation endpoint, relative to the app origin.
pub const EVENTS_PATH: &str = "api/teskerti-auto";

/// Client for `GET /api/teskerti-auto`.
///
/// Use [`TeskertiClient::new`] with the loaded [`AppConfig`], or
/// [`TeskertiClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct TeskertiClient {
    client: Client,
    endpoint: Url,
}

impl TeskertiClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TeskertiError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`TeskertiError::InvalidBaseUrl`] if `api_base_url` is unusable.
    pub fn new(config: &AppConfig) -> Result<Self, TeskertiError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an explicit app origin.
    ///
    /// `timeout_secs` bounds the whole request, so a hung origin surfaces as a
    /// failure envelope rather than blocking forever.
    ///
    /// # Errors
    ///
    /// Returns [`TeskertiError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`TeskertiError::InvalidBaseUrl`] if `base_url` is not an http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, TeskertiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: events_endpoint(base_url)?,
        })
    }

    /// The fully resolved feed URL.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the event feed, normalizing every failure into the envelope.
    ///
    /// A 2xx envelope is returned as received. Transport errors, non-2xx
    /// statuses, unparseable bodies and malformed envelopes all produce
    /// [`TeskertiApiResponse::failure`] with the error's message.
    pub async fn get_teskerti_events(&self) -> TeskertiApiResponse {
        self.get_teskerti_events_until(std::future::pending::<()>()).await
    }

    /// Like [`get_teskerti_events`](Self::get_teskerti_events), but gives up
    /// as soon as `cancel` resolves.
    ///
    /// The in-flight request is dropped and the returned envelope carries
    /// `"request cancelled"`.
    pub async fn get_teskerti_events_until<C>(&self, cancel: C) -> TeskertiApiResponse
    where
        C: Future<Output = ()>,
    {
        let result = tokio::select! {
            result = self.fetch_envelope() => result,
            () = cancel => Err(TeskertiError::Cancelled),
        };

        match result {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!(url = %self.endpoint, error = %e, "error fetching Teskerti events");
                TeskertiApiResponse::failure(e.to_string())
            }
        }
    }

    /// Fetches and validates the envelope, surfacing failures as typed errors.
    ///
    /// # Errors
    ///
    /// - [`TeskertiError::Http`] on network failure or timeout.
    /// - [`TeskertiError::UnexpectedStatus`] on any non-2xx status; the body is
    ///   not read.
    /// - [`TeskertiError::Deserialize`] if the body is not a JSON envelope.
    /// - [`TeskertiError::InvalidEnvelope`] if `success` is missing, or
    ///   `success: true` arrives without an `events` array.
    pub async fn fetch_envelope(&self) -> Result<TeskertiApiResponse, TeskertiError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TeskertiError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope = parse_envelope(&body, self.endpoint.as_str())?;
        tracing::debug!(
            success = envelope.success,
            events = envelope.events.len(),
            from_cache = ?envelope.from_cache,
            "fetched Teskerti events"
        );
        Ok(envelope)
    }
}

/// Resolves [`EVENTS_PATH`] against `base_url`, keeping any path prefix.
fn events_endpoint(base_url: &str) -> Result<Url, TeskertiError> {
    let invalid = |reason: String| TeskertiError::InvalidBaseUrl {
        base_url: base_url.to_string(),
        reason,
    };

    // Exactly one trailing slash, so join appends instead of replacing the
    // last path segment.
    let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", base.scheme())));
    }
    base.join(EVENTS_PATH).map_err(|e| invalid(e.to_string()))
}

/// Parses a 2xx body and checks it against the envelope contract.
fn parse_envelope(body: &str, context: &str) -> Result<TeskertiApiResponse, TeskertiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| TeskertiError::Deserialize {
        context: context.to_string(),
        source: e,
    })?;
    check_envelope_shape(&value)?;
    serde_json::from_value(value).map_err(|e| TeskertiError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

fn check_envelope_shape(body: &Value) -> Result<(), TeskertiError> {
    let Some(object) = body.as_object() else {
        return Err(TeskertiError::InvalidEnvelope(
            "expected a JSON object".to_string(),
        ));
    };

    match object.get("success") {
        Some(Value::Bool(true)) => {
            if object.get("events").is_some_and(Value::is_array) {
                Ok(())
            } else {
                Err(TeskertiError::InvalidEnvelope(
                    "success response without an events array".to_string(),
                ))
            }
        }
        Some(Value::Bool(false)) => Ok(()),
        _ => Err(TeskertiError::InvalidEnvelope(
            "missing boolean \"success\" field".to_string(),
        )),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
