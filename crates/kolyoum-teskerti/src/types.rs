//! Teskerti feed wire types.
//!
//! The aggregation endpoint answers with a camelCase JSON envelope:
//! `{"success": true, "events": [...], "lastSync": 1718409600000, "fromCache": true}`.
//! The same shape is used for failures, with `success: false`, no events and
//! an `error` message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single event from the Teskerti ticketing aggregator.
///
/// All display strings are passed through as received; `date` in particular
/// is not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeskertiEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub category: String,
    /// Pre-formatted price label, e.g. `"150 TND"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub url: String,
}

/// Uniform success/failure envelope returned by the event feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeskertiApiResponse {
    pub success: bool,
    #[serde(default)]
    pub events: Vec<TeskertiEvent>,
    /// Epoch milliseconds of the aggregator's last cache refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TeskertiApiResponse {
    /// Builds the normalized failure envelope.
    ///
    /// An empty message becomes `"Unknown error"`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let error = if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        };
        Self {
            success: false,
            events: Vec::new(),
            last_sync: None,
            from_cache: None,
            error: Some(error),
        }
    }

    /// `lastSync` as a UTC timestamp, if present and representable.
    #[must_use]
    pub fn last_sync_at(&self) -> Option<DateTime<Utc>> {
        self.last_sync.and_then(DateTime::from_timestamp_millis)
    }

    /// Events whose category matches `category`, ignoring ASCII case.
    pub fn events_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a TeskertiEvent> + 'a {
        self.events
            .iter()
            .filter(move |event| event.category.eq_ignore_ascii_case(category))
    }
}
