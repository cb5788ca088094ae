use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Availability payload for one campground and one month, keyed by campsite id.
pub type MonthlyAvailability = HashMap<String, CampsiteRecord>;

/// Errors returned by the availability API client.
#[derive(Debug, thiserror::Error)]
pub enum RecGovError {
    /// The HTTP client could not be constructed.
    #[error("Client error: {0}")]
    Client(String),

    /// The request never produced a response (connection failure, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("HTTP {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// The response body was not the expected JSON document.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The requested year and month do not name a calendar month.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Top-level body of the monthly availability response.
#[derive(Debug, Deserialize)]
pub struct RecGovMonthlyResponse {
    /// Campsite id to campsite record.
    pub campsites: MonthlyAvailability,
}

/// One campsite as returned by the availability API.
///
/// Only `availabilities` is interpreted. Every other field the API sends
/// (`site`, `loop`, `campsite_type`, `quantities`, ...) is kept in `extra`
/// and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CampsiteRecord {
    /// ISO-8601 date string (e.g. `2020-11-04T00:00:00Z`) to status label.
    pub availabilities: BTreeMap<String, String>,

    /// Remaining fields, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CampsiteRecord {
    /// Site label shown on Rec.gov, e.g. `"012"`.
    pub fn site_name(&self) -> Option<&str> {
        self.extra.get("site").and_then(Value::as_str)
    }

    /// Loop the site belongs to.
    pub fn loop_name(&self) -> Option<&str> {
        self.extra.get("loop").and_then(Value::as_str)
    }
}
