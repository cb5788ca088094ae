use rec_gov::RecGovError;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::date_range::DateRange;

/// Campgrounds to check, loaded once at start and never mutated
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScanConfig {
    /// Campgrounds in the order they are checked
    #[validate(length(min = 1, message = "At least one campground is required"), nested)]
    pub campgrounds: Vec<CampgroundConfig>,
}

/// One campground and the stays to look up for it
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CampgroundConfig {
    /// Name of the campground for display purposes
    #[validate(length(min = 1, message = "Campground name is required"))]
    pub name: String,

    /// Rec.gov facility id of the campground
    #[validate(range(min = 1, message = "Facility ID must be positive"))]
    pub facility_id: u64,

    /// Stays to check, in order
    #[validate(length(min = 1, message = "At least one date range is required"), nested)]
    pub date_ranges: Vec<DateRange>,

    /// Campsite ids to report on; every campsite when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campsites: Option<Vec<u64>>,
}

impl ScanConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(raw: &str) -> Result<Self, ScanError> {
        let config: ScanConfig = serde_json::from_str(raw)
            .map_err(|e| ScanError::ConfigError(format!("Invalid configuration: {}", e)))?;

        config
            .validate()
            .map_err(|e| ScanError::Validation(e.to_string()))?;

        Ok(config)
    }
}

/// Custom error type for scan operations
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Failure talking to the availability API
    #[error("API error: {0}")]
    Api(#[from] RecGovError),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
