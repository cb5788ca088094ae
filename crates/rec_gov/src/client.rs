use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::{Client, ClientBuilder};

use crate::constants::*;
use crate::types::{MonthlyAvailability, RecGovError, RecGovMonthlyResponse};

/// Source of monthly campsite availability.
///
/// Implemented by [`RecGovClient`] for the live API; anything else that can
/// produce a month of availability (fixtures, recordings) can stand in for it.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Fetch availability for every campsite of `facility_id` during one calendar month.
    async fn fetch_month(
        &self,
        facility_id: u64,
        year: i32,
        month: u32,
    ) -> Result<MonthlyAvailability, RecGovError>;
}

/// Client for the recreation.gov monthly availability endpoint
pub struct RecGovClient {
    client: Client,
    base_url: String,
}

impl RecGovClient {
    /// Create a new client pointed at recreation.gov
    pub fn new() -> Result<Self, RecGovError> {
        Self::with_base_url(INTERNAL_BASE_URL)
    }

    /// Create a client against another host serving the same API
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, RecGovError> {
        Self::from_builder(http_client_builder(), base_url)
    }

    fn from_builder(
        builder: ClientBuilder,
        base_url: impl Into<String>,
    ) -> Result<Self, RecGovError> {
        let client = builder
            .build()
            .map_err(|e| RecGovError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the monthly availability endpoint for a facility
    pub fn monthly_url(&self, facility_id: u64) -> String {
        format!(
            "{}{}",
            self.base_url,
            MONTHLY_AVAILABILITY_PATH.replace("{facility_id}", &facility_id.to_string())
        )
    }
}

fn http_client_builder() -> ClientBuilder {
    Client::builder()
        .user_agent(AVAILABILITY_USER_AGENT)
        .timeout(Duration::from_secs(30))
}

/// Value of the `start_date` query parameter for a month.
///
/// The API returns a whole month at a time and expects the first day of it.
pub fn month_start_param(year: i32, month: u32) -> Result<String, RecGovError> {
    let month_start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| RecGovError::InvalidDate(format!("{}-{:02}", year, month)))?;

    Ok(month_start.format(START_DATE_FORMAT).to_string())
}

#[async_trait]
impl AvailabilitySource for RecGovClient {
    async fn fetch_month(
        &self,
        facility_id: u64,
        year: i32,
        month: u32,
    ) -> Result<MonthlyAvailability, RecGovError> {
        let url = self.monthly_url(facility_id);
        let start_date = month_start_param(year, month)?;

        debug!("Making request to: {}?start_date={}", url, start_date);

        let response = self
            .client
            .get(&url)
            .query(&[("start_date", start_date.as_str())])
            .send()
            .await
            .map_err(|e| RecGovError::Network(format!("HTTP request failed: {}", e)))?;

        debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            warn!("API request failed with status {}: {}", status, body);

            return Err(RecGovError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let monthly: RecGovMonthlyResponse = response
            .json()
            .await
            .map_err(|e| RecGovError::Parse(e.to_string()))?;

        debug!(
            "Facility {} has {} campsites for {}-{:02}",
            facility_id,
            monthly.campsites.len(),
            year,
            month
        );

        Ok(monthly.campsites)
    }
}
