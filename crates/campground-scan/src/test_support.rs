use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use rec_gov::{AvailabilitySource, CampsiteRecord, MonthlyAvailability, RecGovError};

/// In-memory availability source that records every month it is asked for.
#[derive(Default)]
pub struct MockSource {
    months: HashMap<(u64, i32, u32), MonthlyAvailability>,
    failing: HashSet<(i32, u32)>,
    calls: Mutex<Vec<(u64, i32, u32)>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_month(
        mut self,
        facility_id: u64,
        year: i32,
        month: u32,
        campsites: &[(&str, CampsiteRecord)],
    ) -> Self {
        let payload = campsites
            .iter()
            .map(|(id, record)| (id.to_string(), record.clone()))
            .collect();
        self.months.insert((facility_id, year, month), payload);
        self
    }

    /// Every request for this month answers with an upstream error.
    pub fn failing_month(mut self, year: i32, month: u32) -> Self {
        self.failing.insert((year, month));
        self
    }

    pub fn calls(&self) -> Vec<(u64, i32, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AvailabilitySource for MockSource {
    async fn fetch_month(
        &self,
        facility_id: u64,
        year: i32,
        month: u32,
    ) -> Result<MonthlyAvailability, RecGovError> {
        self.calls.lock().unwrap().push((facility_id, year, month));

        if self.failing.contains(&(year, month)) {
            return Err(RecGovError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            });
        }

        self.months
            .get(&(facility_id, year, month))
            .cloned()
            .ok_or_else(|| RecGovError::Status {
                status: 404,
                body: format!("no fixture for {} {}-{:02}", facility_id, year, month),
            })
    }
}

/// Campsite record with the given `(date key, status)` availabilities.
pub fn record(availabilities: &[(&str, &str)]) -> CampsiteRecord {
    CampsiteRecord {
        availabilities: availabilities
            .iter()
            .map(|(date, status)| (date.to_string(), status.to_string()))
            .collect(),
        ..Default::default()
    }
}
