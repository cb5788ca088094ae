use rec_gov::AvailabilitySource;
use tracing::info;

use crate::availability::get_campground_availability;
use crate::report::AvailabilityReport;
use crate::scan_types::{ScanConfig, ScanError};

/// Checks every configured campground and stay, one request at a time
pub struct ScanExecutor<S> {
    source: S,
    config: ScanConfig,
}

impl<S: AvailabilitySource> ScanExecutor<S> {
    /// Create an executor over an availability source and a validated configuration
    pub fn new(source: S, config: ScanConfig) -> Self {
        Self { source, config }
    }

    /// Configuration the executor runs
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Check every campground in configuration order.
    ///
    /// Stops at the first failure; no partial set of reports is returned.
    pub async fn run(&self) -> Result<Vec<AvailabilityReport>, ScanError> {
        info!(
            "Checking availability for {} campground(s)",
            self.config.campgrounds.len()
        );

        let mut reports = Vec::new();
        for campground in &self.config.campgrounds {
            for date_range in &campground.date_ranges {
                info!(
                    "Checking {} (facility {}) for {}",
                    campground.name, campground.facility_id, date_range
                );

                let availability =
                    get_campground_availability(&self.source, campground.facility_id, date_range)
                        .await?;

                reports.push(AvailabilityReport::build(
                    campground,
                    date_range,
                    &availability,
                ));
            }
        }

        Ok(reports)
    }
}
