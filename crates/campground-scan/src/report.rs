use std::fmt;

use chrono::NaiveDate;
use rec_gov::CampsiteRecord;
use rec_gov::constants::STATUS_AVAILABLE;
use serde::Serialize;
use tracing::warn;

use crate::availability::CampsiteAvailability;
use crate::date_range::DateRange;
use crate::scan_types::CampgroundConfig;

/// Status label reported by the availability API for one campsite night
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityStatus {
    /// Bookable
    Available,
    /// Booked by someone else
    Reserved,
    /// Closed
    NotAvailable,
    /// Not offered for online reservation
    NotReservable,
    /// First come, first served
    WalkUp,
    /// Any label not listed above
    Other(String),
}

impl AvailabilityStatus {
    /// Parse availability status from the API label
    pub fn parse(label: &str) -> Self {
        match label {
            STATUS_AVAILABLE => Self::Available,
            "Reserved" => Self::Reserved,
            "Not Available" => Self::NotAvailable,
            "Not Reservable" => Self::NotReservable,
            "Walk-up" => Self::WalkUp,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether the night can be booked
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// A campsite with at least one open night during a stay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenSite {
    /// Campsite id
    pub campsite_id: String,
    /// Site label, when the API provides one
    pub site_name: Option<String>,
    /// Open nights within the stay, ascending
    pub available_dates: Vec<NaiveDate>,
    /// Open on every night of the stay
    pub covers_stay: bool,
}

/// Open campsites of one campground for one stay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityReport {
    /// Name of the campground
    pub campground_name: String,
    /// Rec.gov facility id
    pub facility_id: u64,
    /// The stay that was checked
    pub date_range: DateRange,
    /// Campsites with open nights, ordered by campsite id
    pub open_sites: Vec<OpenSite>,
}

impl AvailabilityReport {
    /// Build the report for one stay from merged availability.
    ///
    /// The campground's campsite list, when configured, limits which sites
    /// are reported. Only nights of the stay are considered.
    pub fn build(
        campground: &CampgroundConfig,
        date_range: &DateRange,
        availability: &CampsiteAvailability,
    ) -> Self {
        let mut availability = availability.clone();
        if let Some(allowed) = &campground.campsites {
            availability.retain_campsites(allowed);
        }

        let open_sites = availability
            .iter()
            .filter_map(|(campsite_id, record)| {
                let available_dates = open_nights(record, date_range);
                if available_dates.is_empty() {
                    return None;
                }

                let covers_stay = date_range
                    .nights()
                    .all(|night| available_dates.binary_search(&night).is_ok());

                Some(OpenSite {
                    campsite_id: campsite_id.to_string(),
                    site_name: record.site_name().map(str::to_string),
                    available_dates,
                    covers_stay,
                })
            })
            .collect();

        Self {
            campground_name: campground.name.clone(),
            facility_id: campground.facility_id,
            date_range: *date_range,
            open_sites,
        }
    }

    /// Sites open on every night of the stay
    pub fn sites_covering_stay(&self) -> impl Iterator<Item = &OpenSite> {
        self.open_sites.iter().filter(|site| site.covers_stay)
    }
}

/// Nights of the stay on which the campsite is available
fn open_nights(record: &CampsiteRecord, date_range: &DateRange) -> Vec<NaiveDate> {
    let mut nights: Vec<NaiveDate> = record
        .availabilities
        .iter()
        .filter(|(_, status)| AvailabilityStatus::parse(status).is_available())
        .filter_map(|(date_str, _)| parse_date_key(date_str))
        .filter(|date| date_range.contains_night(*date))
        .collect();
    nights.sort_unstable();
    nights.dedup();
    nights
}

/// Parse the date part of a key such as `2020-11-04T00:00:00Z`
fn parse_date_key(date_str: &str) -> Option<NaiveDate> {
    let parsed = date_str
        .get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok());

    if parsed.is_none() {
        warn!("Failed to parse date: {}", date_str);
    }
    parsed
}

impl fmt::Display for AvailabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Availability Information ---")?;
        writeln!(
            f,
            "{} - Check in: {}  Check out: {}",
            self.campground_name, self.date_range.check_in, self.date_range.check_out
        )?;
        writeln!(f)?;
        writeln!(f, "--- Open Availability ---")?;

        if self.open_sites.is_empty() {
            return writeln!(f, "No open sites");
        }

        for site in &self.open_sites {
            match &site.site_name {
                Some(name) => writeln!(f, "Site:{} ({}) Available on:", site.campsite_id, name)?,
                None => writeln!(f, "Site:{} Available on:", site.campsite_id)?,
            }
            for date in &site.available_dates {
                writeln!(f, "{}", date)?;
            }
        }

        let covering: Vec<&str> = self
            .sites_covering_stay()
            .map(|site| site.campsite_id.as_str())
            .collect();
        if !covering.is_empty() {
            writeln!(f, "Open for the whole stay: {}", covering.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn campground(campsites: Option<Vec<u64>>) -> CampgroundConfig {
        CampgroundConfig {
            name: "Santa Cruz Scorpion".to_string(),
            facility_id: 232498,
            date_ranges: vec![DateRange::new(date(2020, 11, 4), date(2020, 11, 7))],
            campsites,
        }
    }

    fn availability() -> CampsiteAvailability {
        [
            (
                "4926".to_string(),
                record(&[
                    ("2020-11-03T00:00:00Z", "Available"),
                    ("2020-11-04T00:00:00Z", "Available"),
                    ("2020-11-05T00:00:00Z", "Available"),
                    ("2020-11-06T00:00:00Z", "Available"),
                    ("2020-11-07T00:00:00Z", "Available"),
                ]),
            ),
            (
                "4927".to_string(),
                record(&[
                    ("2020-11-04T00:00:00Z", "Available"),
                    ("2020-11-05T00:00:00Z", "Reserved"),
                ]),
            ),
            (
                "4928".to_string(),
                record(&[("2020-11-04T00:00:00Z", "Not Reservable")]),
            ),
            (
                "5000".to_string(),
                record(&[("2020-11-05T00:00:00Z", "Available")]),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_parse_availability_status() {
        assert!(AvailabilityStatus::parse("Available").is_available());
        assert_eq!(
            AvailabilityStatus::parse("Reserved"),
            AvailabilityStatus::Reserved
        );
        assert_eq!(
            AvailabilityStatus::parse("Not Available"),
            AvailabilityStatus::NotAvailable
        );
        assert_eq!(
            AvailabilityStatus::parse("Not Reservable"),
            AvailabilityStatus::NotReservable
        );
        assert_eq!(
            AvailabilityStatus::parse("Walk-up"),
            AvailabilityStatus::WalkUp
        );
        assert_eq!(
            AvailabilityStatus::parse("Open"),
            AvailabilityStatus::Other("Open".to_string())
        );
        assert!(!AvailabilityStatus::parse("available").is_available());
    }

    #[test]
    fn test_report_limits_dates_to_stay() {
        let range = DateRange::new(date(2020, 11, 4), date(2020, 11, 7));
        let report = AvailabilityReport::build(&campground(None), &range, &availability());

        let ids: Vec<_> = report
            .open_sites
            .iter()
            .map(|site| site.campsite_id.as_str())
            .collect();
        assert_eq!(ids, vec!["4926", "4927", "5000"]);

        let full = &report.open_sites[0];
        assert_eq!(
            full.available_dates,
            vec![date(2020, 11, 4), date(2020, 11, 5), date(2020, 11, 6)]
        );
        assert!(full.covers_stay);

        let partial = &report.open_sites[1];
        assert_eq!(partial.available_dates, vec![date(2020, 11, 4)]);
        assert!(!partial.covers_stay);

        assert_eq!(
            report
                .sites_covering_stay()
                .map(|site| site.campsite_id.as_str())
                .collect::<Vec<_>>(),
            vec!["4926"]
        );
    }

    #[test]
    fn test_report_applies_campsite_allow_list() {
        let range = DateRange::new(date(2020, 11, 4), date(2020, 11, 7));
        let report = AvailabilityReport::build(
            &campground(Some(vec![4926, 4927, 4928])),
            &range,
            &availability(),
        );

        assert!(
            report
                .open_sites
                .iter()
                .all(|site| site.campsite_id != "5000")
        );
        assert_eq!(report.open_sites.len(), 2);
    }

    #[test]
    fn test_unparseable_date_keys_are_skipped() {
        let availability: CampsiteAvailability = [(
            "100".to_string(),
            record(&[("garbage", "Available"), ("2020-11-04T00:00:00Z", "Available")]),
        )]
        .into_iter()
        .collect();
        let range = DateRange::new(date(2020, 11, 4), date(2020, 11, 5));

        let report = AvailabilityReport::build(&campground(None), &range, &availability);

        assert_eq!(report.open_sites[0].available_dates, vec![date(2020, 11, 4)]);
        assert!(report.open_sites[0].covers_stay);
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2020, 11, 4), date(2020, 11, 7));
        let report = AvailabilityReport::build(
            &campground(Some(vec![4927])),
            &range,
            &availability(),
        );

        assert_eq!(
            report.to_string(),
            "--- Availability Information ---\n\
             Santa Cruz Scorpion - Check in: 2020-11-04  Check out: 2020-11-07\n\
             \n\
             --- Open Availability ---\n\
             Site:4927 Available on:\n\
             2020-11-04\n"
        );
    }

    #[test]
    fn test_display_lists_sites_open_for_whole_stay() {
        let range = DateRange::new(date(2020, 11, 4), date(2020, 11, 6));
        let report = AvailabilityReport::build(
            &campground(Some(vec![4926, 4927])),
            &range,
            &availability(),
        );

        assert_eq!(
            report.to_string(),
            "--- Availability Information ---\n\
             Santa Cruz Scorpion - Check in: 2020-11-04  Check out: 2020-11-06\n\
             \n\
             --- Open Availability ---\n\
             Site:4926 Available on:\n\
             2020-11-04\n\
             2020-11-05\n\
             Site:4927 Available on:\n\
             2020-11-04\n\
             Open for the whole stay: 4926\n"
        );
    }

    #[test]
    fn test_display_without_open_sites() {
        let range = DateRange::new(date(2020, 11, 4), date(2020, 11, 7));
        let report = AvailabilityReport::build(
            &campground(Some(vec![4928])),
            &range,
            &availability(),
        );

        assert!(report.open_sites.is_empty());
        assert!(report.to_string().ends_with("--- Open Availability ---\nNo open sites\n"));
    }
}
