use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use rec_gov::constants::STATUS_AVAILABLE;
use rec_gov::{AvailabilitySource, CampsiteRecord, MonthlyAvailability};
use serde::Serialize;
use tracing::{debug, info};

use crate::date_range::DateRange;
use crate::scan_types::ScanError;

/// Availability of every campsite of one campground, merged across the months of a date range
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CampsiteAvailability {
    campsites: BTreeMap<String, CampsiteRecord>,
}

impl CampsiteAvailability {
    /// Record for a campsite id
    pub fn get(&self, campsite_id: &str) -> Option<&CampsiteRecord> {
        self.campsites.get(campsite_id)
    }

    /// Number of campsites
    pub fn len(&self) -> usize {
        self.campsites.len()
    }

    /// Whether no campsite was returned
    pub fn is_empty(&self) -> bool {
        self.campsites.is_empty()
    }

    /// Campsites ordered by id
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CampsiteRecord)> {
        self.campsites
            .iter()
            .map(|(id, record)| (id.as_str(), record))
    }

    /// Fold one month of availability into the result.
    ///
    /// A campsite seen for the first time is stored as-is. For a campsite
    /// already present only `availabilities` is extended; entries for a date
    /// already known are overwritten by the newer month.
    pub fn merge_month(&mut self, monthly: MonthlyAvailability) {
        for (campsite_id, record) in monthly {
            match self.campsites.entry(campsite_id) {
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
                Entry::Occupied(mut entry) => {
                    entry
                        .get_mut()
                        .availabilities
                        .extend(record.availabilities);
                }
            }
        }
    }

    /// `(campsite id, date key)` pairs whose status is `Available`, over every fetched day
    pub fn available_dates(&self) -> Vec<(&str, &str)> {
        self.iter()
            .flat_map(|(campsite_id, record)| {
                record
                    .availabilities
                    .iter()
                    .filter(|(_, status)| status.as_str() == STATUS_AVAILABLE)
                    .map(move |(date, _)| (campsite_id, date.as_str()))
            })
            .collect()
    }

    /// Drop every campsite whose id is not in `allowed`
    pub fn retain_campsites(&mut self, allowed: &[u64]) {
        self.campsites.retain(|campsite_id, _| {
            campsite_id
                .parse::<u64>()
                .map(|id| allowed.contains(&id))
                .unwrap_or(false)
        });
    }
}

impl FromIterator<(String, CampsiteRecord)> for CampsiteAvailability {
    fn from_iter<I: IntoIterator<Item = (String, CampsiteRecord)>>(iter: I) -> Self {
        Self {
            campsites: iter.into_iter().collect(),
        }
    }
}

/// Get availability for a campground over every month touched by `date_range`.
///
/// Months are requested one after another in chronological order. The result
/// covers whole months; it is not narrowed to the nights of the stay. Any
/// failed month fails the whole call.
pub async fn get_campground_availability<S>(
    source: &S,
    facility_id: u64,
    date_range: &DateRange,
) -> Result<CampsiteAvailability, ScanError>
where
    S: AvailabilitySource + ?Sized,
{
    let months = date_range.year_month_pairs();
    info!(
        "Fetching availability for facility {} ({}), {} month(s)",
        facility_id,
        date_range,
        months.len()
    );

    let mut merged = CampsiteAvailability::default();
    for month in months {
        let monthly = source
            .fetch_month(facility_id, month.year, month.month)
            .await?;
        debug!(
            "Merging {} campsites for facility {} in {}",
            monthly.len(),
            facility_id,
            month
        );
        merged.merge_month(monthly);
    }

    Ok(merged)
}
