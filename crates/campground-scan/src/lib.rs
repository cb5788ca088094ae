//! # Campground Scan
//!
//! This crate looks up campsite availability for configured campgrounds and stays.
//! It works out which calendar months a stay touches, fetches each month from the
//! availability API, merges the months per campsite and reports the open nights.

/// Check-in/check-out ranges and the calendar months they span
mod date_range;
pub use date_range::*;

/// Configuration and error types
mod scan_types;
pub use scan_types::*;

/// Merging monthly availability into one result per stay
mod availability;
pub use availability::*;

/// Console report of open campsites
mod report;
pub use report::*;

/// Sequential runner over the configured campgrounds
mod executor;
pub use executor::*;

#[cfg(test)]
mod test_support;
