use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year
    pub year: i32,
    /// Month of the year, 1 through 12
    pub month: u32,
}

impl YearMonth {
    /// Month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Check-in/check-out pair for a camping reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_stay_order"))]
pub struct DateRange {
    /// First night of the stay
    pub check_in: NaiveDate,
    /// Departure day; not a night of the stay
    pub check_out: NaiveDate,
}

impl DateRange {
    /// Create a date range
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Number of nights between check-in and check-out
    pub fn total_nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Every calendar month touched by the range, ascending and without duplicates.
    ///
    /// Months strictly between the endpoints are included, so a stay from
    /// late January to early March also yields February. Reversed endpoints
    /// cover the same months as the ordered pair.
    pub fn year_month_pairs(&self) -> Vec<YearMonth> {
        let (first, last) = if self.check_in <= self.check_out {
            (self.check_in, self.check_out)
        } else {
            (self.check_out, self.check_in)
        };
        let last = YearMonth::of(last);

        let mut months = Vec::new();
        let mut cursor = first.with_day(1);
        while let Some(day) = cursor {
            let current = YearMonth::of(day);
            if current > last {
                break;
            }
            months.push(current);
            cursor = day.checked_add_months(Months::new(1));
        }

        months
    }

    /// Nights of the stay, check-in inclusive, check-out exclusive
    pub fn nights(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let check_out = self.check_out;
        self.check_in
            .iter_days()
            .take_while(move |night| *night < check_out)
    }

    /// Whether `date` is one of the nights of the stay
    pub fn contains_night(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.check_in, self.check_out)
    }
}

fn validate_stay_order(range: &DateRange) -> Result<(), ValidationError> {
    if range.check_out < range.check_in {
        let mut error = ValidationError::new("invalid_date_range");
        error.message = Some("check-out date must not be before check-in date".into());
        return Err(error);
    }
    Ok(())
}
