//! BookingDate value object.

use super::errors::{FieldError, FieldFormat};
use chrono::NaiveDate;
use std::fmt;

/// Wire format of booking dates, as produced by HTML date inputs.
pub const BOOKING_DATE_FORMAT: &str = "%Y-%m-%d";

/// A booking date that is known to be today or later.
///
/// Dates carry no time zone; "today" is supplied by the caller so the
/// comparison can be made against whatever calendar the form is shown in.
/// The text the user entered is kept alongside the parsed date and is what
/// `Display` writes back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingDate {
    date: NaiveDate,
    raw: String,
}

impl BookingDate {
    /// Parse a `YYYY-MM-DD` date and check that it is not before `today`.
    ///
    /// # Errors
    ///
    /// - `FieldError::Malformed(FieldFormat::Date)` if the value does not parse.
    /// - `FieldError::PastDate` if the date is strictly earlier than `today`.
    pub fn parse(value: &str, today: NaiveDate) -> Result<Self, FieldError> {
        let date = NaiveDate::parse_from_str(value.trim(), BOOKING_DATE_FORMAT)
            .map_err(|_| FieldError::Malformed(FieldFormat::Date))?;

        if date < today {
            return Err(FieldError::PastDate);
        }

        Ok(Self {
            date,
            raw: value.to_string(),
        })
    }

    /// The earliest date a booking may request, formatted for a date input's `min`.
    pub fn min_for(today: NaiveDate) -> String {
        today.format(BOOKING_DATE_FORMAT).to_string()
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
