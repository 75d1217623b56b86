//! The reported day as a half-open UTC interval.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use std::fmt;

use crate::errors::CoreError;

/// Textual format of a requested date (`15-03-2024`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Format used in search qualifiers (`created:2024-03-15`).
const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// The interval `[start, start + 24h)` covering one UTC calendar day.
///
/// Fields are private so `end == start + 24h` holds for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateWindow {
    /// Parse a `DD-MM-YYYY` date into the window covering that UTC day.
    ///
    /// The shape is checked before calendar validation: two-digit day and
    /// month, four-digit year, `-` separators. Unpadded components such as
    /// `5-3-2024` are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDateFormat`] if the input does not have the
    /// expected shape or names a date that does not exist (`31-02-2024`).
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let bytes = input.as_bytes();
        if bytes.len() != 10 {
            return Err(CoreError::invalid_date(input, "expected 10 characters"));
        }
        if bytes[2] != b'-' || bytes[5] != b'-' {
            return Err(CoreError::invalid_date(input, "expected '-' separators"));
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != 2 && *idx != 5)
            .all(|(_, b)| b.is_ascii_digit());
        if !digits_ok {
            return Err(CoreError::invalid_date(input, "non-numeric component"));
        }

        let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map_err(|e| CoreError::invalid_date(input, e.to_string()))?;
        Ok(Self::for_date(date))
    }

    /// Window covering `date` in UTC.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        Self {
            start,
            end: start + TimeDelta::days(1),
        }
    }

    /// Midnight UTC of the requested day (inclusive).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Midnight UTC of the following day (exclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// The date as used in search qualifiers, e.g. `2024-03-15`.
    #[must_use]
    pub fn query_date(&self) -> String {
        self.start.format(QUERY_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.end.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        )
    }
}
