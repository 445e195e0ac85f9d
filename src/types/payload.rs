//! Payload Types
//!
//! Decoded token structure.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Segment delimiter inside a decoded token.
pub const SEGMENT_DELIMITER: u8 = b'-';

/// Decoded token split into its signature and date segments.
///
/// Segments are byte strings; lengths are byte counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    /// First segment. Always present, possibly empty.
    pub signature_part: Vec<u8>,
    /// Second segment. Absent when the payload has no delimiter.
    pub date_part: Option<Vec<u8>>,
}

impl DecodedPayload {
    /// Split decoded bytes on the delimiter. Segments past the second are ignored.
    pub fn split(decoded: &[u8]) -> Self {
        let mut parts = decoded.split(|&b| b == SEGMENT_DELIMITER);
        let signature_part = parts.next().unwrap_or_default().to_vec();
        let date_part = parts.next().map(<[u8]>::to_vec);

        Self {
            signature_part,
            date_part,
        }
    }

    /// Date segment, treating an empty segment as missing.
    pub fn non_empty_date_part(&self) -> Option<&[u8]> {
        self.date_part.as_deref().filter(|part| !part.is_empty())
    }
}

/// Largest distance from the Unix epoch, in days, a constructed date may have.
///
/// Matches the +/-8.64e15 ms limit of an ECMAScript time value, roughly years
/// -271821 to 275760.
pub const MAX_EPOCH_DAYS: i64 = 100_000_000;

/// Numeric components read from an 8-character `YYYYMMDD` date segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedDate {
    /// Year as written. Two-digit years are mapped when converting.
    pub year: i64,
    /// Zero-based month. May overflow in either direction.
    pub month_index: i64,
    /// Day of month. May overflow in either direction.
    pub day: i64,
}

impl EmbeddedDate {
    /// Resolve to a calendar date, normalizing month and day overflow.
    ///
    /// Years `0..=99` land in the 1900s. Returns `None` when the result lies more
    /// than [`MAX_EPOCH_DAYS`] from 1970-01-01.
    pub fn to_calendar_date(&self) -> Option<CalendarDate> {
        let year = if (0..=99).contains(&self.year) {
            1900 + self.year
        } else {
            self.year
        };

        let year = year.checked_add(self.month_index.div_euclid(12))?;
        let month = self.month_index.rem_euclid(12) + 1;

        let first_of_month = days_from_civil(year, month, 1)?;
        let days = first_of_month.checked_add(self.day.checked_sub(1)?)?;
        if days.abs() > MAX_EPOCH_DAYS {
            return None;
        }

        Some(CalendarDate::from_epoch_days(days))
    }
}

/// Proleptic Gregorian date whose year range exceeds chrono's.
///
/// Field order gives chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    /// Year, possibly negative.
    pub year: i64,
    /// Month, `1..=12`.
    pub month: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
}

impl CalendarDate {
    /// Create a date. Returns `None` for an impossible month or day.
    pub fn new(year: i64, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 {
            return None;
        }

        let start = days_from_civil(year, i64::from(month), 1)?;
        let next = if month == 12 {
            days_from_civil(year.checked_add(1)?, 1, 1)?
        } else {
            days_from_civil(year, i64::from(month) + 1, 1)?
        };

        (i64::from(day) <= next - start).then_some(Self { year, month, day })
    }

    /// Date `days` after 1970-01-01. `days` must lie within [`MAX_EPOCH_DAYS`].
    pub fn from_epoch_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        // month and day are bounded by the arithmetic above
        Self {
            year,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Convert to a chrono date when the year fits chrono's range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::try_from(self.year).ok()?, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: i64::from(date.year()),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        } else {
            write!(f, "{:+05}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

/// Days from 1970-01-01 to the given date. `month` is 1-based.
fn days_from_civil(year: i64, month: i64, day: i64) -> Option<i64> {
    let year = if month <= 2 { year.checked_sub(1)? } else { year };
    let era = year.div_euclid(400);
    let yoe = year.rem_euclid(400);
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era.checked_mul(146_097)?.checked_add(doe - 719_468)
}
