//! Configuration Types
//!
//! Verifier configuration types.

use chrono::NaiveDate;
use std::ops::RangeInclusive;

use crate::error::{ConfigurationError, LicenseError, LicenseResult};

/// Release date used when the build does not set `LICENSE_RELEASE_DATE`.
pub const DEFAULT_RELEASE_DATE: &str = "2023-10-25";

/// Release date baked in at compile time, if any.
pub const BUILD_RELEASE_DATE: Option<&str> = option_env!("LICENSE_RELEASE_DATE");

/// Accepted length of the signature segment, in bytes.
pub const DEFAULT_SIGNATURE_LENGTH: RangeInclusive<usize> = 40..=255;

/// Accepted length of a legacy-format key, in bytes.
pub const DEFAULT_LEGACY_LENGTH: RangeInclusive<usize> = 40..=255;

/// Release date format.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// License verifier configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Earliest embedded date a dated key may carry.
    pub release_date: NaiveDate,
    /// Accepted signature segment length.
    pub signature_length: RangeInclusive<usize>,
    /// Accepted legacy key length.
    pub legacy_length: RangeInclusive<usize>,
}

impl VerifierConfig {
    /// Create configuration with the given release date and default bounds.
    pub fn new(release_date: NaiveDate) -> Self {
        Self {
            release_date,
            signature_length: DEFAULT_SIGNATURE_LENGTH,
            legacy_length: DEFAULT_LEGACY_LENGTH,
        }
    }

    /// Create configuration from the release date fixed at build time.
    ///
    /// Reads `LICENSE_RELEASE_DATE` as seen by the compiler, falling back to
    /// [`DEFAULT_RELEASE_DATE`].
    pub fn from_build_env() -> LicenseResult<Self> {
        let value = BUILD_RELEASE_DATE.unwrap_or(DEFAULT_RELEASE_DATE);
        Ok(Self::new(parse_release_date(value)?))
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::new(default_release_date())
    }
}

/// Parse a `YYYY-MM-DD` release date.
pub fn parse_release_date(value: &str) -> LicenseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), RELEASE_DATE_FORMAT).map_err(|_| {
        LicenseError::Configuration(ConfigurationError::InvalidReleaseDate {
            value: value.to_string(),
        })
    })
}

/// Parsed [`DEFAULT_RELEASE_DATE`].
pub fn default_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 25).unwrap_or_default()
}
