//! Configuration Builder
//!
//! Fluent builder for verifier configuration.

use chrono::NaiveDate;
use std::ops::RangeInclusive;

use crate::error::{ConfigurationError, LicenseError, LicenseResult};
use crate::types::{
    default_release_date, parse_release_date, VerifierConfig, DEFAULT_LEGACY_LENGTH,
    DEFAULT_SIGNATURE_LENGTH,
};

/// Verifier configuration builder.
#[derive(Debug, Default)]
pub struct VerifierConfigBuilder {
    release_date: Option<NaiveDate>,
    release_date_str: Option<String>,
    signature_length: Option<RangeInclusive<usize>>,
    legacy_length: Option<RangeInclusive<usize>>,
}

impl VerifierConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set release date.
    pub fn release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self.release_date_str = None;
        self
    }

    /// Set release date from a `YYYY-MM-DD` string. Parsed on `build()`.
    pub fn release_date_str(mut self, date: impl Into<String>) -> Self {
        self.release_date_str = Some(date.into());
        self.release_date = None;
        self
    }

    /// Set accepted signature segment length.
    pub fn signature_length(mut self, bounds: RangeInclusive<usize>) -> Self {
        self.signature_length = Some(bounds);
        self
    }

    /// Set accepted legacy key length.
    pub fn legacy_length(mut self, bounds: RangeInclusive<usize>) -> Self {
        self.legacy_length = Some(bounds);
        self
    }

    /// Start from an existing configuration.
    pub fn with_config(mut self, config: VerifierConfig) -> Self {
        self.release_date = Some(config.release_date);
        self.release_date_str = None;
        self.signature_length = Some(config.signature_length);
        self.legacy_length = Some(config.legacy_length);
        self
    }

    /// Build the verifier configuration.
    pub fn build(self) -> LicenseResult<VerifierConfig> {
        let release_date = match (self.release_date, self.release_date_str) {
            (Some(date), _) => date,
            (None, Some(value)) => parse_release_date(&value)?,
            (None, None) => default_release_date(),
        };

        let signature_length = self.signature_length.unwrap_or(DEFAULT_SIGNATURE_LENGTH);
        validate_bounds("signature_length", &signature_length)?;

        let legacy_length = self.legacy_length.unwrap_or(DEFAULT_LEGACY_LENGTH);
        validate_bounds("legacy_length", &legacy_length)?;

        Ok(VerifierConfig {
            release_date,
            signature_length,
            legacy_length,
        })
    }
}

fn validate_bounds(field: &'static str, bounds: &RangeInclusive<usize>) -> LicenseResult<()> {
    if bounds.is_empty() {
        return Err(LicenseError::Configuration(
            ConfigurationError::InvalidLengthBounds {
                field,
                min: *bounds.start(),
                max: *bounds.end(),
            },
        ));
    }
    Ok(())
}

/// Create a new verifier configuration builder.
pub fn verifier_config() -> VerifierConfigBuilder {
    VerifierConfigBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = verifier_config().build().unwrap();
        assert_eq!(config, VerifierConfig::default());
    }

    #[test]
    fn test_builder_release_date_str() {
        let config = verifier_config()
            .release_date_str("2020-01-01")
            .build()
            .unwrap();
        assert_eq!(
            config.release_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_builder_last_release_date_wins() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let config = verifier_config()
            .release_date_str("not-a-date")
            .release_date(date)
            .build()
            .unwrap();
        assert_eq!(config.release_date, date);
    }

    #[test]
    fn test_builder_invalid_release_date() {
        let result = verifier_config().release_date_str("2020-13-01").build();
        assert!(matches!(
            result,
            Err(LicenseError::Configuration(
                ConfigurationError::InvalidReleaseDate { .. }
            ))
        ));
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_builder_empty_bounds() {
        let result = verifier_config().signature_length(50..=10).build();
        match result {
            Err(LicenseError::Configuration(ConfigurationError::InvalidLengthBounds {
                field,
                min,
                max,
            })) => {
                assert_eq!(field, "signature_length");
                assert_eq!((min, max), (50, 10));
            }
            other => panic!("expected InvalidLengthBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_with_config() {
        let base = VerifierConfig::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let config = verifier_config()
            .with_config(base.clone())
            .legacy_length(10..=20)
            .build()
            .unwrap();
        assert_eq!(config.release_date, base.release_date);
        assert_eq!(config.legacy_length, 10..=20);
        assert_eq!(config.signature_length, base.signature_length);
    }
}
