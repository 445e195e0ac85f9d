//! License Error Types
//!
//! Configuration errors surface to callers. Rejection reasons never do: they are
//! folded into `VerifiedKeyStatus::Invalid` and only exposed through diagnostics.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::CalendarDate;

/// Root error type for license verification.
#[derive(Error, Debug)]
pub enum LicenseError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl LicenseError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "LICENSE_CONFIG",
        }
    }
}

/// Configuration error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid release date: {value} (expected YYYY-MM-DD)")]
    InvalidReleaseDate { value: String },

    #[error("Invalid length bounds for {field}: {min}..={max}")]
    InvalidLengthBounds {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

/// Why a token was classified as invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Token is empty or absent")]
    EmptyToken,

    #[error("Token is not valid base64")]
    MalformedToken,

    #[error("Token does not satisfy the legacy format")]
    LegacyFormat,

    #[error("Signature segment length {length} out of bounds")]
    SignatureLength { length: usize },

    #[error("Signature segment is not valid base64")]
    MalformedSignature,

    #[error("Date segment is not valid base64")]
    MalformedDate,

    #[error("Decoded date segment has length {length}, expected 8")]
    DateLength { length: usize },

    #[error("Decoded date segment is not a calendar date")]
    UnparseableDate,

    #[error("Embedded date {date} precedes release date {release_date}")]
    BeforeRelease {
        date: CalendarDate,
        release_date: NaiveDate,
    },
}

impl RejectionReason {
    /// Stable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyToken => "EMPTY_TOKEN",
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::LegacyFormat => "LEGACY_FORMAT",
            Self::SignatureLength { .. } => "SIGNATURE_LENGTH",
            Self::MalformedSignature => "MALFORMED_SIGNATURE",
            Self::MalformedDate => "MALFORMED_DATE",
            Self::DateLength { .. } => "DATE_LENGTH",
            Self::UnparseableDate => "UNPARSEABLE_DATE",
            Self::BeforeRelease { .. } => "BEFORE_RELEASE",
        }
    }

    /// Whether the rejection came from the legacy fallback rather than the dated format.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::LegacyFormat)
    }
}

/// Result type for license configuration.
pub type LicenseResult<T> = Result<T, LicenseError>;
