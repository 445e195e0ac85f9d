//! License Verification Module
//!
//! Offline classification of license keys as `VALID` or `INVALID`.
//!
//! # Features
//!
//! - Dated keys: base64 of `<signature>-<base64(YYYYMMDD)>`, accepted when the
//!   embedded date is on or after the release date
//! - Legacy keys: opaque `[a-zA-Z0-9+/=$]` strings of 40 to 255 characters
//! - Browser-compatible base64 decoding (whitespace and missing padding tolerated)
//! - Release date fixed at build time through `LICENSE_RELEASE_DATE`
//! - Diagnostics via [`LicenseVerifier::inspect`] without changing the two-state result
//!
//! Keys are not cryptographically signed; this is a format and date gate only.
//!
//! # Example
//!
//! ```rust
//! use license_verification::{
//!     verifier_config, DefaultLicenseVerifier, LicenseVerifier, VerifiedKeyStatus,
//! };
//!
//! # fn main() -> Result<(), license_verification::LicenseError> {
//! let config = verifier_config().release_date_str("2020-01-01").build()?;
//! let verifier = DefaultLicenseVerifier::new(config);
//!
//! let legacy_key = "X".repeat(40);
//! assert_eq!(verifier.verify(Some(&legacy_key)), VerifiedKeyStatus::Valid);
//! assert_eq!(verifier.verify(None), VerifiedKeyStatus::Invalid);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `types`: status, key, payload, and configuration types
//! - `error`: configuration errors and rejection reasons
//! - `core`: base64 decoding, legacy format check, and date parsing
//! - `builders`: fluent builder for configuration
//! - `verifier`: the decision chain plus default and mock verifiers

pub mod builders;
pub mod core;
pub mod error;
pub mod types;
pub mod verifier;

// Re-export main verifier
pub use verifier::{
    create_license_verifier, create_mock_license_verifier, verify_license,
    DefaultLicenseVerifier, LicenseVerifier, MockLicenseVerifier,
};

// Re-export builders
pub use builders::{verifier_config, VerifierConfigBuilder};

// Re-export errors
pub use error::{ConfigurationError, LicenseError, LicenseResult, RejectionReason};

// Re-export types
pub use types::{
    // Config
    VerifierConfig, DEFAULT_LEGACY_LENGTH, DEFAULT_RELEASE_DATE, DEFAULT_SIGNATURE_LENGTH,
    // Key
    LicenseKey,
    // Payload
    CalendarDate, DecodedPayload, EmbeddedDate, MAX_EPOCH_DAYS,
    // Status
    Acceptance, Verdict, VerifiedKeyStatus,
};

// Re-export core components
pub use self::core::{decode_forgiving, is_valid_legacy_key, DecodeError};
