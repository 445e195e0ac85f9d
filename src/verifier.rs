//! License Verifier
//!
//! Classifies license keys as `VALID` or `INVALID`.
//!
//! A dated key is base64 of `<signature>-<date>`, where `<date>` is itself base64
//! of `YYYYMMDD`. Anything that does not look like a dated key falls back to the
//! legacy shape check. Every failure collapses to `INVALID`; the reason is only
//! available through [`LicenseVerifier::inspect`] and debug logs.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::{debug, trace, warn};

use crate::core::{
    decode_forgiving, is_decodable, is_valid_legacy_key, parse_embedded_date, DATE_SEGMENT_LENGTH,
};
use crate::error::{LicenseResult, RejectionReason};
use crate::types::{
    Acceptance, CalendarDate, DecodedPayload, LicenseKey, Verdict, VerifiedKeyStatus,
    VerifierConfig,
};

/// License verifier interface (for dependency injection).
pub trait LicenseVerifier: Send + Sync {
    /// Verify a key and report how the decision was reached.
    fn inspect(&self, token: Option<&str>) -> Verdict;

    /// Verify a key.
    fn verify(&self, token: Option<&str>) -> VerifiedKeyStatus {
        self.inspect(token).status
    }

    /// Verify an owned key.
    fn verify_key(&self, key: &LicenseKey) -> VerifiedKeyStatus {
        self.verify(Some(key.expose()))
    }
}

/// Default license verifier implementation.
#[derive(Clone, Debug)]
pub struct DefaultLicenseVerifier {
    config: VerifierConfig,
}

impl DefaultLicenseVerifier {
    /// Create verifier with the given configuration.
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    /// Create verifier using the release date fixed at build time.
    pub fn from_build_env() -> LicenseResult<Self> {
        Ok(Self::new(VerifierConfig::from_build_env()?))
    }

    /// Get the configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    fn evaluate(&self, token: Option<&str>) -> Result<Acceptance, RejectionReason> {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(RejectionReason::EmptyToken),
        };

        let decoded = decode_forgiving(token).map_err(|e| {
            trace!(error = %e, "token is not base64");
            RejectionReason::MalformedToken
        })?;

        let payload = DecodedPayload::split(&decoded);
        let signature = payload.signature_part.as_slice();

        let date_part = match payload.non_empty_date_part() {
            Some(part) => part,
            None => {
                trace!("no date segment, using legacy format");
                return self.check_legacy(token);
            }
        };

        // An undecodable date segment only means "legacy" when the signature is
        // undecodable or empty too. Otherwise the dated checks below still run.
        if !is_decodable(date_part) {
            match decode_forgiving(signature) {
                Ok(bytes) if !bytes.is_empty() => {
                    trace!("date segment is not base64 but signature is");
                }
                _ => {
                    trace!("neither segment decodes, using legacy format");
                    return self.check_legacy(token);
                }
            }
        }

        if !self.config.signature_length.contains(&signature.len()) {
            return Err(RejectionReason::SignatureLength {
                length: signature.len(),
            });
        }

        if !is_decodable(signature) {
            return Err(RejectionReason::MalformedSignature);
        }

        let date_bytes = decode_forgiving(date_part).map_err(|_| RejectionReason::MalformedDate)?;

        if date_bytes.len() != DATE_SEGMENT_LENGTH {
            return Err(RejectionReason::DateLength {
                length: date_bytes.len(),
            });
        }

        let date = parse_embedded_date(&date_bytes)
            .and_then(|embedded| embedded.to_calendar_date())
            .ok_or(RejectionReason::UnparseableDate)?;

        if date < CalendarDate::from(self.config.release_date) {
            return Err(RejectionReason::BeforeRelease {
                date,
                release_date: self.config.release_date,
            });
        }

        Ok(Acceptance::Dated(date))
    }

    fn check_legacy(&self, token: &str) -> Result<Acceptance, RejectionReason> {
        if is_valid_legacy_key(token, &self.config.legacy_length) {
            Ok(Acceptance::Legacy)
        } else {
            Err(RejectionReason::LegacyFormat)
        }
    }
}

impl Default for DefaultLicenseVerifier {
    fn default() -> Self {
        Self::new(VerifierConfig::default())
    }
}

impl LicenseVerifier for DefaultLicenseVerifier {
    fn inspect(&self, token: Option<&str>) -> Verdict {
        let outcome = self.evaluate(token);

        match &outcome {
            Ok(acceptance) => debug!(?acceptance, "license key accepted"),
            Err(reason) => debug!(
                code = reason.code(),
                legacy = reason.is_legacy(),
                token_len = token.map_or(0, str::len),
                %reason,
                "license key rejected"
            ),
        }

        Verdict::from_outcome(outcome)
    }
}

/// Mock license verifier for testing.
pub struct MockLicenseVerifier {
    status: Mutex<VerifiedKeyStatus>,
    verify_history: Mutex<Vec<Option<String>>>,
}

impl MockLicenseVerifier {
    /// Create mock verifier that answers with `status`.
    pub fn new(status: VerifiedKeyStatus) -> Self {
        Self {
            status: Mutex::new(status),
            verify_history: Mutex::new(Vec::new()),
        }
    }

    /// Set the status returned from now on.
    pub fn set_status(&self, status: VerifiedKeyStatus) -> &Self {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = status;
        self
    }

    /// Get verify history.
    pub fn get_verify_history(&self) -> Vec<Option<String>> {
        self.verify_history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for MockLicenseVerifier {
    fn default() -> Self {
        Self::new(VerifiedKeyStatus::Valid)
    }
}

impl LicenseVerifier for MockLicenseVerifier {
    fn inspect(&self, token: Option<&str>) -> Verdict {
        self.verify_history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(token.map(str::to_string));

        let status = *self.status.lock().unwrap_or_else(|e| e.into_inner());
        let outcome = match status {
            VerifiedKeyStatus::Valid => Ok(Acceptance::Legacy),
            VerifiedKeyStatus::Invalid => Err(RejectionReason::LegacyFormat),
        };
        Verdict::from_outcome(outcome)
    }
}

static BUILD_VERIFIER: Lazy<DefaultLicenseVerifier> =
    Lazy::new(|| match DefaultLicenseVerifier::from_build_env() {
        Ok(verifier) => verifier,
        Err(e) => {
            warn!(error = %e, "falling back to default release date");
            DefaultLicenseVerifier::default()
        }
    });

/// Verify a key against the release date fixed at build time.
pub fn verify_license(token: Option<&str>) -> VerifiedKeyStatus {
    BUILD_VERIFIER.verify(token)
}

/// Create production license verifier.
pub fn create_license_verifier(config: VerifierConfig) -> impl LicenseVerifier {
    DefaultLicenseVerifier::new(config)
}

/// Create mock license verifier for testing.
pub fn create_mock_license_verifier(status: VerifiedKeyStatus) -> MockLicenseVerifier {
    MockLicenseVerifier::new(status)
}
