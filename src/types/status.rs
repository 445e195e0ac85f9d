//! Status Types
//!
//! Outcome of a license verification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RejectionReason;
use crate::types::CalendarDate;

/// Possible states of the key after verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerifiedKeyStatus {
    /// Key accepted.
    Valid,
    /// Key rejected.
    Invalid,
}

impl VerifiedKeyStatus {
    /// Get the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
        }
    }

    /// Check if the key was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for VerifiedKeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerifiedKeyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VALID" => Ok(Self::Valid),
            "INVALID" => Ok(Self::Invalid),
            other => Err(format!("Unknown key status: {}", other)),
        }
    }
}

/// How an accepted key was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Plain opaque key matched by character set and length.
    Legacy,
    /// Two-segment key with an embedded date on or after the release date.
    Dated(CalendarDate),
}

/// Status together with the decision that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Externally visible status.
    pub status: VerifiedKeyStatus,
    /// Decision detail.
    pub outcome: Result<Acceptance, RejectionReason>,
}

impl Verdict {
    /// Build a verdict from a decision.
    pub fn from_outcome(outcome: Result<Acceptance, RejectionReason>) -> Self {
        let status = match outcome {
            Ok(_) => VerifiedKeyStatus::Valid,
            Err(_) => VerifiedKeyStatus::Invalid,
        };
        Self { status, outcome }
    }

    /// Rejection reason, if the key was rejected.
    pub fn reason(&self) -> Option<&RejectionReason> {
        self.outcome.as_ref().err()
    }

    /// Acceptance detail, if the key was accepted.
    pub fn acceptance(&self) -> Option<Acceptance> {
        self.outcome.as_ref().ok().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&VerifiedKeyStatus::Valid).unwrap();
        assert_eq!(json, "\"VALID\"");

        let parsed: VerifiedKeyStatus = serde_json::from_str("\"INVALID\"").unwrap();
        assert_eq!(parsed, VerifiedKeyStatus::Invalid);
    }

    #[test]
    fn test_status_display_and_parse() {
        assert_eq!(VerifiedKeyStatus::Valid.to_string(), "VALID");
        assert_eq!("INVALID".parse::<VerifiedKeyStatus>(), Ok(VerifiedKeyStatus::Invalid));
        assert!("valid".parse::<VerifiedKeyStatus>().is_err());
    }

    #[test]
    fn test_verdict_from_outcome() {
        let verdict = Verdict::from_outcome(Ok(Acceptance::Legacy));
        assert!(verdict.status.is_valid());
        assert_eq!(verdict.acceptance(), Some(Acceptance::Legacy));
        assert!(verdict.reason().is_none());

        let verdict = Verdict::from_outcome(Err(RejectionReason::EmptyToken));
        assert_eq!(verdict.status, VerifiedKeyStatus::Invalid);
        assert_eq!(verdict.reason(), Some(&RejectionReason::EmptyToken));
    }
}
