//! License Key
//!
//! Owned license key that stays out of logs.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;

/// License key as supplied by the user.
///
/// `Debug` prints only the length, so keys can sit in config structs that get logged.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct LicenseKey(SecretString);

impl LicenseKey {
    /// Wrap a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::new(key.into()))
    }

    /// Get the raw key.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Length of the raw key in bytes.
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    /// Check if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl fmt::Debug for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LicenseKey([REDACTED; {} bytes])", self.len())
    }
}

impl From<String> for LicenseKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for LicenseKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = LicenseKey::new("super-secret-key");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("16 bytes"));
    }

    #[test]
    fn test_deserialize_transparent() {
        let key: LicenseKey = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(key.expose(), "abc");
        assert_eq!(key.len(), 3);
        assert!(!key.is_empty());
    }
}
