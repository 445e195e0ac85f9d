//! Legacy Key Format
//!
//! Keys issued before dated keys existed are opaque strings checked by shape only.

use std::ops::RangeInclusive;

/// Validate legacy key format.
pub fn is_valid_legacy_key(key: &str, length: &RangeInclusive<usize>) -> bool {
    // Byte length equals character length once the charset check passes
    if !length.contains(&key.len()) {
        return false;
    }

    // Must be non-empty and only contain: [A-Z] / [a-z] / [0-9] / "+" / "/" / "=" / "$"
    !key.is_empty() && key.bytes().all(is_legacy_byte)
}

fn is_legacy_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=' | b'$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_LEGACY_LENGTH;
    use rstest::rstest;

    #[rstest]
    #[case(40, true)]
    #[case(39, false)]
    #[case(255, true)]
    #[case(256, false)]
    fn test_legacy_length_bounds(#[case] length: usize, #[case] expected: bool) {
        let key = "X".repeat(length);
        assert_eq!(is_valid_legacy_key(&key, &DEFAULT_LEGACY_LENGTH), expected);
    }

    #[test]
    fn test_legacy_charset() {
        let key = format!("{}+/=$", "aZ09".repeat(10));
        assert!(is_valid_legacy_key(&key, &DEFAULT_LEGACY_LENGTH));

        let key = format!("{}-", "a".repeat(40));
        assert!(!is_valid_legacy_key(&key, &DEFAULT_LEGACY_LENGTH));

        let key = format!("{} ", "a".repeat(40));
        assert!(!is_valid_legacy_key(&key, &DEFAULT_LEGACY_LENGTH));
    }

    #[test]
    fn test_legacy_rejects_multibyte() {
        // 40 characters, 41 bytes
        let key = format!("{}\u{e9}", "a".repeat(39));
        assert!(!is_valid_legacy_key(&key, &DEFAULT_LEGACY_LENGTH));
    }

    #[test]
    fn test_legacy_empty_never_valid() {
        assert!(!is_valid_legacy_key("", &(0..=10)));
    }
}
