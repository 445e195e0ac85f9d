//! Embedded Date Parsing
//!
//! Reads the `YYYYMMDD` date segment of a dated key. Each component is read as a
//! loose number: surrounding whitespace is trimmed, a blank component counts as
//! zero, and decimal or radix-prefixed literals are accepted. Components stay
//! fractional until the month offset is applied, then truncate toward zero.

use crate::types::EmbeddedDate;

/// Decoded length of a date segment.
pub const DATE_SEGMENT_LENGTH: usize = 8;

/// Split a decoded date segment into numeric components.
///
/// Returns `None` if the segment is not 8 bytes or any component is non-numeric.
pub fn parse_embedded_date(segment: &[u8]) -> Option<EmbeddedDate> {
    if segment.len() != DATE_SEGMENT_LENGTH {
        return None;
    }

    let year = to_integer(parse_component(&segment[0..4])?)?;
    let month_index = to_integer(parse_component(&segment[4..6])? - 1.0)?;
    let day = to_integer(parse_component(&segment[6..8])?)?;

    Some(EmbeddedDate {
        year,
        month_index,
        day,
    })
}

/// Largest integer magnitude kept; anything larger is far outside any valid date.
const MAX_COMPONENT: f64 = 1e15;

/// Read one component as a number.
pub fn parse_component(raw: &[u8]) -> Option<f64> {
    let text = trim_whitespace(raw);
    if text.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix_literal(text) {
        return value;
    }

    parse_decimal_literal(text)
}

fn trim_whitespace(raw: &[u8]) -> &[u8] {
    let start = raw.iter().position(|b| !is_whitespace(*b)).unwrap_or(raw.len());
    let end = raw
        .iter()
        .rposition(|b| !is_whitespace(*b))
        .map_or(start, |i| i + 1);
    &raw[start..end]
}

// Latin-1 whitespace, including NBSP.
fn is_whitespace(b: u8) -> bool {
    matches!(b, 0x09..=0x0d | b' ' | 0xa0)
}

/// `Some(..)` when the text carries a `0x`/`0o`/`0b` prefix, `None` otherwise.
fn parse_radix_literal(text: &[u8]) -> Option<Option<f64>> {
    let radix = match text {
        [b'0', b'x' | b'X', ..] => 16,
        [b'0', b'o' | b'O', ..] => 8,
        [b'0', b'b' | b'B', ..] => 2,
        _ => return None,
    };

    let digits = &text[2..];
    let valid = !digits.is_empty() && digits.iter().all(|b| (*b as char).is_digit(radix));
    if !valid {
        return Some(None);
    }

    // Digits are ASCII, so the slice is valid UTF-8
    let value = std::str::from_utf8(digits)
        .ok()
        .and_then(|s| u64::from_str_radix(s, radix).ok())
        .map(|v| v as f64);
    Some(value)
}

fn parse_decimal_literal(text: &[u8]) -> Option<f64> {
    let allowed = text
        .iter()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !allowed {
        return None;
    }

    std::str::from_utf8(text).ok()?.parse().ok()
}

/// Truncate toward zero. Non-finite and oversized values have no date.
fn to_integer(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }

    let truncated = value.trunc();
    if truncated.abs() > MAX_COMPONENT {
        return None;
    }
    Some(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CalendarDate;
    use rstest::rstest;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_embedded_date(b"20230101").unwrap();
        assert_eq!(
            date,
            EmbeddedDate {
                year: 2023,
                month_index: 0,
                day: 1
            }
        );
        assert_eq!(date.to_calendar_date(), CalendarDate::new(2023, 1, 1));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(parse_embedded_date(b"2023011").is_none());
        assert!(parse_embedded_date(b"202301011").is_none());
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(parse_embedded_date(b"abcdefgh").is_none());
        assert!(parse_embedded_date(b"2023ab01").is_none());
    }

    #[rstest]
    #[case(&b"2023"[..], Some(2023.0))]
    #[case(&b" 12 "[..], Some(12.0))]
    #[case(&b"    "[..], Some(0.0))]
    #[case(&b"+123"[..], Some(123.0))]
    #[case(&b"-123"[..], Some(-123.0))]
    #[case(&b"12.9"[..], Some(12.9))]
    #[case(&b"-1.5"[..], Some(-1.5))]
    #[case(&b"1e3 "[..], Some(1000.0))]
    #[case(&b"0x1F"[..], Some(31.0))]
    #[case(&b"0b11"[..], Some(3.0))]
    #[case(&b"0o17"[..], Some(15.0))]
    #[case(&b"0x"[..], None)]
    #[case(&b"0x1G"[..], None)]
    #[case(&b"1 2 "[..], None)]
    #[case(&b"12ab"[..], None)]
    #[case(&b"...."[..], None)]
    fn test_parse_component(#[case] raw: &[u8], #[case] expected: Option<f64>) {
        assert_eq!(parse_component(raw), expected);
    }

    #[rstest]
    #[case(12.9, Some(12))]
    #[case(-1.5, Some(-1))]
    #[case(-0.5, Some(0))]
    #[case(9e99, None)]
    #[case(f64::INFINITY, None)]
    #[case(f64::NAN, None)]
    fn test_to_integer(#[case] value: f64, #[case] expected: Option<i64>) {
        assert_eq!(to_integer(value), expected);
    }

    #[test]
    fn test_fractional_month_offset_applied_before_truncation() {
        // ".5" - 1 = -0.5, which truncates to January
        let date = parse_embedded_date(b"2023.501").unwrap();
        assert_eq!(date.month_index, 0);
        assert_eq!(date.to_calendar_date(), CalendarDate::new(2023, 1, 1));

        // "1.5" - 1 = 0.5, also January
        let date = parse_embedded_date(b"20231.01").unwrap();
        assert_eq!(date.month_index, 0);
    }

    #[test]
    fn test_exponent_year_beyond_chrono_range() {
        let date = parse_embedded_date(b"27e40101").unwrap();
        assert_eq!(date.year, 270_000);
        assert_eq!(date.to_calendar_date(), CalendarDate::new(270_000, 1, 1));

        let date = parse_embedded_date(b"9e990101");
        assert!(date.is_none());
    }

    #[test]
    fn test_parse_component_latin1_nbsp() {
        assert_eq!(parse_component(&[0xa0, b'7']), Some(7.0));
        assert_eq!(parse_component(&[0xe9, b'7']), None);
    }

    #[test]
    fn test_month_zero_rolls_back() {
        let date = parse_embedded_date(b"20230015").unwrap();
        assert_eq!(date.month_index, -1);
        assert_eq!(date.to_calendar_date(), CalendarDate::new(2022, 12, 15));
    }
}
