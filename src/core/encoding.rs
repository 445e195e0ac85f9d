//! Forgiving Base64 Encoding
//!
//! Base64 decoding with the same leniency browsers apply in `atob`: whitespace is
//! ignored, padding is optional, and stray trailing bits are dropped.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use thiserror::Error;

/// Engine for input that has already been stripped of whitespace and padding.
const UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Decode failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid base64 length: {length}")]
    InvalidLength { length: usize },

    #[error("Invalid base64 byte 0x{byte:02x} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },
}

/// Decode base64 the way `atob` does.
pub fn decode_forgiving(input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let mut data: Vec<u8> = input
        .as_ref()
        .iter()
        .copied()
        .filter(|b| !is_ascii_whitespace(*b))
        .collect();

    if data.len() % 4 == 0 {
        if data.ends_with(b"==") {
            data.truncate(data.len() - 2);
        } else if data.ends_with(b"=") {
            data.truncate(data.len() - 1);
        }
    }

    if data.len() % 4 == 1 {
        return Err(DecodeError::InvalidLength { length: data.len() });
    }

    if let Some(offset) = data.iter().position(|b| !is_alphabet_byte(*b)) {
        return Err(DecodeError::InvalidByte {
            byte: data[offset],
            offset,
        });
    }

    UNPADDED
        .decode(&data)
        .map_err(|_| DecodeError::InvalidLength { length: data.len() })
}

/// Check if input decodes.
pub fn is_decodable(input: impl AsRef<[u8]>) -> bool {
    decode_forgiving(input).is_ok()
}

fn is_ascii_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0c | b'\r' | b' ')
}

fn is_alphabet_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'/'
}
