//! Hex encoding of 32-byte keys.
//!
//! Input is accepted in either case; output is always lowercase.

use super::CodecError;
use crate::config::{HEX_KEY_LENGTH, KEY_LENGTH};

/// Lowercase hex, two characters per byte, no separators.
pub fn encode_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decode exactly 64 hex digits into 32 bytes.
///
/// Length is checked before content, so `"a" * 63` reports a length error
/// rather than an odd-length one. Lengths and positions count characters,
/// not bytes.
pub fn decode_hex(s: &str) -> Result<[u8; KEY_LENGTH], CodecError> {
    if s.is_empty() {
        return Err(CodecError::Empty);
    }
    let len = s.chars().count();
    if len != HEX_KEY_LENGTH {
        return Err(CodecError::InvalidLength {
            expected: HEX_KEY_LENGTH,
            got: len,
        });
    }
    if let Some((index, character)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(CodecError::InvalidHexCharacter { character, index });
    }

    let mut out = [0u8; KEY_LENGTH];
    ::hex::decode_to_slice(s, &mut out).map_err(|e| match e {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            CodecError::InvalidHexCharacter {
                character: c,
                index,
            }
        }
        _ => CodecError::InvalidLength {
            expected: HEX_KEY_LENGTH,
            got: len,
        },
    })?;
    Ok(out)
}
