//! Prefixed encoding: `<tag>1<base-58 payload>`.
//!
//! The payload uses the Bitcoin base-58 alphabet
//! (`123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz`) with no
//! version byte and no checksum. Leading zero bytes become leading `1`s in
//! the payload, which is why the decoder splits on the *first* separator
//! only.

use zeroize::Zeroizing;

use super::{CodecError, KeyKind};
use crate::config::{KEY_LENGTH, MAX_PREFIXED_PAYLOAD_LENGTH, PREFIX_SEPARATOR};

/// Encode `bytes` under the tag for `kind`.
pub fn encode_prefixed(kind: KeyKind, bytes: &[u8]) -> String {
    let payload = bs58::encode(bytes).into_string();
    let mut out = String::with_capacity(kind.tag().len() + 1 + payload.len());
    out.push_str(kind.tag());
    out.push(PREFIX_SEPARATOR);
    out.push_str(&payload);
    out
}

/// Decode a prefixed string into its kind and 32 payload bytes.
///
/// Fails when the separator is missing, the tag is not `nsec`/`npub`, the
/// payload is empty, longer than [`MAX_PREFIXED_PAYLOAD_LENGTH`], or
/// contains a non-base-58 character, or when it does not decode to exactly
/// 32 bytes. Character positions in errors are relative to the whole input
/// string.
pub fn decode_prefixed(s: &str) -> Result<(KeyKind, [u8; KEY_LENGTH]), CodecError> {
    if s.is_empty() {
        return Err(CodecError::Empty);
    }

    let (tag, payload) = s
        .split_once(PREFIX_SEPARATOR)
        .ok_or(CodecError::MissingSeparator)?;
    let kind = KeyKind::from_tag(tag).ok_or(CodecError::UnknownTag)?;
    if payload.is_empty() {
        return Err(CodecError::EmptyPayload);
    }

    // Base-58 decoding is quadratic in the input length.
    let payload_chars = payload.chars().count();
    if payload_chars > MAX_PREFIXED_PAYLOAD_LENGTH {
        return Err(CodecError::PayloadTooLong {
            max: MAX_PREFIXED_PAYLOAD_LENGTH,
            got: payload_chars,
        });
    }

    // Every payload character yields at most one byte, so this never
    // overflows for a payload that passed the length check.
    let offset = tag.len() + PREFIX_SEPARATOR.len_utf8();
    let mut buf = Zeroizing::new([0u8; MAX_PREFIXED_PAYLOAD_LENGTH]);
    let written = bs58::decode(payload)
        .onto(&mut *buf)
        .map_err(|e| match e {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                CodecError::InvalidBase58Character {
                    character,
                    index: offset + index,
                }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => {
                CodecError::InvalidBase58Character {
                    character: payload
                        .get(index..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER),
                    index: offset + index,
                }
            }
            _ => CodecError::PayloadTooLong {
                max: MAX_PREFIXED_PAYLOAD_LENGTH,
                got: payload_chars,
            },
        })?;

    if written != KEY_LENGTH {
        return Err(CodecError::InvalidPayloadLength {
            expected: KEY_LENGTH,
            got: written,
        });
    }

    let mut out = [0u8; KEY_LENGTH];
    out.copy_from_slice(&buf[..KEY_LENGTH]);
    Ok((kind, out))
}
