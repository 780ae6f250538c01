//! # Textual Key Encodings
//!
//! Two ways to write 32 bytes of key material as text:
//!
//! - **hex** — 64 lowercase hex characters, no prefix.
//! - **prefixed** — a kind tag (`nsec` or `npub`), the separator `1`, then
//!   the bytes in base-58.
//!
//! ```text
//! hex       3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d
//! prefixed  npub1<base-58 payload>
//! ```
//!
//! The prefixed form carries no checksum. A corrupted payload character
//! usually changes the decoded bytes silently rather than failing to decode,
//! so the prefixed form is for display and copy-paste between trusted
//! places, not for transports that need error detection.
//!
//! Everything here is pure: no curve arithmetic, no randomness. Whether the
//! decoded bytes are a usable key is decided by [`crate::crypto::curve`].

pub mod hex;
pub mod prefixed;

use std::fmt;

use thiserror::Error;

use crate::config::{HEX_KEY_LENGTH, PRIVATE_KEY_TAG, PUBLIC_KEY_TAG};

pub use self::hex::{decode_hex, encode_hex};
pub use self::prefixed::{decode_prefixed, encode_prefixed};

/// Grammar violations found while decoding a key string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("empty key string")]
    Empty,

    #[error("wrong length: expected {expected} characters, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid hex character {character:?} at position {index}")]
    InvalidHexCharacter { character: char, index: usize },

    #[error("missing '1' separator after the key tag")]
    MissingSeparator,

    #[error("unrecognized key tag: expected nsec or npub")]
    UnknownTag,

    #[error("empty payload after the key tag")]
    EmptyPayload,

    #[error("payload too long: at most {max} characters, got {got}")]
    PayloadTooLong { max: usize, got: usize },

    #[error("invalid base-58 character {character:?} at position {index}")]
    InvalidBase58Character { character: char, index: usize },

    #[error("wrong payload size: expected {expected} bytes, got {got}")]
    InvalidPayloadLength { expected: usize, got: usize },
}

/// Which half of a keypair a string or value represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// A secret scalar (`nsec`).
    Private,
    /// An x-only curve point (`npub`).
    Public,
}

impl KeyKind {
    /// The prefixed-encoding tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            KeyKind::Private => PRIVATE_KEY_TAG,
            KeyKind::Public => PUBLIC_KEY_TAG,
        }
    }

    /// Look up a kind by its exact tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            PRIVATE_KEY_TAG => Some(KeyKind::Private),
            PUBLIC_KEY_TAG => Some(KeyKind::Public),
            _ => None,
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Private => f.write_str("private"),
            KeyKind::Public => f.write_str("public"),
        }
    }
}

/// The two textual encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Hex,
    Prefixed,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Hex => f.write_str("hex"),
            Encoding::Prefixed => f.write_str("prefixed"),
        }
    }
}

/// Syntactic shape of a key string, before any decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detected {
    /// Known for prefixed strings; `None` for hex, which is ambiguous.
    pub kind: Option<KeyKind>,
    pub encoding: Encoding,
}

/// Classify a key string by its tag or shape.
///
/// Tagged strings are recognized by a leading `nsec`/`npub`. Untagged
/// strings are treated as hex only when they are exactly 64 hex digits.
/// This does not decode anything, so a `Some` result can still fail to
/// decode.
pub fn detect(s: &str) -> Option<Detected> {
    for kind in [KeyKind::Private, KeyKind::Public] {
        if s.starts_with(kind.tag()) {
            return Some(Detected {
                kind: Some(kind),
                encoding: Encoding::Prefixed,
            });
        }
    }

    if s.len() == HEX_KEY_LENGTH && s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Some(Detected {
            kind: None,
            encoding: Encoding::Hex,
        });
    }

    None
}
