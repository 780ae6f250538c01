//! Error types for key operations.
//!
//! Every fallible operation in this crate returns a [`KeyError`]. The
//! variant tells the caller which stage rejected the input: the textual
//! grammar, the scalar range check, the curve membership check, the
//! expected-type check, or the entropy source.

use thiserror::Error;

use crate::codec::{CodecError, KeyKind};

/// Errors produced while generating, decoding, or validating keys.
///
/// Messages never contain key material. Format errors report at most the
/// offending character and its position.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The string does not match the hex or prefixed grammar.
    #[error("invalid key format: {0}")]
    Format(#[from] CodecError),

    /// The decoded scalar is zero or not below the secp256k1 group order.
    #[error("private key out of range: scalar must be in (0, n)")]
    Range,

    /// The decoded x-coordinate has no corresponding secp256k1 point.
    #[error("public key is not on the secp256k1 curve")]
    Curve,

    /// The string is well-formed but encodes the wrong kind of key.
    #[error("expected {expected} key, got {found}")]
    TypeMismatch {
        /// The kind the caller asked for.
        expected: KeyKind,
        /// What the input looked like instead.
        found: String,
    },

    /// The platform secure random source failed.
    #[error("secure random source unavailable: {0}")]
    Entropy(String),
}

/// Fieldless mirror of [`KeyError`] for callers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    Range,
    Curve,
    TypeMismatch,
    Entropy,
}

impl KeyError {
    /// The kind of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            KeyError::Format(_) => ErrorKind::Format,
            KeyError::Range => ErrorKind::Range,
            KeyError::Curve => ErrorKind::Curve,
            KeyError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            KeyError::Entropy(_) => ErrorKind::Entropy,
        }
    }

    pub(crate) fn mismatch(expected: KeyKind, found: impl Into<String>) -> Self {
        KeyError::TypeMismatch {
            expected,
            found: found.into(),
        }
    }
}
