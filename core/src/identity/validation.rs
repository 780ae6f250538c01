//! Validation of caller-supplied key strings.
//!
//! [`validate`] checks both the grammar and the math: a private key must
//! decode and be in range, a public key must decode and lie on the curve.
//! The result says what the string turned out to be.
//!
//! Detection order for [`ExpectedKind::Auto`]: a leading `nsec`/`npub` tag
//! selects the prefixed decoder, anything else goes to the hex decoder. A
//! tagged string can never be valid hex (`n`, `s`, `p`, `u` are not hex
//! digits), so trying prefixed first loses nothing.

use std::fmt;

use zeroize::Zeroizing;

use super::keys::{KeyPair, PublicKey};
use crate::codec::{decode_hex, detect, Detected, Encoding, KeyKind};
use crate::crypto::lift_x;
use crate::error::KeyError;

/// What the caller expects a key string to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpectedKind {
    Private,
    Public,
    /// Accept either, and report which.
    #[default]
    Auto,
}

impl ExpectedKind {
    /// The concrete kind, or `None` for `Auto`.
    pub fn kind(self) -> Option<KeyKind> {
        match self {
            ExpectedKind::Private => Some(KeyKind::Private),
            ExpectedKind::Public => Some(KeyKind::Public),
            ExpectedKind::Auto => None,
        }
    }
}

impl From<KeyKind> for ExpectedKind {
    fn from(kind: KeyKind) -> Self {
        match kind {
            KeyKind::Private => ExpectedKind::Private,
            KeyKind::Public => ExpectedKind::Public,
        }
    }
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedKind::Private => f.write_str("private"),
            ExpectedKind::Public => f.write_str("public"),
            ExpectedKind::Auto => f.write_str("auto"),
        }
    }
}

/// A key string that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedKey {
    /// A private key; the keypair carries the derived public key.
    Private { keypair: KeyPair, encoding: Encoding },
    /// A public key that lies on the curve.
    Public { public_key: PublicKey, encoding: Encoding },
    /// Auto-detected hex that is both an in-range scalar and a valid
    /// x-coordinate. Untagged hex says nothing about which was meant.
    Ambiguous { keypair: KeyPair, public_key: PublicKey },
}

impl ValidatedKey {
    /// The resolved kind, or `None` when ambiguous.
    pub fn kind(&self) -> Option<KeyKind> {
        match self {
            ValidatedKey::Private { .. } => Some(KeyKind::Private),
            ValidatedKey::Public { .. } => Some(KeyKind::Public),
            ValidatedKey::Ambiguous { .. } => None,
        }
    }

    /// The encoding the input was written in.
    pub fn encoding(&self) -> Encoding {
        match self {
            ValidatedKey::Private { encoding, .. } | ValidatedKey::Public { encoding, .. } => {
                *encoding
            }
            ValidatedKey::Ambiguous { .. } => Encoding::Hex,
        }
    }
}

/// Validate `s` as the `expected` kind of key.
///
/// - `Auto`: prefixed strings resolve by tag; hex resolves to whichever
///   interpretations pass their checks. A string matching neither grammar
///   is a format error.
/// - `Private`/`Public`: a string tagged for the other kind, or matching
///   neither grammar, is a type mismatch. Hex is checked as the expected
///   kind only.
///
/// Decoding and range/curve failures on a string of the right shape keep
/// their own error kinds.
pub fn validate(s: &str, expected: ExpectedKind) -> Result<ValidatedKey, KeyError> {
    match detect(s) {
        Some(Detected {
            kind: Some(found), ..
        }) => validate_prefixed(s, found, expected),
        Some(Detected { kind: None, .. }) => validate_hex(s, expected),
        None => match expected.kind() {
            Some(want) => Err(KeyError::mismatch(want, "unrecognized key string")),
            // Neither grammar matched; the hex decoder names the problem.
            None => validate_hex(s, expected),
        },
    }
}

fn validate_prefixed(
    s: &str,
    found: KeyKind,
    expected: ExpectedKind,
) -> Result<ValidatedKey, KeyError> {
    if let Some(want) = expected.kind() {
        if want != found {
            return Err(KeyError::mismatch(
                want,
                format!("{found} key ({})", found.tag()),
            ));
        }
    }

    match found {
        KeyKind::Private => Ok(ValidatedKey::Private {
            keypair: KeyPair::from_private_prefixed(s)?,
            encoding: Encoding::Prefixed,
        }),
        KeyKind::Public => Ok(ValidatedKey::Public {
            public_key: PublicKey::from_prefixed(s)?,
            encoding: Encoding::Prefixed,
        }),
    }
}

fn validate_hex(s: &str, expected: ExpectedKind) -> Result<ValidatedKey, KeyError> {
    let bytes = Zeroizing::new(decode_hex(s)?);

    match expected {
        ExpectedKind::Private => Ok(ValidatedKey::Private {
            keypair: KeyPair::from_private_bytes(&bytes)?,
            encoding: Encoding::Hex,
        }),
        ExpectedKind::Public => Ok(ValidatedKey::Public {
            public_key: lift_x(&bytes)?,
            encoding: Encoding::Hex,
        }),
        ExpectedKind::Auto => {
            match (KeyPair::from_private_bytes(&bytes), lift_x(&bytes)) {
                (Ok(keypair), Ok(public_key)) => Ok(ValidatedKey::Ambiguous {
                    keypair,
                    public_key,
                }),
                (Ok(keypair), Err(_)) => Ok(ValidatedKey::Private {
                    keypair,
                    encoding: Encoding::Hex,
                }),
                (Err(_), Ok(public_key)) => Ok(ValidatedKey::Public {
                    public_key,
                    encoding: Encoding::Hex,
                }),
                (Err(range), Err(_)) => Err(range),
            }
        }
    }
}
