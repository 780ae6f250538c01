//! # Key Model
//!
//! Value types for secp256k1 identity keys:
//!
//! - [`PrivateKey`] — a 32-byte scalar in `(0, n)`, wiped on drop.
//! - [`PublicKey`] — a 32-byte x-only point, always on the curve.
//! - [`KeyPair`] — one of each, with `public == derive(private)`.
//!
//! None of these can be built from unchecked bytes outside the crate. Every
//! public constructor runs the range check or the lift-x check first, and a
//! `KeyPair` can only be built by deriving its public half, so a mismatched
//! pair is unrepresentable.
//!
//! ## Secret handling
//!
//! - `PrivateKey` zeroizes its bytes on drop.
//! - `Debug` never prints secret bytes. Not even a prefix.
//! - There is no `Serialize` for private material. Getting a secret out as
//!   text is always an explicit `to_hex()` / `to_prefixed()` call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::codec::{
    decode_hex, decode_prefixed, detect, encode_hex, encode_prefixed, Encoding, KeyKind,
};
use crate::config::KEY_LENGTH;
use crate::crypto::{derive_public, generate_scalar, lift_x, validate_scalar};
use crate::crypto::{EntropySource, OsEntropy};
use crate::error::KeyError;

// ---------------------------------------------------------------------------
// PrivateKey
// ---------------------------------------------------------------------------

/// A secp256k1 secret scalar, big-endian, guaranteed in `(0, n)`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: [u8; KEY_LENGTH],
}

impl PrivateKey {
    /// Wrap bytes that already passed the range check.
    pub(crate) fn from_validated(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Range-check raw bytes. Same as [`validate_scalar`].
    pub fn from_bytes(bytes: &[u8; KEY_LENGTH]) -> Result<Self, KeyError> {
        validate_scalar(bytes)
    }

    /// The raw scalar bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.bytes)
    }

    /// `nsec1…`
    pub fn to_prefixed(&self) -> String {
        encode_prefixed(KeyKind::Private, &self.bytes)
    }

    pub fn to_encoding(&self, encoding: Encoding) -> String {
        match encoding {
            Encoding::Hex => self.to_hex(),
            Encoding::Prefixed => self.to_prefixed(),
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// An x-only secp256k1 public key.
///
/// Always the x-coordinate of a real curve point: either derived from a
/// private key or re-verified with lift-x when parsed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: [u8; KEY_LENGTH],
}

impl PublicKey {
    pub(crate) fn from_validated(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Lift-x check raw bytes. Same as [`lift_x`].
    pub fn from_bytes(bytes: &[u8; KEY_LENGTH]) -> Result<Self, KeyError> {
        lift_x(bytes)
    }

    /// Parse 64 hex digits and verify the point is on the curve.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = decode_hex(s)?;
        lift_x(&bytes)
    }

    /// Parse an `npub1…` string and verify the point is on the curve.
    ///
    /// An `nsec1…` string is a type mismatch, not a format error.
    pub fn from_prefixed(s: &str) -> Result<Self, KeyError> {
        reject_other_tag(s, KeyKind::Public)?;
        let (_, bytes) = decode_prefixed(s)?;
        lift_x(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.bytes)
    }

    /// `npub1…`
    pub fn to_prefixed(&self) -> String {
        encode_prefixed(KeyKind::Public, &self.bytes)
    }

    pub fn to_encoding(&self, encoding: Encoding) -> String {
        match encoding {
            Encoding::Hex => self.to_hex(),
            Encoding::Prefixed => self.to_prefixed(),
        }
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    /// Accepts either encoding; `npub`-tagged strings take the prefixed
    /// path, everything else is parsed as hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match detect(s).and_then(|d| d.kind) {
            Some(_) => Self::from_prefixed(s),
            None => Self::from_hex(s),
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

impl Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.bytes)
        }
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            PublicKey::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            let arr: [u8; KEY_LENGTH] = bytes.as_slice().try_into().map_err(|_| {
                serde::de::Error::custom(format!(
                    "expected {KEY_LENGTH}-byte public key, got {}",
                    bytes.len()
                ))
            })?;
            PublicKey::from_bytes(&arr).map_err(serde::de::Error::custom)
        }
    }
}

// ---------------------------------------------------------------------------
// KeyPair
// ---------------------------------------------------------------------------

/// A private key together with its derived public key.
///
/// Built only by generation or by re-deriving from a known private key.
/// Never mutated afterwards.
///
/// # Examples
///
/// ```
/// use nostress_core::KeyPair;
///
/// let kp = KeyPair::generate().unwrap();
/// let restored = KeyPair::from_private_hex(&kp.private_key().to_hex()).unwrap();
/// assert_eq!(kp.public_key(), restored.public_key());
/// ```
#[derive(Clone)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

/// Both halves of a keypair rendered in one encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedKeyPair {
    pub private_key: String,
    pub public_key: String,
    pub encoding: Encoding,
}

impl fmt::Debug for EncodedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("encoding", &self.encoding)
            .finish()
    }
}

impl Drop for EncodedKeyPair {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl KeyPair {
    /// Generate a fresh keypair from the operating system CSPRNG.
    ///
    /// The only failure is an unavailable entropy source.
    pub fn generate() -> Result<Self, KeyError> {
        Self::generate_with(&OsEntropy)
    }

    /// Generate a fresh keypair from `source`.
    pub fn generate_with(source: &impl EntropySource) -> Result<Self, KeyError> {
        let private = generate_scalar(source)?;
        Self::from_private_key(private)
    }

    /// Range-check `bytes` and derive the public key.
    pub fn from_private_bytes(bytes: &[u8; KEY_LENGTH]) -> Result<Self, KeyError> {
        let private = validate_scalar(bytes)?;
        Self::from_private_key(private)
    }

    /// decode_hex → validate_scalar → derive_public.
    pub fn from_private_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = Zeroizing::new(decode_hex(s)?);
        Self::from_private_bytes(&bytes)
    }

    /// decode_prefixed (tag `nsec`) → validate_scalar → derive_public.
    ///
    /// An `npub1…` string is a type mismatch, not a format error.
    pub fn from_private_prefixed(s: &str) -> Result<Self, KeyError> {
        reject_other_tag(s, KeyKind::Private)?;
        let (_, bytes) = decode_prefixed(s)?;
        let bytes = Zeroizing::new(bytes);
        Self::from_private_bytes(&bytes)
    }

    /// Accepts either encoding; `nsec`/`npub`-tagged strings take the
    /// prefixed path, everything else is parsed as hex.
    pub fn from_private_str(s: &str) -> Result<Self, KeyError> {
        match detect(s).and_then(|d| d.kind) {
            Some(_) => Self::from_private_prefixed(s),
            None => Self::from_private_hex(s),
        }
    }

    fn from_private_key(private: PrivateKey) -> Result<Self, KeyError> {
        let public = derive_public(&private)?;
        Ok(Self { private, public })
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Render both halves in `encoding`.
    pub fn to_encoding(&self, encoding: Encoding) -> EncodedKeyPair {
        EncodedKeyPair {
            private_key: self.private.to_encoding(encoding),
            public_key: self.public.to_encoding(encoding),
            encoding,
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair(pub={})", &self.public.to_hex()[..16])
    }
}

impl PartialEq for KeyPair {
    /// Pairs are equal when their public keys are. The private half is
    /// determined up to sign by the public half, and comparing secrets is
    /// not something this type does.
    fn eq(&self, other: &Self) -> bool {
        self.public == other.public
    }
}

impl Eq for KeyPair {}

/// Fail with a type mismatch when `s` starts with the other kind's tag.
///
/// Classifies by leading tag, like [`detect`], so a malformed string such
/// as `npubabc` is a mismatch here too rather than a missing separator.
fn reject_other_tag(s: &str, want: KeyKind) -> Result<(), KeyError> {
    match detect(s).and_then(|d| d.kind) {
        Some(found) if found != want => Err(KeyError::mismatch(
            want,
            format!("{found} key ({})", found.tag()),
        )),
        _ => Ok(()),
    }
}
