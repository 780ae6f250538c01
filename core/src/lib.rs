// Copyright (c) 2026 Nostress Developers. MIT License.
// See LICENSE for details.

//! # nostress-core
//!
//! Generation, encoding, and validation of secp256k1 identity keys for a
//! Nostr-style decentralized protocol.
//!
//! Identities are x-only secp256k1 keys. A private key is a 32-byte scalar
//! in `(0, n)`; its public key is the x-coordinate of `k·G`. Both can be
//! written as 64 hex digits or in a tagged form (`nsec1…` / `npub1…`) with
//! a base-58 payload.
//!
//! ## Architecture
//!
//! - **crypto** — the entropy source and the curve engine (scalar range
//!   check, public-key derivation, lift-x).
//! - **codec** — hex and prefixed encodings. Pure string/byte shuffling.
//! - **identity** — the key value types and string validation.
//! - **config** — format constants.
//! - **error** — the error taxonomy shared by all of the above.
//!
//! ## Ground rules
//!
//! 1. Nothing here prints, logs, or touches the filesystem or network.
//! 2. No unchecked key ever escapes: every constructor range-checks or
//!    curve-checks before returning.
//! 3. Secret bytes are wiped on drop and never appear in `Debug` output.
//!
//! ```
//! use nostress_core::{validate, ExpectedKind, KeyPair, ValidatedKey};
//!
//! let kp = KeyPair::generate().unwrap();
//! let npub = kp.public_key().to_prefixed();
//!
//! match validate(&npub, ExpectedKind::Auto).unwrap() {
//!     ValidatedKey::Public { public_key, .. } => assert_eq!(&public_key, kp.public_key()),
//!     other => panic!("expected a public key, got {other:?}"),
//! }
//! ```

pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod identity;

pub use codec::{CodecError, Encoding, KeyKind};
pub use error::{ErrorKind, KeyError};
pub use identity::{
    validate, EncodedKeyPair, ExpectedKind, KeyPair, PrivateKey, PublicKey, ValidatedKey,
};

#[cfg(test)]
mod proptests;
