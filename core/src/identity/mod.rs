//! # Identity Keys
//!
//! The part of the crate callers actually hold on to. Everything here is a
//! plain value: no global keystore, no caching, no shared state. A
//! [`KeyPair`] belongs to whoever built it and is gone when they drop it.
//!
//! The layering is:
//!
//! 1. **keys** — [`PrivateKey`], [`PublicKey`], [`KeyPair`] and their
//!    constructors from bytes, hex, and prefixed strings.
//! 2. **validation** — [`validate`], which classifies an arbitrary string
//!    and runs the range or curve check that applies to it.

pub mod keys;
pub mod validation;

pub use keys::{EncodedKeyPair, KeyPair, PrivateKey, PublicKey};
pub use validation::{validate, ExpectedKind, ValidatedKey};
