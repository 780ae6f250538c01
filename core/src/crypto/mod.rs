//! # Cryptographic Primitives
//!
//! Two leaf components sit here:
//!
//! - **entropy** — the secure random byte source. Nothing else in the
//!   crate produces randomness.
//! - **curve** — secp256k1 scalar validation, public-key derivation, and
//!   lift-x membership checks.
//!
//! Neither keeps state between calls, so both are safe to use from any
//! number of threads at once.

pub mod curve;
pub mod entropy;

pub use curve::{derive_public, generate_scalar, lift_x, validate_scalar};
pub use entropy::{random_bytes, EntropySource, OsEntropy};
