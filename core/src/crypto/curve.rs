//! # Curve Engine
//!
//! secp256k1 arithmetic for identity keys, on top of `k256`.
//!
//! Public keys are x-only: the 32-byte x-coordinate of `k·G`, with the
//! sign of `y` dropped. Recovering a point from such a key ("lift-x")
//! picks the even-`y` point, but every function here only ever hands back
//! the x-coordinate, so the choice is not observable.
//!
//! ```text
//! 32 random bytes ──validate_scalar──▶ k ∈ (0, n)
//!                                      │
//!                                      ▼ derive_public
//!                                   x(k·G) ──lift_x──▶ point on curve?
//! ```
//!
//! All operations are constant-size and allocation-free. Scalar bytes only
//! leave this module inside a [`PrivateKey`], which wipes them on drop.

use k256::elliptic_curve::point::{AffineCoordinates, DecompressPoint};
use k256::elliptic_curve::subtle::Choice;
use k256::{AffinePoint, FieldBytes, NonZeroScalar, ProjectivePoint};

use super::entropy::{random_bytes, EntropySource};
use crate::config::{FIELD_PRIME, KEY_LENGTH, MAX_GENERATION_DRAWS};
use crate::error::KeyError;
use crate::identity::{PrivateKey, PublicKey};

/// Range-check a big-endian scalar against `(0, n)`.
///
/// Rejects zero and anything at or above the group order. No reduction
/// mod `n` is performed: out-of-range input is an error, not a different
/// key.
pub fn validate_scalar(bytes: &[u8; KEY_LENGTH]) -> Result<PrivateKey, KeyError> {
    to_nonzero_scalar(bytes)?;
    Ok(PrivateKey::from_validated(*bytes))
}

/// Compute the x-only public key for `private`.
///
/// Deterministic. The range check is repeated here because a
/// `PrivateKey` is the only thing this function trusts, and callers that
/// decoded bytes themselves may not have gone through [`validate_scalar`].
pub fn derive_public(private: &PrivateKey) -> Result<PublicKey, KeyError> {
    let scalar = to_nonzero_scalar(private.as_bytes())?;
    let point = AffinePoint::from(ProjectivePoint::GENERATOR * *scalar);

    let mut x = [0u8; KEY_LENGTH];
    x.copy_from_slice(&point.x());
    Ok(PublicKey::from_validated(x))
}

/// Check that `x` is the x-coordinate of some secp256k1 point.
///
/// That holds exactly when `x < p` and `x³ + 7` is a quadratic residue
/// mod `p`. Decompression computes the square root and fails when there
/// is none.
pub fn lift_x(x: &[u8; KEY_LENGTH]) -> Result<PublicKey, KeyError> {
    if x >= &FIELD_PRIME {
        return Err(KeyError::Curve);
    }

    let x_bytes = FieldBytes::from(*x);
    let point: Option<AffinePoint> = AffinePoint::decompress(&x_bytes, Choice::from(0)).into();
    match point {
        Some(_) => Ok(PublicKey::from_validated(*x)),
        None => Err(KeyError::Curve),
    }
}

/// Draw scalars from `source` until one is in range.
///
/// One draw almost always suffices: the chance that 32 uniform bytes are
/// zero or `>= n` is below 2^-127. The loop still has to exist, and it is
/// bounded by [`MAX_GENERATION_DRAWS`] so a stuck source reports an
/// entropy error instead of hanging.
pub fn generate_scalar(source: &impl EntropySource) -> Result<PrivateKey, KeyError> {
    for _ in 0..MAX_GENERATION_DRAWS {
        let candidate = random_bytes::<KEY_LENGTH>(source)?;
        match validate_scalar(&candidate) {
            Ok(private) => return Ok(private),
            Err(KeyError::Range) => continue,
            Err(other) => return Err(other),
        }
    }
    Err(KeyError::Entropy(format!(
        "no valid scalar after {MAX_GENERATION_DRAWS} draws"
    )))
}

fn to_nonzero_scalar(bytes: &[u8; KEY_LENGTH]) -> Result<NonZeroScalar, KeyError> {
    let repr = FieldBytes::from(*bytes);
    Option::from(NonZeroScalar::from_repr(repr)).ok_or(KeyError::Range)
}
