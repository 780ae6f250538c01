//! # Entropy Source
//!
//! The only place randomness enters the crate. Key generation asks an
//! [`EntropySource`] for bytes and never touches an RNG directly, so tests
//! can substitute a scripted source and production code always gets the
//! operating system CSPRNG.
//!
//! A failing source is fatal. There is no fallback to a weaker generator
//! and no internal retry: the error surfaces as [`KeyError::Entropy`].

use rand::rngs::OsRng;
use rand_core::RngCore;
use zeroize::Zeroizing;

use crate::error::KeyError;

/// A cryptographically secure byte source.
///
/// Implementations must be safe to call from several threads at once.
/// `fill_bytes` takes `&self` so one source can back concurrent
/// generation requests without external locking.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` entirely with random bytes, or fail.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), KeyError>;
}

/// The operating system CSPRNG (`getrandom` on Unix, `BCryptGenRandom`
/// on Windows).
///
/// Stateless: every call goes straight to the OS, which is what makes it
/// safe to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), KeyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| KeyError::Entropy(e.to_string()))
    }
}

/// Draw `N` bytes from `source` into a buffer that is wiped on drop.
pub fn random_bytes<const N: usize>(
    source: &impl EntropySource,
) -> Result<Zeroizing<[u8; N]>, KeyError> {
    let mut buf = Zeroizing::new([0u8; N]);
    source.fill_bytes(buf.as_mut_slice())?;
    Ok(buf)
}
