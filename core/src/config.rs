//! # Key Format Constants
//!
//! Every fixed number and literal that defines the key formats lives here.
//! The codec, the curve engine, and the tests all read from this module so
//! the formats cannot drift apart.

// ---------------------------------------------------------------------------
// Versioning
// ---------------------------------------------------------------------------

/// Version of this library, as published.
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Key Material
// ---------------------------------------------------------------------------

/// Length of a private scalar and of an x-only public key, in bytes.
pub const KEY_LENGTH: usize = 32;

/// Length of a hex-encoded key. Two characters per byte, no prefix.
pub const HEX_KEY_LENGTH: usize = KEY_LENGTH * 2;

/// The secp256k1 group order `n`, big-endian.
///
/// A private scalar must satisfy `0 < k < n`.
pub const CURVE_ORDER: [u8; KEY_LENGTH] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, //
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, //
    0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// The secp256k1 field prime `p`, big-endian.
///
/// Any x-coordinate `>= p` cannot be a field element, let alone a point.
pub const FIELD_PRIME: [u8; KEY_LENGTH] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Upper bound on entropy draws during key generation.
///
/// An honest source needs more than one draw with probability around
/// 2^-128. Hitting this bound means the source is returning garbage, and
/// generation fails with an entropy error instead of spinning forever.
pub const MAX_GENERATION_DRAWS: usize = 64;

// ---------------------------------------------------------------------------
// Prefixed Encoding
// ---------------------------------------------------------------------------

/// Tag for prefixed private keys.
pub const PRIVATE_KEY_TAG: &str = "nsec";

/// Tag for prefixed public keys.
pub const PUBLIC_KEY_TAG: &str = "npub";

/// Separator between the tag and the base-58 payload.
pub const PREFIX_SEPARATOR: char = '1';

/// Longest base-58 payload that can decode to [`KEY_LENGTH`] bytes.
///
/// `2^256 - 1` takes 44 digits, and each leading zero byte takes exactly
/// one `1`, so no 32-byte value needs more. Longer payloads are rejected
/// before any decoding work.
pub const MAX_PREFIXED_PAYLOAD_LENGTH: usize = 44;
