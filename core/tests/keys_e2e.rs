//! End-to-end tests for key generation, encoding, and validation.
//!
//! These go through the public API only, the same way the CLI does. Each
//! test stands alone: no shared keys, no ordering dependencies.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use nostress_core::codec::{decode_hex, decode_prefixed, encode_hex, encode_prefixed};
use nostress_core::config::{CURVE_ORDER, KEY_LENGTH, MAX_GENERATION_DRAWS};
use nostress_core::crypto::{derive_public, lift_x, EntropySource, OsEntropy};
use nostress_core::{
    validate, Encoding, ErrorKind, ExpectedKind, KeyError, KeyKind, KeyPair, PublicKey,
    ValidatedKey,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Replays a fixed list of 32-byte draws, then fails.
struct ScriptedEntropy {
    draws: Mutex<VecDeque<[u8; KEY_LENGTH]>>,
}

impl ScriptedEntropy {
    fn new(draws: impl IntoIterator<Item = [u8; KEY_LENGTH]>) -> Self {
        Self {
            draws: Mutex::new(draws.into_iter().collect()),
        }
    }

    fn remaining(&self) -> usize {
        self.draws.lock().len()
    }
}

impl EntropySource for ScriptedEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), KeyError> {
        let next = self
            .draws
            .lock()
            .pop_front()
            .ok_or_else(|| KeyError::Entropy("script exhausted".into()))?;
        dest.copy_from_slice(&next[..dest.len()]);
        Ok(())
    }
}

/// Always returns the same bytes.
struct StuckEntropy([u8; KEY_LENGTH]);

impl EntropySource for StuckEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), KeyError> {
        dest.copy_from_slice(&self.0[..dest.len()]);
        Ok(())
    }
}

fn scalar_one() -> [u8; KEY_LENGTH] {
    let mut k = [0u8; KEY_LENGTH];
    k[KEY_LENGTH - 1] = 1;
    k
}

// ---------------------------------------------------------------------------
// 1. Generation
// ---------------------------------------------------------------------------

#[test]
fn thousand_generations_are_distinct_and_on_curve() {
    let mut seen = HashSet::new();
    for _ in 0..1_000 {
        let kp = KeyPair::generate().unwrap();
        assert!(seen.insert(*kp.private_key().as_bytes()));
        assert_eq!(&lift_x(kp.public_key().as_bytes()).unwrap(), kp.public_key());
        assert_eq!(&derive_public(kp.private_key()).unwrap(), kp.public_key());
    }
    assert_eq!(seen.len(), 1_000);
}

#[test]
fn generation_rerolls_out_of_range_draws() {
    let source = ScriptedEntropy::new([[0u8; KEY_LENGTH], CURVE_ORDER, scalar_one()]);
    let kp = KeyPair::generate_with(&source).unwrap();

    assert_eq!(kp.private_key().as_bytes(), &scalar_one());
    assert_eq!(
        kp.public_key().to_hex(),
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    );
    assert_eq!(source.remaining(), 0);
}

#[test]
fn generation_surfaces_entropy_failure() {
    let source = ScriptedEntropy::new([]);
    let err = KeyPair::generate_with(&source).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Entropy);
}

#[test]
fn generation_gives_up_on_a_stuck_source() {
    let source = StuckEntropy([0u8; KEY_LENGTH]);
    let err = KeyPair::generate_with(&source).unwrap_err();
    assert!(matches!(err, KeyError::Entropy(ref msg) if msg.contains(&MAX_GENERATION_DRAWS.to_string())));
}

#[test]
fn concurrent_generation_shares_one_source() {
    let source = Arc::new(OsEntropy);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let source = Arc::clone(&source);
            std::thread::spawn(move || {
                (0..25)
                    .map(|_| {
                        *KeyPair::generate_with(source.as_ref())
                            .unwrap()
                            .public_key()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = HashSet::new();
    for h in handles {
        all.extend(h.join().unwrap());
    }
    assert_eq!(all.len(), 200);
}

// ---------------------------------------------------------------------------
// 2. Encoding Cycles
// ---------------------------------------------------------------------------

#[test]
fn full_encode_decode_reencode_cycle() {
    let kp = KeyPair::generate().unwrap();

    let hex = kp.to_encoding(Encoding::Hex);
    let prefixed = kp.to_encoding(Encoding::Prefixed);

    // Private half, both forms.
    let from_hex = KeyPair::from_private_hex(&hex.private_key).unwrap();
    let from_nsec = KeyPair::from_private_prefixed(&prefixed.private_key).unwrap();
    assert_eq!(from_hex.private_key().as_bytes(), kp.private_key().as_bytes());
    assert_eq!(from_nsec.private_key().as_bytes(), kp.private_key().as_bytes());

    // Public half, both forms.
    let pk_hex = PublicKey::from_hex(&hex.public_key).unwrap();
    let pk_npub = PublicKey::from_prefixed(&prefixed.public_key).unwrap();
    assert_eq!(&pk_hex, kp.public_key());
    assert_eq!(&pk_npub, kp.public_key());

    // Re-encoding is byte-identical.
    assert_eq!(from_hex.to_encoding(Encoding::Hex), hex);
    assert_eq!(from_nsec.to_encoding(Encoding::Prefixed), prefixed);
    assert_eq!(pk_hex.to_prefixed(), prefixed.public_key);
    assert_eq!(pk_npub.to_hex(), hex.public_key);
}

#[test]
fn cross_conversion_between_forms() {
    let kp = KeyPair::generate().unwrap();
    let nsec = kp.private_key().to_prefixed();

    let (kind, bytes) = decode_prefixed(&nsec).unwrap();
    assert_eq!(kind, KeyKind::Private);
    let as_hex = encode_hex(&bytes);
    assert_eq!(as_hex, kp.private_key().to_hex());

    let back = encode_prefixed(KeyKind::Private, &decode_hex(&as_hex).unwrap());
    assert_eq!(back, nsec);
}

// ---------------------------------------------------------------------------
// 3. Rejection Table
// ---------------------------------------------------------------------------

#[test]
fn format_rejection_table() {
    let cases: Vec<(String, ErrorKind)> = vec![
        (String::new(), ErrorKind::Format),
        ("too_short".into(), ErrorKind::Format),
        ("g".repeat(64), ErrorKind::Format),
        ("a".repeat(63), ErrorKind::Format),
        ("a".repeat(65), ErrorKind::Format),
    ];
    for (input, kind) in &cases {
        let err = KeyPair::from_private_hex(input).unwrap_err();
        assert_eq!(err.kind(), *kind, "from_private_hex({input:?})");
        let err = PublicKey::from_hex(input).unwrap_err();
        assert_eq!(err.kind(), *kind, "public_from_hex({input:?})");
    }

    assert_eq!(
        KeyPair::from_private_prefixed("nsec1").unwrap_err().kind(),
        ErrorKind::Format
    );

    let npub = KeyPair::generate().unwrap().public_key().to_prefixed();
    assert_eq!(
        KeyPair::from_private_prefixed(&npub).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn range_and_curve_rejections() {
    assert_eq!(
        KeyPair::from_private_bytes(&[0u8; KEY_LENGTH])
            .unwrap_err()
            .kind(),
        ErrorKind::Range
    );
    assert_eq!(
        KeyPair::from_private_bytes(&CURVE_ORDER).unwrap_err().kind(),
        ErrorKind::Range
    );

    let off_curve = "eefdea4cdb677750a420fee807eacf21eb9898ae79b9768766e4faa04a2d4a34";
    assert_eq!(
        PublicKey::from_hex(off_curve).unwrap_err().kind(),
        ErrorKind::Curve
    );
}

// ---------------------------------------------------------------------------
// 4. Validation
// ---------------------------------------------------------------------------

#[test]
fn validate_every_generated_form() {
    let kp = KeyPair::generate().unwrap();

    let nsec = kp.private_key().to_prefixed();
    let npub = kp.public_key().to_prefixed();
    let pub_hex = kp.public_key().to_hex();

    match validate(&nsec, ExpectedKind::Private).unwrap() {
        ValidatedKey::Private { keypair, encoding } => {
            assert_eq!(keypair, kp);
            assert_eq!(encoding, Encoding::Prefixed);
        }
        other => panic!("unexpected {other:?}"),
    }

    match validate(&npub, ExpectedKind::Public).unwrap() {
        ValidatedKey::Public { public_key, .. } => assert_eq!(&public_key, kp.public_key()),
        other => panic!("unexpected {other:?}"),
    }

    // A derived public key is always on the curve, so as Auto it is at least
    // a public key; it may also be a valid scalar.
    let v = validate(&pub_hex, ExpectedKind::Auto).unwrap();
    assert_ne!(v.kind(), Some(KeyKind::Private));
    assert_eq!(v.encoding(), Encoding::Hex);

    assert_eq!(
        validate(&npub, ExpectedKind::Private).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
    assert_eq!(
        validate(&nsec, ExpectedKind::Public).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn validate_auto_reports_format_for_garbage() {
    for bad in ["", "too_short", "not a key at all", "nsec"] {
        let err = validate(bad, ExpectedKind::Auto).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format, "input {bad:?}");
    }
}
