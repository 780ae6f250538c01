#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::codec::{decode_hex, decode_prefixed, encode_hex, encode_prefixed, KeyKind};
    use crate::crypto::{derive_public, lift_x, validate_scalar};
    use crate::identity::KeyPair;

    fn any_kind() -> impl Strategy<Value = KeyKind> {
        prop_oneof![Just(KeyKind::Private), Just(KeyKind::Public)]
    }

    proptest! {
        #[test]
        fn hex_round_trip(bytes in any::<[u8; 32]>()) {
            let encoded = encode_hex(&bytes);
            prop_assert_eq!(encoded.len(), 64);
            prop_assert_eq!(decode_hex(&encoded).unwrap(), bytes);
            prop_assert_eq!(decode_hex(&encoded.to_uppercase()).unwrap(), bytes);
        }

        #[test]
        fn prefixed_round_trip(kind in any_kind(), bytes in any::<[u8; 32]>()) {
            let encoded = encode_prefixed(kind, &bytes);
            prop_assert!(encoded.starts_with(kind.tag()));
            prop_assert_eq!(decode_prefixed(&encoded).unwrap(), (kind, bytes));
        }

        #[test]
        fn derivation_is_deterministic_and_on_curve(bytes in any::<[u8; 32]>()) {
            // Almost every 32-byte string is in range; skip the rest.
            if let Ok(private) = validate_scalar(&bytes) {
                let a = derive_public(&private).unwrap();
                let b = derive_public(&private).unwrap();
                prop_assert_eq!(a, b);
                prop_assert_eq!(lift_x(a.as_bytes()).unwrap(), a);
            }
        }

        #[test]
        fn keypair_reconstruction_matches(bytes in any::<[u8; 32]>()) {
            if let Ok(kp) = KeyPair::from_private_bytes(&bytes) {
                let from_hex = KeyPair::from_private_hex(&kp.private_key().to_hex()).unwrap();
                let from_nsec = KeyPair::from_private_prefixed(&kp.private_key().to_prefixed()).unwrap();
                prop_assert_eq!(from_hex.public_key(), kp.public_key());
                prop_assert_eq!(from_nsec.public_key(), kp.public_key());
            }
        }

        #[test]
        fn decoders_never_panic(s in ".{0,100}") {
            let _ = decode_hex(&s);
            let _ = decode_prefixed(&s);
            let _ = crate::validate(&s, crate::ExpectedKind::Auto);
        }
    }
}
