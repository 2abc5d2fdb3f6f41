//! Property-based tests for the value objects and the field codec
//!
//! Verifies the invariants that must hold for all inputs: IPv4 validation
//! over the full octet space, codec round-trip, nonce freshness, and tamper
//! detection.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use proptest::prelude::*;

use infratrack::crypto::{EncryptionKey, FieldCodec};
use infratrack::domain::IpAddress;

fn test_codec() -> FieldCodec {
    FieldCodec::new(EncryptionKey::from_bytes([0x5A; 32])).unwrap()
}

proptest! {
    #[test]
    fn valid_octets_always_accepted(a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255) {
        let input = format!("{a}.{b}.{c}.{d}");
        let ip = IpAddress::new(&input).unwrap();
        // The exact input string is preserved
        prop_assert_eq!(ip.as_str(), input.as_str());
    }

    #[test]
    fn out_of_range_octet_always_rejected(
        a in 0u8..=255,
        b in 0u8..=255,
        c in 0u8..=255,
        bad in 256u32..=9999,
    ) {
        let trailing_bad = format!("{a}.{b}.{c}.{bad}");
        let leading_bad = format!("{bad}.{a}.{b}.{c}");
        prop_assert!(IpAddress::new(trailing_bad).is_err());
        prop_assert!(IpAddress::new(leading_bad).is_err());
    }

    #[test]
    fn wrong_segment_count_always_rejected(octets in prop::collection::vec(0u8..=255, 1..=7)) {
        prop_assume!(octets.len() != 4);
        let input = octets
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(".");
        prop_assert!(IpAddress::new(input).is_err());
    }

    #[test]
    fn codec_round_trip(plaintext in ".*") {
        let codec = test_codec();
        let blob = codec.encrypt(&plaintext).unwrap();
        prop_assert_eq!(codec.decrypt(&blob).unwrap(), plaintext);
    }

    #[test]
    fn repeated_encryption_yields_distinct_blobs(plaintext in ".*") {
        let codec = test_codec();
        let a = codec.encrypt(&plaintext).unwrap();
        let b = codec.encrypt(&plaintext).unwrap();
        // Independent random nonces: the blobs never collide
        prop_assert_ne!(a, b);
    }

    #[test]
    fn single_byte_tamper_always_detected(
        plaintext in ".*",
        index in any::<prop::sample::Index>(),
    ) {
        let codec = test_codec();
        let blob = codec.encrypt(&plaintext).unwrap();

        let mut raw = BASE64.decode(&blob).unwrap();
        let i = index.index(raw.len());
        raw[i] ^= 0x01;

        prop_assert!(codec.decrypt(&BASE64.encode(&raw)).is_err());
    }
}
