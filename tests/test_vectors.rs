//! Integration tests driven by the JSON vectors under `tests/vectors`.
//!
//! Every layout of every variant is encoded, checked byte-for-byte at its
//! fixed header offsets, then decoded with all input layouts enabled.

// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod vectors;

use std::path::PathBuf;

use mldsa_keyfmt::core::operations::private_key::{
    decode_private_key, encode_private_key, encoded_private_key_len, KeySource, PrivateKeyInfo,
};
use mldsa_keyfmt::core::operations::public_key::{
    decode_public_key, detect_public_key, encode_public_key,
};
use mldsa_keyfmt::{CodecConfig, CodecError, ParameterSet};
use vectors::*;

/// Get the path to the test vectors directory.
fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

fn parameter_set(name: &str) -> &'static ParameterSet {
    ParameterSet::by_name(name).unwrap_or_else(|| panic!("unknown algorithm {name}"))
}

struct VectorKey {
    params: &'static ParameterSet,
    seed: Vec<u8>,
    private_key: Vec<u8>,
    public_key: Vec<u8>,
}

impl KeySource for VectorKey {
    fn parameter_set(&self) -> &'static ParameterSet {
        self.params
    }

    fn seed(&self) -> Option<&[u8]> {
        Some(&self.seed)
    }

    fn private_key(&self) -> Option<&[u8]> {
        Some(&self.private_key)
    }

    fn public_key(&self) -> Option<&[u8]> {
        Some(&self.public_key)
    }
}

#[test]
fn test_private_key_encode_vectors() {
    let path = vectors_dir().join("ml-dsa-private-encode.json");
    let suite: TestVectorSuite<PrivateEncodeVector> =
        load_vectors(path.to_str().expect("valid path"));
    assert_eq!(suite.tests.len(), 18);

    for test in suite.tests {
        assert!(!test.expect_fail);
        let params = parameter_set(&test.algorithm);
        let key = VectorKey {
            params,
            seed: hex_decode(&test.seed).expect("valid hex"),
            private_key: vec![test.private_fill; params.private_len],
            public_key: vec![test.public_fill; params.public_len],
        };

        let config = CodecConfig::default().with_output_formats(test.output_formats.as_str());
        let payload = encode_private_key(&key, &config)
            .unwrap_or_else(|e| panic!("Test '{}' encoding failed: {e}", test.name));
        assert_eq!(payload.len(), test.length, "Test '{}' length", test.name);
        assert_eq!(
            encoded_private_key_len(&key, &config),
            Ok(test.length),
            "Test '{}' length-only encoding",
            test.name
        );

        for header in &test.headers {
            let expected = hex_decode(&header.hex).expect("valid hex");
            assert_eq!(
                &payload[header.offset..header.offset + expected.len()],
                expected.as_slice(),
                "Test '{}' header at {}",
                test.name,
                header.offset
            );
        }
        if let Some(offset) = test.seed_offset {
            assert_eq!(&payload[offset..offset + 32], key.seed.as_slice(), "{}", test.name);
        }
        if let Some(offset) = test.private_offset {
            let end = offset + params.private_len;
            assert_eq!(&payload[offset..end], key.private_key.as_slice(), "{}", test.name);
        }
        if let Some(offset) = test.public_offset {
            assert_eq!(&payload[offset..], key.public_key.as_slice(), "{}", test.name);
        }

        // Decode with every layout enabled: the length and tag alone must
        // single out the layout that was written.
        let info = PrivateKeyInfo::new(params.algorithm, &payload);
        let decoded = decode_private_key(params, &info, &CodecConfig::default())
            .unwrap_or_else(|e| panic!("Test '{}' decoding failed: {e}", test.name))
            .expect("own algorithm identifier");
        assert_eq!(decoded.format().name, test.format, "Test '{}' format", test.name);
        assert_eq!(
            decoded.material().seed().map(|s| s.to_vec()),
            test.seed_offset.map(|_| key.seed.clone()),
            "Test '{}' seed",
            test.name
        );
        assert_eq!(
            decoded.material().private_key(),
            test.private_offset.map(|_| key.private_key.as_slice()),
            "Test '{}' private key",
            test.name
        );
    }
}

#[test]
fn test_private_key_decode_fail_vectors() {
    let path = vectors_dir().join("ml-dsa-private-decode-fail.json");
    let suite: TestVectorSuite<PrivateDecodeFailVector> =
        load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        assert!(test.expect_fail);
        let params = parameter_set(&test.algorithm);
        let payload = padded(&hex_decode(&test.prefix).expect("valid hex"), test.length);
        let oid = test
            .oid
            .as_deref()
            .map(|oid| hex_decode(oid).expect("valid hex"))
            .unwrap_or_else(|| params.algorithm.oid_der().to_vec());
        let info = PrivateKeyInfo {
            algorithm: &oid,
            has_parameters: test.parameters,
            payload: &payload,
        };
        let config = CodecConfig {
            input_formats: test.input_formats.clone(),
            ..CodecConfig::default()
        };

        let result = decode_private_key(params, &info, &config);
        let matches = match test.error.as_str() {
            "bad-encoding" => matches!(result, Err(CodecError::BadEncoding { .. })),
            "no-format-enabled" => matches!(result, Err(CodecError::NoFormatEnabled { .. })),
            "unexpected-parameters" => {
                matches!(result, Err(CodecError::UnexpectedParameters { .. }))
            }
            "not-this-key-type" => matches!(result, Ok(None)),
            other => panic!("Test '{}' has unknown error kind {other}", test.name),
        };
        assert!(matches, "Test '{}' expected {}, got {result:?}", test.name, test.error);
    }
}

#[test]
fn test_public_key_vectors() {
    let path = vectors_dir().join("ml-dsa-public.json");
    let suite: TestVectorSuite<PublicVector> = load_vectors(path.to_str().expect("valid path"));

    for test in suite.tests {
        let params = parameter_set(&test.algorithm);
        let prefix = hex_decode(&test.prefix).expect("valid hex");
        let raw = vec![0xc3; params.public_len];

        let spki = encode_public_key(Some(&raw), params)
            .unwrap_or_else(|e| panic!("Test '{}' encoding failed: {e}", test.name));
        assert_eq!(spki.len(), test.length, "Test '{}' length", test.name);
        assert_eq!(&spki[..prefix.len()], prefix.as_slice(), "Test '{}' prefix", test.name);

        assert_eq!(decode_public_key(&spki, params), Some(raw.as_slice()));
        let (detected, _) = detect_public_key(&spki).expect("recognized");
        assert_eq!(detected.name, test.algorithm);

        // Every other variant treats the envelope as a clean non-match.
        for other in ParameterSet::all() {
            if other.algorithm != params.algorithm {
                assert!(decode_public_key(&spki, other).is_none(), "{}", test.name);
            }
        }
    }
}

#[test]
fn test_reencode_across_layouts() {
    // Decode every layout that carries the expanded key and write it back as
    // every other such layout.
    let params = parameter_set("ML-DSA-65");
    let source = VectorKey {
        params,
        seed: (0..32).collect(),
        private_key: vec![0x3e; params.private_len],
        public_key: vec![0x71; params.public_len],
    };

    for from in ["seed-priv", "priv-only", "legacy-combined", "bare-priv"] {
        let config = CodecConfig::default().with_output_formats(from);
        let payload = encode_private_key(&source, &config).expect("encode");
        let info = PrivateKeyInfo::new(params.algorithm, &payload);
        let decoded = decode_private_key(params, &info, &CodecConfig::default())
            .expect("decode")
            .expect("own identifier");

        let reloaded = VectorKey {
            params,
            seed: decoded
                .material()
                .seed()
                .map(|s| s.to_vec())
                .unwrap_or_else(|| source.seed.clone()),
            private_key: decoded.material().private_key().expect("expanded key").to_vec(),
            public_key: source.public_key.clone(),
        };
        for to in ["seed-priv", "priv-only", "legacy-combined", "bare-priv"] {
            let config = CodecConfig::default().with_output_formats(to);
            let original = encode_private_key(&source, &config).expect("encode");
            let again = encode_private_key(&reloaded, &config).expect("re-encode");
            assert_eq!(original.as_slice(), again.as_slice(), "{from} -> {to}");
        }
    }
}
