//! `MlDsaPrivateKey` - Typed private key material.
//!
//! This module provides the `MlDsaPrivateKey` type, which holds the seed
//! and/or expanded private key of one variant (and optionally its public key)
//! and converts to and from PKCS#8 private key payloads.
//!
//! Deriving the expanded key from a seed is the signature implementation's
//! job; this type only stores what it is given or what a payload carried.

use core::fmt::{self, Debug};
use core::marker::PhantomData;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::core::config::{CodecConfig, SeedPolicy};
use crate::core::error::{CodecError, CodecResult};
use crate::core::operations::private_key::{
    ct_eq_optional, decode_private_key, encode_private_key, encoded_private_key_len,
    DecodedPrivateKey, KeySource, PrivateKeyInfo,
};
use crate::core::params::{ParameterSet, SEED_BYTES};
use crate::core::types::MlDsaPublicKey;
use crate::core::variant::MlDsaVariant;

/// ML-DSA private key material of a fixed variant.
///
/// Holds a seed, an expanded private key, or both; an optional public key
/// may be attached for the legacy combined layout.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key material
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use mldsa_keyfmt::core::config::CodecConfig;
/// use mldsa_keyfmt::core::types::MlDsaPrivateKey;
/// use mldsa_keyfmt::core::variant::MlDsa44;
///
/// let key = MlDsaPrivateKey::<MlDsa44>::with_seed_and_expanded([7u8; 32], &[1u8; 2560])
///     .unwrap();
///
/// let config = CodecConfig::default().with_output_formats("seed-only");
/// let payload = key.to_pkcs8_payload(&config).unwrap();
/// assert_eq!(payload.len(), 34);
///
/// let decoded =
///     MlDsaPrivateKey::<MlDsa44>::from_pkcs8_payload(&payload, &CodecConfig::default()).unwrap();
/// assert_eq!(decoded.seed(), Some(&[7u8; 32]));
/// assert!(decoded.private_key().is_none());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlDsaPrivateKey<V: MlDsaVariant> {
    seed: Option<[u8; SEED_BYTES]>,
    private_key: Option<Vec<u8>>,
    public_key: Option<Vec<u8>>,
    #[zeroize(skip)]
    policy: SeedPolicy,
    #[zeroize(skip)]
    _variant: PhantomData<V>,
}

impl<V: MlDsaVariant> MlDsaPrivateKey<V> {
    /// Creates a key from an expanded private key alone.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidKeyLength` unless `private_key` is exactly
    /// `V::PRIVATE_KEY_SIZE` bytes.
    pub fn from_expanded(private_key: &[u8]) -> CodecResult<Self> {
        let private_key = Self::checked(private_key, V::PRIVATE_KEY_SIZE)?;
        Ok(Self::from_parts(None, Some(private_key.to_vec())))
    }

    /// Creates a key from a seed alone.
    ///
    /// Such a key can only be written in seed-carrying layouts once the
    /// expanded key is attached, since every layout needs the expanded key
    /// as input.
    #[must_use]
    pub fn from_seed(seed: [u8; SEED_BYTES]) -> Self {
        Self::from_parts(Some(seed), None)
    }

    /// Creates a key from a seed and the expanded key derived from it.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidKeyLength` if `private_key` has the wrong size.
    pub fn with_seed_and_expanded(
        seed: [u8; SEED_BYTES],
        private_key: &[u8],
    ) -> CodecResult<Self> {
        let private_key = Self::checked(private_key, V::PRIVATE_KEY_SIZE)?;
        Ok(Self::from_parts(Some(seed), Some(private_key.to_vec())))
    }

    /// Attaches the expanded private key, e.g. after deriving it from the seed.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidKeyLength` if `private_key` has the wrong size.
    pub fn with_expanded(mut self, private_key: &[u8]) -> CodecResult<Self> {
        let private_key = Self::checked(private_key, V::PRIVATE_KEY_SIZE)?;
        if let Some(old) = self.private_key.as_mut() {
            old.zeroize();
        }
        self.private_key = Some(private_key.to_vec());
        Ok(self)
    }

    /// Attaches the raw public key.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidKeyLength` if `public_key` has the wrong size.
    pub fn with_public_key(mut self, public_key: &[u8]) -> CodecResult<Self> {
        let public_key = Self::checked(public_key, V::PUBLIC_KEY_SIZE)?;
        self.public_key = Some(public_key.to_vec());
        Ok(self)
    }

    /// Decodes a `PrivateKeyInfo` if it belongs to this variant.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the algorithm identifier is not this variant's.
    ///
    /// # Errors
    ///
    /// See [`decode_private_key`].
    pub fn from_private_key_info(
        info: &PrivateKeyInfo<'_>,
        config: &CodecConfig,
    ) -> CodecResult<Option<Self>> {
        decode_private_key(V::parameter_set(), info, config)?
            .map(|decoded| Self::from_decoded(&decoded))
            .transpose()
    }

    /// Decodes a bare PKCS#8 private key payload of this variant.
    ///
    /// # Errors
    ///
    /// See [`decode_private_key`].
    pub fn from_pkcs8_payload(payload: &[u8], config: &CodecConfig) -> CodecResult<Self> {
        let info = PrivateKeyInfo::new(V::ALGORITHM, payload);
        Self::from_private_key_info(&info, config)?.ok_or(CodecError::BadEncoding {
            algorithm: V::parameter_set().name,
        })
    }

    /// Builds a key from decoded material, applying its seed policy.
    ///
    /// With `retain_seed` off the seed is dropped whenever an expanded key is
    /// available.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::BadEncoding` if the material was decoded for a
    /// different variant.
    pub fn from_decoded(decoded: &DecodedPrivateKey) -> CodecResult<Self> {
        let params = V::parameter_set();
        if decoded.parameter_set().algorithm != V::ALGORITHM {
            return Err(CodecError::BadEncoding {
                algorithm: params.name,
            });
        }

        let policy = decoded.seed_policy();
        let material = decoded.material();
        let private_key = material.private_key().map(<[u8]>::to_vec);
        let seed = match (material.seed(), &private_key) {
            (Some(_), Some(_)) if !policy.retain_seed => None,
            (seed, _) => seed.copied(),
        };

        let mut key = Self::from_parts(seed, private_key);
        key.policy = policy;
        Ok(key)
    }

    /// Encodes the key as a PKCS#8 private key payload.
    ///
    /// # Errors
    ///
    /// See [`encode_private_key`].
    pub fn to_pkcs8_payload(&self, config: &CodecConfig) -> CodecResult<Zeroizing<Vec<u8>>> {
        encode_private_key(self, config)
    }

    /// Length of the payload [`Self::to_pkcs8_payload`] would produce.
    ///
    /// # Errors
    ///
    /// See [`encoded_private_key_len`].
    pub fn pkcs8_payload_len(&self, config: &CodecConfig) -> CodecResult<usize> {
        encoded_private_key_len(self, config)
    }

    /// The seed, if retained.
    #[must_use]
    pub fn seed(&self) -> Option<&[u8; SEED_BYTES]> {
        self.seed.as_ref()
    }

    /// The expanded private key, if present.
    #[must_use]
    pub fn private_key(&self) -> Option<&[u8]> {
        self.private_key.as_deref()
    }

    /// The attached public key, if any.
    #[must_use]
    pub fn public_key(&self) -> Option<MlDsaPublicKey<V>> {
        self.public_key
            .as_deref()
            .and_then(|raw| MlDsaPublicKey::from_raw(raw).ok())
    }

    /// Seed flags this key was loaded with.
    #[must_use]
    pub fn seed_policy(&self) -> SeedPolicy {
        self.policy
    }

    fn from_parts(seed: Option<[u8; SEED_BYTES]>, private_key: Option<Vec<u8>>) -> Self {
        Self {
            seed,
            private_key,
            public_key: None,
            policy: SeedPolicy::default(),
            _variant: PhantomData,
        }
    }

    fn checked(bytes: &[u8], expected: usize) -> CodecResult<&[u8]> {
        if bytes.len() == expected {
            Ok(bytes)
        } else {
            Err(CodecError::InvalidKeyLength {
                algorithm: V::parameter_set().name,
                expected,
                actual: bytes.len(),
            })
        }
    }
}

impl<V: MlDsaVariant> KeySource for MlDsaPrivateKey<V> {
    fn parameter_set(&self) -> &'static ParameterSet {
        V::parameter_set()
    }

    fn seed(&self) -> Option<&[u8]> {
        self.seed.as_ref().map(|seed| seed.as_slice())
    }

    fn private_key(&self) -> Option<&[u8]> {
        self.private_key.as_deref()
    }

    fn public_key(&self) -> Option<&[u8]> {
        self.public_key.as_deref()
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl<V: MlDsaVariant> Debug for MlDsaPrivateKey<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MlDsaPrivateKey")
            .field("variant", &V::ALGORITHM.name())
            .field("seed", &self.seed.as_ref().map(|_| "[REDACTED]"))
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .field("has_public_key", &self.public_key.is_some())
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl<V: MlDsaVariant> PartialEq for MlDsaPrivateKey<V> {
    fn eq(&self, other: &Self) -> bool {
        let seeds = ct_eq_optional(KeySource::seed(self), KeySource::seed(other));
        let keys = ct_eq_optional(self.private_key(), other.private_key());
        seeds & keys
    }
}

impl<V: MlDsaVariant> Eq for MlDsaPrivateKey<V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operations::public_key::public_key_bytes;
    use crate::core::variant::{MlDsa44, MlDsa65, MlDsa87};

    const FORMATS: [&str; 6] = [
        "seed-priv",
        "priv-only",
        "legacy-combined",
        "seed-only",
        "bare-priv",
        "bare-seed",
    ];

    fn full_key<V: MlDsaVariant>() -> MlDsaPrivateKey<V> {
        let seed: [u8; SEED_BYTES] = core::array::from_fn(|i| i as u8 ^ 0x5a);
        let private_key: Vec<u8> = (0..V::PRIVATE_KEY_SIZE).map(|i| (i % 241) as u8).collect();
        let public_key: Vec<u8> = (0..V::PUBLIC_KEY_SIZE).map(|i| (i % 229) as u8).collect();
        MlDsaPrivateKey::<V>::with_seed_and_expanded(seed, &private_key)
            .and_then(|key| key.with_public_key(&public_key))
            .expect("sized key")
    }

    fn roundtrip_all_formats<V: MlDsaVariant>() -> CodecResult<()> {
        let key = full_key::<V>();
        for name in FORMATS {
            let config = CodecConfig::default()
                .with_input_formats(name)
                .with_output_formats(name);
            let payload = key.to_pkcs8_payload(&config)?;
            assert_eq!(payload.len(), key.pkcs8_payload_len(&config)?, "{name}");

            let decoded = MlDsaPrivateKey::<V>::from_pkcs8_payload(&payload, &config)?;
            if name.contains("seed") {
                assert_eq!(decoded.seed(), key.seed(), "{name}");
            } else {
                assert!(decoded.seed().is_none(), "{name}");
            }
            if name.contains("seed-only") || name == "bare-seed" {
                assert!(decoded.private_key().is_none(), "{name}");
            } else {
                assert_eq!(decoded.private_key(), key.private_key(), "{name}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_roundtrip_ml_dsa_44() -> CodecResult<()> {
        roundtrip_all_formats::<MlDsa44>()
    }

    #[test]
    fn test_roundtrip_ml_dsa_65() -> CodecResult<()> {
        roundtrip_all_formats::<MlDsa65>()
    }

    #[test]
    fn test_roundtrip_ml_dsa_87() -> CodecResult<()> {
        roundtrip_all_formats::<MlDsa87>()
    }

    #[test]
    fn test_reencode_in_other_format() -> CodecResult<()> {
        let key = full_key::<MlDsa65>();
        let legacy_config = CodecConfig::default().with_output_formats("oqskeypair");
        let legacy = key.to_pkcs8_payload(&legacy_config)?;

        let decoded =
            MlDsaPrivateKey::<MlDsa65>::from_pkcs8_payload(&legacy, &CodecConfig::default())?;
        assert!(decoded.seed().is_none());

        let bare_config = CodecConfig::default().with_output_formats("bare-priv");
        let bare = decoded.to_pkcs8_payload(&bare_config)?;
        assert_eq!(bare.as_slice(), key.private_key().unwrap_or_default());
        Ok(())
    }

    #[test]
    fn test_retain_seed_off_drops_seed() -> CodecResult<()> {
        let key = full_key::<MlDsa44>();
        let payload = key.to_pkcs8_payload(&CodecConfig::default())?;

        let config = CodecConfig::default().with_retain_seed(false);
        let decoded = MlDsaPrivateKey::<MlDsa44>::from_pkcs8_payload(&payload, &config)?;
        assert!(decoded.seed().is_none());
        assert!(decoded.private_key().is_some());
        assert!(!decoded.seed_policy().retain_seed);

        // Nothing to fall back on: the seed stays.
        let seed_only_config = CodecConfig::default().with_output_formats("seed-only");
        let seed_only = key.to_pkcs8_payload(&seed_only_config)?;
        let decoded = MlDsaPrivateKey::<MlDsa44>::from_pkcs8_payload(&seed_only, &config)?;
        assert_eq!(decoded.seed(), key.seed());
        Ok(())
    }

    #[test]
    fn test_other_variant_info() -> CodecResult<()> {
        let payload = full_key::<MlDsa44>().to_pkcs8_payload(&CodecConfig::default())?;
        let info = PrivateKeyInfo::new(MlDsa44::ALGORITHM, &payload);
        let result =
            MlDsaPrivateKey::<MlDsa87>::from_private_key_info(&info, &CodecConfig::default())?;
        assert!(result.is_none());
        Ok(())
    }

    #[test]
    fn test_seed_only_key_cannot_encode() {
        let key = MlDsaPrivateKey::<MlDsa44>::from_seed([1; SEED_BYTES]);
        assert_eq!(
            key.pkcs8_payload_len(&CodecConfig::default()),
            Err(CodecError::NotAPrivateKey {
                algorithm: "ML-DSA-44"
            })
        );
        let key = key.with_expanded(&[2; 2560]);
        assert!(key.is_ok());
    }

    #[test]
    fn test_public_key_attached() -> CodecResult<()> {
        let key = full_key::<MlDsa87>();
        let public = key.public_key().expect("attached");
        assert_eq!(public_key_bytes(&key)?, public.as_bytes());

        let bare = MlDsaPrivateKey::<MlDsa87>::from_expanded(&[0; 4896])?;
        assert!(bare.public_key().is_none());
        assert!(matches!(
            public_key_bytes(&bare),
            Err(CodecError::NotAPublicKey { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = full_key::<MlDsa44>();
        let debug_str = format!("{key:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(debug_str.contains("ML-DSA-44"));
        assert!(!debug_str.contains("5a"));
    }

    #[test]
    fn test_equality() -> CodecResult<()> {
        let a = full_key::<MlDsa44>();
        let b = a.clone();
        assert_eq!(a, b);

        let c = MlDsaPrivateKey::<MlDsa44>::from_expanded(a.private_key().unwrap_or_default())?;
        assert_ne!(a, c);
        Ok(())
    }
}
