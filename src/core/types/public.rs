//! `MlDsaPublicKey` - Typed raw public key.
//!
//! This module provides the `MlDsaPublicKey` type, a raw public key tagged
//! with its variant, and its conversion to and from the
//! `SubjectPublicKeyInfo` envelope.

use core::fmt::{self, Debug};
use core::marker::PhantomData;

use crate::core::error::{CodecError, CodecResult};
use crate::core::operations::private_key::KeySource;
use crate::core::operations::public_key::{decode_public_key, encode_public_key};
use crate::core::params::ParameterSet;
use crate::core::variant::MlDsaVariant;

/// An ML-DSA public key of a fixed variant.
///
/// # Example
///
/// ```rust
/// use mldsa_keyfmt::core::types::MlDsaPublicKey;
/// use mldsa_keyfmt::core::variant::MlDsa44;
///
/// let key = MlDsaPublicKey::<MlDsa44>::from_raw(&[0u8; 1312]).unwrap();
/// let spki = key.to_spki().unwrap();
/// assert_eq!(spki.len(), 22 + 1312);
///
/// let parsed = MlDsaPublicKey::<MlDsa44>::try_from(spki.as_slice()).unwrap();
/// assert_eq!(parsed, key);
/// ```
#[derive(Clone)]
pub struct MlDsaPublicKey<V: MlDsaVariant> {
    key: Vec<u8>,
    _variant: PhantomData<V>,
}

impl<V: MlDsaVariant> MlDsaPublicKey<V> {
    /// Wraps raw public key bytes.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidKeyLength` unless `key` is exactly
    /// `V::PUBLIC_KEY_SIZE` bytes.
    pub fn from_raw(key: &[u8]) -> CodecResult<Self> {
        if key.len() != V::PUBLIC_KEY_SIZE {
            return Err(CodecError::InvalidKeyLength {
                algorithm: V::parameter_set().name,
                expected: V::PUBLIC_KEY_SIZE,
                actual: key.len(),
            });
        }
        Ok(Self::from_bytes_unchecked(key.to_vec()))
    }

    /// Extracts the key from an SPKI envelope.
    ///
    /// Returns `None` if the envelope is not one of this variant, so a caller
    /// can try other key types.
    #[must_use]
    pub fn from_spki(spki: &[u8]) -> Option<Self> {
        decode_public_key(spki, V::parameter_set())
            .map(|raw| Self::from_bytes_unchecked(raw.to_vec()))
    }

    /// Wraps the key in its SPKI envelope.
    ///
    /// # Errors
    ///
    /// Only fails if the registry and the stored key disagree, which the
    /// constructors rule out.
    pub fn to_spki(&self) -> CodecResult<Vec<u8>> {
        encode_public_key(Some(&self.key), V::parameter_set())
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Consumes the key and returns the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.key
    }

    const fn from_bytes_unchecked(key: Vec<u8>) -> Self {
        Self {
            key,
            _variant: PhantomData,
        }
    }
}

impl<V: MlDsaVariant> AsRef<[u8]> for MlDsaPublicKey<V> {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl<V: MlDsaVariant> Debug for MlDsaPublicKey<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MlDsaPublicKey")
            .field("variant", &V::ALGORITHM.name())
            .field("key_len", &self.key.len())
            .finish()
    }
}

impl<V: MlDsaVariant> PartialEq for MlDsaPublicKey<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<V: MlDsaVariant> Eq for MlDsaPublicKey<V> {}

impl<V: MlDsaVariant> TryFrom<&[u8]> for MlDsaPublicKey<V> {
    type Error = CodecError;

    /// Parses an SPKI envelope; unlike [`MlDsaPublicKey::from_spki`] a
    /// mismatch is reported as `CodecError::BadEncoding`.
    fn try_from(spki: &[u8]) -> Result<Self, Self::Error> {
        Self::from_spki(spki).ok_or(CodecError::BadEncoding {
            algorithm: V::parameter_set().name,
        })
    }
}

impl<V: MlDsaVariant> KeySource for MlDsaPublicKey<V> {
    fn parameter_set(&self) -> &'static ParameterSet {
        V::parameter_set()
    }

    fn seed(&self) -> Option<&[u8]> {
        None
    }

    fn private_key(&self) -> Option<&[u8]> {
        None
    }

    fn public_key(&self) -> Option<&[u8]> {
        Some(&self.key)
    }
}
