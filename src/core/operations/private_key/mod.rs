//! PKCS#8 private key payload codec.
//!
//! The payload is the content of the `privateKey` OCTET STRING of a
//! `PrivateKeyInfo`, already unwrapped by a generic DER parser. It carries no
//! self-describing schema: the layout is recognized from its exact length and
//! leading tag/length bytes, then every sub-field offset is checked.
//!
//! - [`decode_private_key`] / [`detect_private_key`] - payload to key material
//! - [`encode_private_key`] / [`encoded_private_key_len`] - key material to payload

mod decode;
mod encode;

use core::fmt::{self, Debug};

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::config::SeedPolicy;
use crate::core::format::FormatDescriptor;
use crate::core::params::{AlgorithmId, ParameterSet, SEED_BYTES};

pub use decode::{decode_private_key, detect_private_key};
pub use encode::{encode_private_key, encoded_private_key_len};

/// The parts of a `PrivateKeyInfo` this codec needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateKeyInfo<'a> {
    /// DER content octets of the algorithm OID.
    pub algorithm: &'a [u8],
    /// Whether the `AlgorithmIdentifier` carried parameters.
    pub has_parameters: bool,
    /// Content of the `privateKey` OCTET STRING.
    pub payload: &'a [u8],
}

impl<'a> PrivateKeyInfo<'a> {
    /// Describes a payload for a known variant, without parameters.
    #[must_use]
    pub fn new(algorithm: AlgorithmId, payload: &'a [u8]) -> Self {
        Self {
            algorithm: algorithm.oid_der(),
            has_parameters: false,
            payload,
        }
    }

    /// Marks whether the algorithm identifier carried parameters.
    #[must_use]
    pub const fn with_parameters(mut self, present: bool) -> Self {
        self.has_parameters = present;
        self
    }
}

/// Seed and/or expanded key recovered from a payload.
///
/// At least one of the two is always present.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key material
/// - Equality comparison is constant-time
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DecodedKeyMaterial {
    seed: Option<[u8; SEED_BYTES]>,
    private_key: Option<Vec<u8>>,
}

impl DecodedKeyMaterial {
    pub(crate) fn new(seed: Option<[u8; SEED_BYTES]>, private_key: Option<Vec<u8>>) -> Self {
        debug_assert!(seed.is_some() || private_key.is_some());
        Self { seed, private_key }
    }

    /// The 32-byte seed, if the layout carried one.
    #[must_use]
    pub fn seed(&self) -> Option<&[u8; SEED_BYTES]> {
        self.seed.as_ref()
    }

    /// The expanded private key, if the layout carried one.
    #[must_use]
    pub fn private_key(&self) -> Option<&[u8]> {
        self.private_key.as_deref()
    }
}

impl Debug for DecodedKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedKeyMaterial")
            .field("seed", &self.seed.as_ref().map(|_| "[REDACTED]"))
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

pub(crate) fn ct_eq_optional(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.len() == b.len() && bool::from(a.ct_eq(b)),
        _ => false,
    }
}

impl PartialEq for DecodedKeyMaterial {
    fn eq(&self, other: &Self) -> bool {
        let seeds = ct_eq_optional(
            self.seed.as_ref().map(|s| s.as_slice()),
            other.seed.as_ref().map(|s| s.as_slice()),
        );
        let keys = ct_eq_optional(self.private_key(), other.private_key());
        seeds & keys
    }
}

impl Eq for DecodedKeyMaterial {}

/// Result of a successful decode, ready for the key constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPrivateKey {
    parameter_set: &'static ParameterSet,
    format: &'static FormatDescriptor,
    material: DecodedKeyMaterial,
    policy: SeedPolicy,
}

impl DecodedPrivateKey {
    /// The variant of the decoded key.
    #[must_use]
    pub fn parameter_set(&self) -> &'static ParameterSet {
        self.parameter_set
    }

    /// The layout the payload matched.
    #[must_use]
    pub fn format(&self) -> &'static FormatDescriptor {
        self.format
    }

    /// The recovered seed and/or expanded key.
    #[must_use]
    pub fn material(&self) -> &DecodedKeyMaterial {
        &self.material
    }

    /// Seed flags taken from the configuration used for decoding.
    #[must_use]
    pub fn seed_policy(&self) -> SeedPolicy {
        self.policy
    }
}

/// Read access to the key material of a key object, for encoding.
///
/// Slices returned here are checked against the parameter set's sizes before
/// anything is written.
pub trait KeySource {
    /// The variant of the key.
    fn parameter_set(&self) -> &'static ParameterSet;

    /// The 32-byte seed, when the key retains it.
    fn seed(&self) -> Option<&[u8]>;

    /// The expanded private key, when available.
    fn private_key(&self) -> Option<&[u8]>;

    /// The raw public key, when available.
    fn public_key(&self) -> Option<&[u8]>;
}
