//! ML-DSA parameter sets.
//!
//! Exactly three parameter sets exist. They are compiled-in, immutable and
//! shared process-wide. Only the sizes that matter for encoding live here;
//! the lattice parameters belong to the signature implementation.
//!
//! | Variant | Public key | Private key | Seed |
//! |---------|-----------:|------------:|-----:|
//! | ML-DSA-44 | 1312 | 2560 | 32 |
//! | ML-DSA-65 | 1952 | 4032 | 32 |
//! | ML-DSA-87 | 2592 | 4896 | 32 |

use core::fmt::{self, Display};

/// Size of the ML-DSA key generation seed.
pub const SEED_BYTES: usize = 32;

/// Length of the fixed DER prefix in front of the raw public key in an SPKI.
pub const SPKI_OVERHEAD: usize = 22;

/// Identifies one of the ML-DSA variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// ML-DSA-44 (security category 2).
    MlDsa44,
    /// ML-DSA-65 (security category 3).
    MlDsa65,
    /// ML-DSA-87 (security category 5).
    MlDsa87,
}

impl AlgorithmId {
    /// Every supported variant, in registry order.
    pub const ALL: [Self; 3] = [Self::MlDsa44, Self::MlDsa65, Self::MlDsa87];

    /// The algorithm name, e.g. `ML-DSA-65`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MlDsa44 => "ML-DSA-44",
            Self::MlDsa65 => "ML-DSA-65",
            Self::MlDsa87 => "ML-DSA-87",
        }
    }

    /// Dotted-decimal object identifier.
    #[must_use]
    pub const fn oid(self) -> &'static str {
        match self {
            Self::MlDsa44 => "2.16.840.1.101.3.4.3.17",
            Self::MlDsa65 => "2.16.840.1.101.3.4.3.18",
            Self::MlDsa87 => "2.16.840.1.101.3.4.3.19",
        }
    }

    /// DER content octets of the object identifier (without tag and length).
    #[must_use]
    pub const fn oid_der(self) -> &'static [u8] {
        match self {
            Self::MlDsa44 => &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x03, 0x11],
            Self::MlDsa65 => &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x03, 0x12],
            Self::MlDsa87 => &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x03, 0x13],
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::MlDsa44 => 0,
            Self::MlDsa65 => 1,
            Self::MlDsa87 => 2,
        }
    }
}

impl Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed key sizes of one ML-DSA variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSet {
    /// Algorithm name, used in error messages and logs.
    pub name: &'static str,
    /// Which variant this is.
    pub algorithm: AlgorithmId,
    /// Raw public key length in bytes.
    pub public_len: usize,
    /// Expanded private key length in bytes.
    pub private_len: usize,
    /// Seed length in bytes (always [`SEED_BYTES`]).
    pub seed_len: usize,
}

pub(crate) const ML_DSA_44: ParameterSet = ParameterSet {
    name: AlgorithmId::MlDsa44.name(),
    algorithm: AlgorithmId::MlDsa44,
    public_len: 1312,
    private_len: 2560,
    seed_len: SEED_BYTES,
};

pub(crate) const ML_DSA_65: ParameterSet = ParameterSet {
    name: AlgorithmId::MlDsa65.name(),
    algorithm: AlgorithmId::MlDsa65,
    public_len: 1952,
    private_len: 4032,
    seed_len: SEED_BYTES,
};

pub(crate) const ML_DSA_87: ParameterSet = ParameterSet {
    name: AlgorithmId::MlDsa87.name(),
    algorithm: AlgorithmId::MlDsa87,
    public_len: 2592,
    private_len: 4896,
    seed_len: SEED_BYTES,
};

static PARAMETER_SETS: [ParameterSet; 3] = [ML_DSA_44, ML_DSA_65, ML_DSA_87];

impl ParameterSet {
    /// Returns the parameter set of a known variant.
    #[must_use]
    pub fn of(algorithm: AlgorithmId) -> &'static Self {
        &PARAMETER_SETS[algorithm.index()]
    }

    /// All parameter sets in registry order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &PARAMETER_SETS
    }

    /// Looks up a parameter set by the DER content octets of an algorithm
    /// identifier.
    ///
    /// `None` means the identifier belongs to some other key type, which is
    /// not an error: callers probing several key types move on to the next.
    #[must_use]
    pub fn lookup(oid_der: &[u8]) -> Option<&'static Self> {
        PARAMETER_SETS
            .iter()
            .find(|params| params.algorithm.oid_der() == oid_der)
    }

    /// Looks up a parameter set by dotted-decimal object identifier.
    #[must_use]
    pub fn by_oid(oid: &str) -> Option<&'static Self> {
        PARAMETER_SETS
            .iter()
            .find(|params| params.algorithm.oid() == oid)
    }

    /// Looks up a parameter set by algorithm name, ignoring ASCII case.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Self> {
        PARAMETER_SETS
            .iter()
            .find(|params| params.name.eq_ignore_ascii_case(name))
    }
}

impl Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
