//! ML-DSA variant markers and traits.
//!
//! This module provides zero-sized type markers for each ML-DSA parameter set
//! so typed key wrappers can carry their variant in the type system. The
//! run-time registry in [`params`](crate::core::params) stays the single
//! source of sizes; markers only point into it.

use core::fmt::{self, Display};

use crate::core::params::{AlgorithmId, ParameterSet, SEED_BYTES};

mod private {
    pub trait Sealed {}
}

/// Trait for ML-DSA variant markers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait MlDsaVariant: private::Sealed + Default + Clone + Copy + Send + Sync + 'static {
    /// Which parameter set this marker stands for.
    const ALGORITHM: AlgorithmId;

    /// Raw public key size in bytes.
    const PUBLIC_KEY_SIZE: usize;

    /// Expanded private key size in bytes.
    const PRIVATE_KEY_SIZE: usize;

    /// Seed size in bytes.
    const SEED_SIZE: usize = SEED_BYTES;

    /// Returns the registry entry of this variant.
    #[must_use]
    fn parameter_set() -> &'static ParameterSet {
        ParameterSet::of(Self::ALGORITHM)
    }
}

// =============================================================================
// ML-DSA-44
// =============================================================================

/// ML-DSA-44 marker (NIST security category 2).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MlDsa44;

impl private::Sealed for MlDsa44 {}

impl MlDsaVariant for MlDsa44 {
    const ALGORITHM: AlgorithmId = AlgorithmId::MlDsa44;
    const PUBLIC_KEY_SIZE: usize = 1312;
    const PRIVATE_KEY_SIZE: usize = 2560;
}

impl Display for MlDsa44 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::ALGORITHM)
    }
}

// =============================================================================
// ML-DSA-65
// =============================================================================

/// ML-DSA-65 marker (NIST security category 3).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MlDsa65;

impl private::Sealed for MlDsa65 {}

impl MlDsaVariant for MlDsa65 {
    const ALGORITHM: AlgorithmId = AlgorithmId::MlDsa65;
    const PUBLIC_KEY_SIZE: usize = 1952;
    const PRIVATE_KEY_SIZE: usize = 4032;
}

impl Display for MlDsa65 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::ALGORITHM)
    }
}

// =============================================================================
// ML-DSA-87
// =============================================================================

/// ML-DSA-87 marker (NIST security category 5).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MlDsa87;

impl private::Sealed for MlDsa87 {}

impl MlDsaVariant for MlDsa87 {
    const ALGORITHM: AlgorithmId = AlgorithmId::MlDsa87;
    const PUBLIC_KEY_SIZE: usize = 2592;
    const PRIVATE_KEY_SIZE: usize = 4896;
}

impl Display for MlDsa87 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::ALGORITHM)
    }
}

// Marker constants must agree with the registry.
const _: () = {
    const fn agrees<V: MlDsaVariant>(params: &ParameterSet) -> bool {
        V::PUBLIC_KEY_SIZE == params.public_len
            && V::PRIVATE_KEY_SIZE == params.private_len
            && V::SEED_SIZE == params.seed_len
    }
    assert!(agrees::<MlDsa44>(&crate::core::params::ML_DSA_44));
    assert!(agrees::<MlDsa65>(&crate::core::params::ML_DSA_65));
    assert!(agrees::<MlDsa87>(&crate::core::params::ML_DSA_87));
};
