//! `SubjectPublicKeyInfo` envelope codec.
//!
//! An ML-DSA public key envelope is a fixed 22-byte DER prefix followed by the
//! raw public key. Recognition is an exact length check plus a byte-for-byte
//! prefix comparison, so a mismatch is never an error: the bytes simply are
//! not a key of that parameter set.

use crate::core::error::{CodecError, CodecResult};
use crate::core::format::FormatTable;
use crate::core::params::{ParameterSet, SPKI_OVERHEAD};

use super::private_key::KeySource;

/// Extracts the raw public key from an SPKI envelope.
///
/// Returns `None` unless `spki` is exactly `22 + public_len` bytes long and
/// starts with the parameter set's prefix.
///
/// # Example
///
/// ```rust
/// use mldsa_keyfmt::core::operations::public_key::{decode_public_key, encode_public_key};
/// use mldsa_keyfmt::core::params::{AlgorithmId, ParameterSet};
///
/// let params = ParameterSet::of(AlgorithmId::MlDsa44);
/// let raw = vec![7u8; params.public_len];
/// let spki = encode_public_key(Some(&raw), params).unwrap();
///
/// assert_eq!(decode_public_key(&spki, params), Some(raw.as_slice()));
/// let other = ParameterSet::of(AlgorithmId::MlDsa65);
/// assert_eq!(decode_public_key(&spki, other), None);
/// ```
#[must_use]
pub fn decode_public_key<'a>(spki: &'a [u8], params: &ParameterSet) -> Option<&'a [u8]> {
    if spki.len() != SPKI_OVERHEAD + params.public_len {
        return None;
    }
    let (prefix, raw) = spki.split_at(SPKI_OVERHEAD);
    let table = FormatTable::for_algorithm(params.algorithm);
    if prefix != table.spki_prefix.as_slice() {
        log::trace!("{}: SPKI prefix mismatch", params.name);
        return None;
    }
    Some(raw)
}

/// Tries every parameter set in turn and returns the first that recognizes
/// the envelope, with the raw public key.
#[must_use]
pub fn detect_public_key(spki: &[u8]) -> Option<(&'static ParameterSet, &[u8])> {
    ParameterSet::all()
        .iter()
        .find_map(|params| decode_public_key(spki, params).map(|raw| (params, raw)))
}

/// Wraps a raw public key in its SPKI envelope.
///
/// # Errors
///
/// - `CodecError::NotAPublicKey` if `public_key` is `None`
/// - `CodecError::InvalidKeyLength` if it is not `public_len` bytes
pub fn encode_public_key(
    public_key: Option<&[u8]>,
    params: &ParameterSet,
) -> CodecResult<Vec<u8>> {
    let raw = checked_public_key(public_key, params)?;
    let table = FormatTable::for_algorithm(params.algorithm);

    let mut spki = Vec::with_capacity(SPKI_OVERHEAD + raw.len());
    spki.extend_from_slice(&table.spki_prefix);
    spki.extend_from_slice(raw);
    Ok(spki)
}

/// Returns a key's raw public key without any envelope.
///
/// # Errors
///
/// Same as [`encode_public_key`].
pub fn public_key_bytes<K: KeySource + ?Sized>(key: &K) -> CodecResult<Vec<u8>> {
    checked_public_key(key.public_key(), key.parameter_set()).map(<[u8]>::to_vec)
}

fn checked_public_key<'k>(
    public_key: Option<&'k [u8]>,
    params: &ParameterSet,
) -> CodecResult<&'k [u8]> {
    let raw = public_key.ok_or(CodecError::NotAPublicKey {
        algorithm: params.name,
    })?;
    if raw.len() != params.public_len {
        return Err(CodecError::InvalidKeyLength {
            algorithm: params.name,
            expected: params.public_len,
            actual: raw.len(),
        });
    }
    Ok(raw)
}
