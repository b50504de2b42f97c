//! Payload to key material.

use crate::core::config::CodecConfig;
use crate::core::cursor::ByteReader;
use crate::core::error::{CodecError, CodecResult};
use crate::core::format::{FieldKind, FieldLayout, FormatDescriptor, FormatTable};
use crate::core::params::{ParameterSet, SEED_BYTES};
use crate::core::preference::{Direction, FormatPreference};

use super::{DecodedKeyMaterial, DecodedPrivateKey, PrivateKeyInfo};

/// Decodes a private key payload for one parameter set.
///
/// # Arguments
///
/// * `params` - The parameter set being tried
/// * `info` - Algorithm identifier, parameter flag and payload
/// * `config` - Supplies `input-formats` and the seed flags
///
/// # Returns
///
/// `Ok(None)` if the algorithm identifier names a different key type;
/// nothing is allocated in that case.
///
/// # Errors
///
/// - `CodecError::NoFormatEnabled` if `input-formats` enables nothing, or no
///   enabled layout matches the payload's length and leading tag
/// - `CodecError::UnexpectedParameters` if the identifier carried parameters
/// - `CodecError::BadEncoding` if the matched layout's inner structure is wrong
pub fn decode_private_key(
    params: &'static ParameterSet,
    info: &PrivateKeyInfo<'_>,
    config: &CodecConfig,
) -> CodecResult<Option<DecodedPrivateKey>> {
    if info.algorithm != params.algorithm.oid_der() {
        return Ok(None);
    }

    // A bad `input-formats` is reported ahead of unexpected parameters.
    let table = FormatTable::for_algorithm(params.algorithm);
    let preference =
        FormatPreference::resolve(table, Direction::Input, config.input_formats.as_deref())?;
    if info.has_parameters {
        return Err(CodecError::UnexpectedParameters {
            algorithm: params.name,
        });
    }

    let format = match_format(params, &preference, info.payload)?;
    let material = extract(params, format, info.payload)?;

    log::debug!(
        "{}: decoded {}-byte private key payload as {}",
        params.name,
        info.payload.len(),
        format.name
    );

    Ok(Some(DecodedPrivateKey {
        parameter_set: params,
        format,
        material,
        policy: config.seed_policy(),
    }))
}

/// Decodes a private key payload, picking the parameter set from the
/// algorithm identifier.
///
/// # Returns
///
/// `Ok(None)` if the identifier is not an ML-DSA one.
///
/// # Errors
///
/// See [`decode_private_key`].
pub fn detect_private_key(
    info: &PrivateKeyInfo<'_>,
    config: &CodecConfig,
) -> CodecResult<Option<DecodedPrivateKey>> {
    match ParameterSet::lookup(info.algorithm) {
        Some(params) => decode_private_key(params, info, config),
        None => Ok(None),
    }
}

// First enabled layout whose length and leading tag/length match.
fn match_format(
    params: &ParameterSet,
    preference: &FormatPreference,
    payload: &[u8],
) -> CodecResult<&'static FormatDescriptor> {
    let leading = ByteReader::new(payload).peek_u32_be().ok();

    for format in preference.iter() {
        if payload.len() != format.total_length || !format.fits(params) {
            continue;
        }
        match leading {
            Some(word) if format.header_shift.accepts(word, format.outer_magic) => {
                return Ok(format);
            }
            _ => log::trace!(
                "{}: payload has {} length but not its leading tag",
                params.name,
                format.name
            ),
        }
    }

    Err(CodecError::NoFormatEnabled {
        algorithm: params.name,
        direction: Direction::Input,
    })
}

fn extract(
    params: &ParameterSet,
    format: &FormatDescriptor,
    payload: &[u8],
) -> CodecResult<DecodedKeyMaterial> {
    let bad_encoding = || CodecError::BadEncoding {
        algorithm: params.name,
    };

    let mut reader = ByteReader::new(payload);
    reader
        .skip(format.header_shift.header_len())
        .map_err(|_| bad_encoding())?;

    let seed = match format.seed {
        Some(field) => {
            let bytes = read_field(&mut reader, field, FieldKind::Seed).ok_or_else(bad_encoding)?;
            let seed: [u8; SEED_BYTES] = bytes.try_into().map_err(|_| bad_encoding())?;
            Some(seed)
        }
        None => None,
    };

    let private_key = match format.private {
        Some(field) => Some(
            read_field(&mut reader, field, FieldKind::Private)
                .ok_or_else(bad_encoding)?
                .to_vec(),
        ),
        None => None,
    };

    // The public half of the legacy combined layout is checked, then ignored.
    if let Some(field) = format.public {
        read_field(&mut reader, field, FieldKind::Public).ok_or_else(bad_encoding)?;
    }

    if !reader.is_empty() {
        log::trace!(
            "{}: {} trailing bytes after {} payload",
            params.name,
            reader.remaining(),
            format.name
        );
        return Err(bad_encoding());
    }
    if seed.is_none() && private_key.is_none() {
        return Err(bad_encoding());
    }

    Ok(DecodedKeyMaterial::new(seed, private_key))
}

// Checks the field's placement, either directly at the cursor or behind its
// own tag/length, and returns its raw bytes.
fn read_field<'a>(
    reader: &mut ByteReader<'a>,
    field: FieldLayout,
    kind: FieldKind,
) -> Option<&'a [u8]> {
    let header_len = kind.header_len();
    if header_len > 0 && reader.position() + header_len == field.offset {
        let tag = match kind {
            FieldKind::Seed => u32::from(reader.read_u16_be().ok()?),
            _ => reader.read_u32_be().ok()?,
        };
        if tag != field.magic {
            return None;
        }
    } else if reader.position() != field.offset {
        return None;
    }
    reader.take(field.length).ok()
}
