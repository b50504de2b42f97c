//! Key material to payload.

use zeroize::Zeroizing;

use crate::core::config::CodecConfig;
use crate::core::cursor::ByteWriter;
use crate::core::error::{CodecError, CodecResult};
use crate::core::format::{FieldKind, FieldLayout, FormatDescriptor, FormatTable, HeaderShift};
use crate::core::params::{ParameterSet, SEED_BYTES};
use crate::core::preference::{Direction, FormatPreference};

use super::KeySource;

/// Key material; parts the chosen layout writes have the parameter set's
/// sizes.
struct Material<'k> {
    seed: Option<&'k [u8]>,
    private_key: &'k [u8],
    public_key: Option<&'k [u8]>,
}

/// Returns the length of the payload [`encode_private_key`] would produce,
/// without allocating it.
///
/// # Errors
///
/// Same as [`encode_private_key`], except that no internal consistency fault
/// can be detected without serializing.
pub fn encoded_private_key_len<K: KeySource + ?Sized>(
    key: &K,
    config: &CodecConfig,
) -> CodecResult<usize> {
    let (_, format, _) = select(key, config)?;
    Ok(format.total_length)
}

/// Encodes a key's private material as a PKCS#8 payload.
///
/// The first layout of the `output-formats` preference that the key can
/// fill is used: layouts carrying a seed are skipped when the key has none.
///
/// # Errors
///
/// - `CodecError::NotAPrivateKey` if the key has no expanded private key
/// - `CodecError::InvalidKeyLength` if a key part the chosen layout writes
///   has the wrong size
/// - `CodecError::NoFormatEnabled` if no enabled layout applies
/// - `CodecError::MissingKey` if the chosen layout needs a public key the
///   key does not have
/// - `CodecError::InternalConsistency` if the layout's offsets disagree with
///   what was written
pub fn encode_private_key<K: KeySource + ?Sized>(
    key: &K,
    config: &CodecConfig,
) -> CodecResult<Zeroizing<Vec<u8>>> {
    let (params, format, material) = select(key, config)?;
    let payload = serialize(params, format, &material)?;
    log::debug!(
        "{}: encoded private key as {} ({} bytes)",
        params.name,
        format.name,
        payload.len()
    );
    Ok(payload)
}

fn checked_field<'k>(
    params: &ParameterSet,
    layout: Option<FieldLayout>,
    bytes: &'k [u8],
    expected: usize,
) -> CodecResult<&'k [u8]> {
    if layout.is_none() || bytes.len() == expected {
        Ok(bytes)
    } else {
        Err(CodecError::InvalidKeyLength {
            algorithm: params.name,
            expected,
            actual: bytes.len(),
        })
    }
}

fn select<'k, K: KeySource + ?Sized>(
    key: &'k K,
    config: &CodecConfig,
) -> CodecResult<(
    &'static ParameterSet,
    &'static FormatDescriptor,
    Material<'k>,
)> {
    let params = key.parameter_set();
    let private_key = key.private_key().ok_or(CodecError::NotAPrivateKey {
        algorithm: params.name,
    })?;
    let seed = key.seed();

    let table = FormatTable::for_algorithm(params.algorithm);
    let preference =
        FormatPreference::resolve(table, Direction::Output, config.output_formats.as_deref())?;

    // The first layout the seed allows wins; a missing public key is not a
    // reason to move on to the next one.
    let format = preference
        .iter()
        .find(|format| (seed.is_some() || format.seed.is_none()) && format.fits(params))
        .ok_or(CodecError::NoFormatEnabled {
            algorithm: params.name,
            direction: Direction::Output,
        })?;

    let public_key = key.public_key();
    if format.public.is_some() && public_key.is_none() {
        return Err(CodecError::MissingKey {
            algorithm: params.name,
        });
    }

    // Only the parts the layout writes are size-checked.
    let material = Material {
        seed: seed
            .map(|seed| checked_field(params, format.seed, seed, SEED_BYTES))
            .transpose()?,
        private_key: checked_field(params, format.private, private_key, params.private_len)?,
        public_key: public_key
            .map(|public_key| checked_field(params, format.public, public_key, params.public_len))
            .transpose()?,
    };

    Ok((params, format, material))
}

fn serialize(
    params: &ParameterSet,
    format: &FormatDescriptor,
    material: &Material<'_>,
) -> CodecResult<Zeroizing<Vec<u8>>> {
    let internal = || CodecError::InternalConsistency {
        algorithm: params.name,
    };

    let mut writer = ByteWriter::with_capacity(format.total_length);
    let header = match format.header_shift {
        HeaderShift::Full => writer.put_u32_be(format.outer_magic).ok(),
        HeaderShift::Short => u16::try_from(format.outer_magic)
            .ok()
            .and_then(|magic| writer.put_u16_be(magic).ok()),
        HeaderShift::Bare => Some(()),
    };
    header.ok_or_else(internal)?;

    let fields = [
        (FieldKind::Seed, format.seed, material.seed),
        (FieldKind::Private, format.private, Some(material.private_key)),
        (FieldKind::Public, format.public, material.public_key),
    ];
    for (kind, layout, bytes) in fields {
        let Some(layout) = layout else {
            continue;
        };
        let bytes = bytes.ok_or(CodecError::MissingKey {
            algorithm: params.name,
        })?;
        write_field(&mut writer, layout, kind, bytes).ok_or_else(internal)?;
    }

    if writer.position() != format.total_length {
        return Err(internal());
    }
    Ok(writer.into_inner())
}

// Writes the field's own tag/length when it is not part of the outer magic,
// then its raw bytes, asserting the declared offsets along the way.
fn write_field(
    writer: &mut ByteWriter,
    layout: FieldLayout,
    kind: FieldKind,
    bytes: &[u8],
) -> Option<()> {
    let header_len = kind.header_len();
    if header_len > 0 && writer.position() + header_len == layout.offset {
        match kind {
            FieldKind::Seed => writer.put_u16_be(u16::try_from(layout.magic).ok()?),
            _ => writer.put_u32_be(layout.magic),
        }
        .ok()?;
    }
    if writer.position() != layout.offset || bytes.len() != layout.length {
        return None;
    }
    writer.put_slice(bytes).ok()?;
    (writer.position() == layout.offset + layout.length).then_some(())
}
