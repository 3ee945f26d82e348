//! Proof-of-work target expansion from the compact "bits" field.

use num_bigint::BigUint;

use crate::error::{CodecError, Result};

/// Expand a compact "bits" value into the full target.
///
/// The bits format is: [exponent (1 byte)][mantissa (3 bytes)]
/// Target = mantissa * 256^(exponent - 3)
///
/// The mantissa is taken as an unsigned 24-bit value. Exponents below 3
/// would need a right shift and are rejected.
pub fn target_from_bits(bits: u32) -> Result<BigUint> {
    let exponent = bits >> 24;
    let mantissa = bits & 0x00ff_ffff;

    if exponent < 3 {
        log::debug!("rejecting bits {:08x}: exponent {} below 3", bits, exponent);
        return Err(CodecError::MalformedBits(format!(
            "exponent {} is below 3",
            exponent
        )));
    }

    Ok(BigUint::from(mantissa) << (8 * (exponent as usize - 3)))
}

/// Expand a bits field given as 8 hex characters, as found in
/// `getblocktemplate` responses.
pub fn target_from_bits_hex(bits_hex: &str) -> Result<BigUint> {
    let raw = hex::decode(bits_hex)?;
    let bits: [u8; 4] = raw.as_slice().try_into().map_err(|_| {
        CodecError::MalformedBits(format!("expected 4 bytes, got {}", raw.len()))
    })?;
    target_from_bits(u32::from_be_bytes(bits))
}

/// Serialize a target as a 32-byte big-endian uint256.
pub fn target_to_bytes(target: &BigUint) -> Result<[u8; 32]> {
    let be = target.to_bytes_be();
    if be.len() > 32 {
        return Err(CodecError::InvalidLength {
            expected: 32,
            actual: be.len(),
        });
    }

    let mut out = [0u8; 32];
    out[32 - be.len()..].copy_from_slice(&be);
    Ok(out)
}

/// Check if a hash meets the target.
///
/// `hash` is a double-SHA256 digest in internal (little-endian) byte order,
/// exactly as returned by [`crate::hash::double_sha256`].
pub fn hash_meets_target(hash: &[u8; 32], target: &BigUint) -> bool {
    BigUint::from_bytes_le(hash) <= *target
}
