//! Byte order conversions between internal and wire representations.
//!
//! Bitcoin stores hashes little-endian but displays them big-endian, and
//! stratum job fields swap the endianness of each 32-bit word on top of that.
//! Callers always pick the direction explicitly with these helpers.

use crate::error::{CodecError, Result};

/// Return a copy of `bytes` in reverse order. Works for any length.
pub fn reverse_buffer(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Reverse the byte order of a 32-byte array.
#[inline]
pub fn reverse_bytes32(bytes: &[u8; 32]) -> [u8; 32] {
    let mut reversed = *bytes;
    reversed.reverse();
    reversed
}

/// Hex-decode, reverse and hex-encode again.
pub fn reverse_hex(hex_str: &str) -> Result<String> {
    let bytes = hex::decode(hex_str)?;
    Ok(hex::encode(reverse_buffer(&bytes)))
}

/// Swap every 32-bit word of a 32-byte value from big- to little-endian,
/// then reverse the whole buffer.
///
/// Only 32-byte inputs (previous block hashes, merkle roots) are accepted.
pub fn reverse_byte_order(bytes: &[u8]) -> Result<[u8; 32]> {
    if bytes.len() != 32 {
        log::debug!("reverse_byte_order rejected {} byte input", bytes.len());
        return Err(CodecError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        });
    }

    let mut swapped = [0u8; 32];
    for (out, word) in swapped.chunks_exact_mut(4).zip(bytes.chunks_exact(4)) {
        let value = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
        out.copy_from_slice(&value.to_le_bytes());
    }

    Ok(reverse_bytes32(&swapped))
}

/// Decode a hash hex string into a 32-byte big-endian buffer.
///
/// Short hashes are zero-padded at the end before reversing, so the missing
/// bytes become high-order zeros.
pub fn uint256_buffer_from_hash(hex_str: &str) -> Result<[u8; 32]> {
    let decoded = hex::decode(hex_str)?;
    if decoded.len() > 32 {
        return Err(CodecError::InvalidLength {
            expected: 32,
            actual: decoded.len(),
        });
    }

    let mut buf = [0u8; 32];
    buf[..decoded.len()].copy_from_slice(&decoded);
    Ok(reverse_bytes32(&buf))
}

/// Reverse `bytes` and hex-encode the result.
pub fn hex_from_reversed_buffer(bytes: &[u8]) -> String {
    hex::encode(reverse_buffer(bytes))
}
