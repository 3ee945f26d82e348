//! Coinbase scriptSig field encoders.
//!
//! Pool software assembles the coinbase scriptSig out of the block height,
//! a timestamp, extranonce placeholders and a pool tag. These helpers produce
//! the individual pieces; joining them is left to the caller.

use crate::compact_size::write_compact_size;

/// Serialize a number for a coinbase scriptSig (BIP34 height, timestamp).
///
/// The leading tag byte is picked from the value range, not from the
/// minimal byte length of the value:
///
/// | value          | output                  |
/// |----------------|-------------------------|
/// | < 0xfd         | `01` + 1 byte           |
/// | <= 0xffff      | `03` + u16 little-endian|
/// | <= 0xffff_ffff | `04` + u32 little-endian|
/// | otherwise      | `09` + u64 little-endian|
pub fn serialize_number(n: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(9);
    match n {
        0..=0xfc => {
            out.push(0x01);
            out.push(n as u8);
        }
        0xfd..=0xffff => {
            out.push(0x03);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0x04);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0x09);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
    out
}

/// Serialize a byte string for a scriptSig, prefixed by its CompactSize length.
///
/// Lengths of 2^32 and above take the `0xff` marker and an 8-byte
/// little-endian length, like any other CompactSize.
pub fn serialize_string(s: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() + 9);
    write_compact_size(s.len() as u64, &mut out);
    out.extend_from_slice(s);
    out
}
