//! Bitcoin CompactSize (variable length integer) encoding.
//!
//! | value            | bytes                      |
//! |------------------|----------------------------|
//! | < 0xfd           | the value itself           |
//! | <= 0xffff        | 0xfd + u16 little-endian   |
//! | <= 0xffff_ffff   | 0xfe + u32 little-endian   |
//! | otherwise        | 0xff + u64 little-endian   |

use crate::error::{CodecError, Result};

/// Size in bytes of the CompactSize encoding of `value`.
pub fn compact_size_len(value: u64) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Append the CompactSize encoding of `value` to `output`.
pub fn write_compact_size(value: u64, output: &mut Vec<u8>) {
    match value {
        0..=0xfc => output.push(value as u8),
        0xfd..=0xffff => {
            output.push(0xfd);
            output.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            output.push(0xfe);
            output.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            output.push(0xff);
            output.extend_from_slice(&value.to_le_bytes());
        }
    }
}

/// Encode `value` as a CompactSize buffer.
pub fn encode_compact_size(value: u64) -> Vec<u8> {
    let mut output = Vec::with_capacity(compact_size_len(value));
    write_compact_size(value, &mut output);
    output
}

/// Decode a CompactSize from the front of `data`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_compact_size(data: &[u8]) -> Result<(u64, usize)> {
    let first = *data.first().ok_or(CodecError::InvalidLength {
        expected: 1,
        actual: 0,
    })?;

    let width = match first {
        0xfd => 2,
        0xfe => 4,
        0xff => 8,
        n => return Ok((n as u64, 1)),
    };

    let body = data.get(1..1 + width).ok_or(CodecError::InvalidLength {
        expected: 1 + width,
        actual: data.len(),
    })?;

    let mut le = [0u8; 8];
    le[..width].copy_from_slice(body);
    Ok((u64::from_le_bytes(le), 1 + width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        assert_eq!(encode_compact_size(0), vec![0]);
        assert_eq!(encode_compact_size(252), vec![252]);
        assert_eq!(encode_compact_size(253), vec![0xfd, 253, 0]);
        assert_eq!(encode_compact_size(0x1234), vec![0xfd, 0x34, 0x12]);
        assert_eq!(encode_compact_size(65535), vec![0xfd, 255, 255]);
        assert_eq!(encode_compact_size(65536), vec![0xfe, 0, 0, 1, 0]);
        assert_eq!(encode_compact_size(0xffff_ffff), vec![0xfe, 255, 255, 255, 255]);
        assert_eq!(
            encode_compact_size(0x1_0000_0000),
            vec![0xff, 0, 0, 0, 0, 1, 0, 0, 0]
        );
    }

    #[test]
    fn test_write_appends() {
        let mut output = vec![0xaa];
        write_compact_size(100, &mut output);
        assert_eq!(output, vec![0xaa, 100]);
    }

    #[test]
    fn test_decode_consumes_prefix_only() {
        let (value, used) = decode_compact_size(&[0xfd, 0x34, 0x12, 0x99]).unwrap();
        assert_eq!(value, 0x1234);
        assert_eq!(used, 3);
    }

    #[test]
    fn test_decode_truncated() {
        assert!(decode_compact_size(&[]).is_err());
        assert_eq!(
            decode_compact_size(&[0xfe, 0x01, 0x02]),
            Err(CodecError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
    }

    proptest! {
        #[test]
        fn test_roundtrip(value: u64) {
            let encoded = encode_compact_size(value);
            let (decoded, used) = decode_compact_size(&encoded).unwrap();
            prop_assert_eq!(decoded, value);
            prop_assert_eq!(used, encoded.len());
        }

        #[test]
        fn test_minimal_width(value: u64) {
            let expected = if value < 0xfd {
                1
            } else if value <= 0xffff {
                3
            } else if value <= 0xffff_ffff {
                5
            } else {
                9
            };
            prop_assert_eq!(encode_compact_size(value).len(), expected);
            prop_assert_eq!(compact_size_len(value), expected);
        }
    }
}
