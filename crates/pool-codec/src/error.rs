//! Error type shared by every decoder in the crate.

use base58::FromBase58Error;
use hex::FromHexError;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, CodecError>;

/// Codec errors.
///
/// Encoders are infallible; only decoding and validation report errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Malformed hex or Base58 input.
    #[error("decode error: {0}")]
    Decode(String),
    /// Input decoded to the wrong number of bytes.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// Base58Check checksum did not match the payload.
    #[error("checksum did not match")]
    ChecksumMismatch,
    /// Compact bits field cannot be expanded into a target.
    #[error("malformed bits: {0}")]
    MalformedBits(String),
    /// Public key is not 33 bytes after normalization.
    #[error("invalid pubkey: expected 33 bytes, got {0}")]
    InvalidPubkey(usize),
    /// Address could not be turned into an output script.
    #[error("invalid address: {0}")]
    InvalidAddress(Box<CodecError>),
}

impl From<FromHexError> for CodecError {
    fn from(e: FromHexError) -> Self {
        CodecError::Decode(e.to_string())
    }
}

impl From<FromBase58Error> for CodecError {
    fn from(e: FromBase58Error) -> Self {
        match e {
            FromBase58Error::InvalidBase58Character(c, pos) => {
                CodecError::Decode(format!("invalid base58 character {:?} at {}", c, pos))
            }
            FromBase58Error::InvalidBase58Length => {
                CodecError::Decode("invalid base58 length".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_error_maps_to_decode() {
        let err: CodecError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn test_display_wraps_address_cause() {
        let err = CodecError::InvalidAddress(Box::new(CodecError::ChecksumMismatch));
        assert_eq!(err.to_string(), "invalid address: checksum did not match");
    }
}
