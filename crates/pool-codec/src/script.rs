//! Output scripts for the coinbase transaction.

use crate::address::decode_address;
use crate::error::{CodecError, Result};

pub const OP_DUP: u8 = 0x76;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_CHECKSIG: u8 = 0xac;

/// Length of a compressed public key.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Build a pay-to-pubkey script: `<33-byte pubkey> OP_CHECKSIG`.
///
/// Used by proof-of-stake coins that pay the block reward to a raw key.
/// `pubkey` is either the 33 key bytes or the 66 ASCII characters of its hex
/// form.
pub fn pay_to_pubkey(pubkey: &[u8]) -> Result<Vec<u8>> {
    let key = if pubkey.len() == 2 * COMPRESSED_PUBKEY_LEN {
        hex::decode(pubkey).map_err(|_| CodecError::InvalidPubkey(pubkey.len()))?
    } else {
        pubkey.to_vec()
    };

    if key.len() != COMPRESSED_PUBKEY_LEN {
        log::debug!("pubkey has {} bytes", key.len());
        return Err(CodecError::InvalidPubkey(key.len()));
    }

    let mut script = Vec::with_capacity(35);
    script.push(COMPRESSED_PUBKEY_LEN as u8); // Push 33 bytes
    script.extend_from_slice(&key);
    script.push(OP_CHECKSIG);
    Ok(script)
}

/// Build a pay-to-pubkey script from a hex encoded public key.
pub fn pay_to_pubkey_hex(pubkey_hex: &str) -> Result<Vec<u8>> {
    pay_to_pubkey(pubkey_hex.as_bytes())
}

/// Build a pay-to-pubkey-hash script for a Base58Check address:
/// `OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG`.
///
/// The version byte is not checked against any network.
pub fn pay_to_pubkey_hash(address: &str) -> Result<Vec<u8>> {
    let decoded =
        decode_address(address).map_err(|e| CodecError::InvalidAddress(Box::new(e)))?;

    let mut script = Vec::with_capacity(25);
    script.push(OP_DUP);
    script.push(OP_HASH160);
    script.push(0x14); // Push 20 bytes
    script.extend_from_slice(&decoded.hash);
    script.push(OP_EQUALVERIFY);
    script.push(OP_CHECKSIG);
    Ok(script)
}
