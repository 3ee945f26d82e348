//! Base58Check address decoding.
//!
//! A legacy address is `version (1) || hash160 (20) || checksum (4)` written
//! in Base58, where the checksum is the first four bytes of the double SHA256
//! of the version and hash.

use base58::{FromBase58, ToBase58};

use crate::error::{CodecError, Result};
use crate::hash::double_sha256;
use crate::network::Network;

/// Length of a decoded Base58Check address.
pub const ADDRESS_LEN: usize = 25;

/// Longest Base58 text accepted for decoding. A 25-byte address encodes to
/// at most 34 characters.
pub const MAX_ADDRESS_CHARS: usize = 35;

/// Legacy address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    /// Pay to public key hash
    P2PKH,
    /// Pay to script hash
    P2SH,
}

/// A decoded Base58Check address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    /// The version byte.
    pub version: u8,
    /// The 20-byte payload hash.
    pub hash: [u8; 20],
}

impl Address {
    /// Build an address from its parts.
    pub fn new(version: u8, hash: [u8; 20]) -> Self {
        Address { version, hash }
    }

    /// Build a pay-to-pubkey-hash address for `network`.
    pub fn p2pkh(network: Network, hash: [u8; 20]) -> Self {
        Address::new(network.p2pkh_version(), hash)
    }

    /// Build a pay-to-script-hash address for `network`.
    pub fn p2sh(network: Network, hash: [u8; 20]) -> Self {
        Address::new(network.p2sh_version(), hash)
    }

    /// Identify the address type and network from the version byte.
    ///
    /// Returns `None` for version bytes of other coins.
    pub fn classify(&self) -> Option<(AddressType, Network)> {
        [Network::Mainnet, Network::Testnet]
            .into_iter()
            .find_map(|network| {
                if self.version == network.p2pkh_version() {
                    Some((AddressType::P2PKH, network))
                } else if self.version == network.p2sh_version() {
                    Some((AddressType::P2SH, network))
                } else {
                    None
                }
            })
    }

    /// The Bitcoin network this address belongs to, if recognized.
    pub fn network(&self) -> Option<Network> {
        self.classify().map(|(_, network)| network)
    }

    /// The 25 raw bytes of the address, checksum included.
    pub fn to_bytes(&self) -> [u8; ADDRESS_LEN] {
        let mut raw = [0u8; ADDRESS_LEN];
        raw[0] = self.version;
        raw[1..21].copy_from_slice(&self.hash);
        let checksum = double_sha256(&raw[..21]);
        raw[21..].copy_from_slice(&checksum[..4]);
        raw
    }

    /// Encode as Base58Check text.
    pub fn encode(&self) -> String {
        self.to_bytes().to_base58()
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl core::str::FromStr for Address {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        decode_address(s)
    }
}

/// Decode a Base58Check address into its version byte and 20-byte hash.
pub fn decode_address(address: &str) -> Result<Address> {
    // The base58 decoder underflows on long runs of leading '1's.
    if address.len() > MAX_ADDRESS_CHARS {
        log::debug!("address text has {} characters", address.len());
        return Err(CodecError::Decode(format!(
            "address is {} characters, at most {} allowed",
            address.len(),
            MAX_ADDRESS_CHARS
        )));
    }

    let raw = address.from_base58()?;
    decode_address_bytes(&raw)
}

/// Verify and split 25 raw address bytes.
pub fn decode_address_bytes(raw: &[u8]) -> Result<Address> {
    if raw.len() != ADDRESS_LEN {
        log::debug!("address decoded to {} bytes, expected {}", raw.len(), ADDRESS_LEN);
        return Err(CodecError::InvalidLength {
            expected: ADDRESS_LEN,
            actual: raw.len(),
        });
    }

    let (body, checksum) = raw.split_at(ADDRESS_LEN - 4);
    if double_sha256(body)[..4] != *checksum {
        log::debug!("address checksum mismatch for {}", hex::encode(raw));
        return Err(CodecError::ChecksumMismatch);
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&body[1..]);
    let address = Address::new(body[0], hash);
    log::trace!("decoded address version {:#04x}", address.version);
    Ok(address)
}
