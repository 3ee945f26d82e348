//! Bitcoin wire and script codecs for mining pool software.
//!
//! This crate provides pure Rust implementations of:
//! - Byte order reversal between internal and wire hash representations
//! - SHA256 double-hashing
//! - CompactSize integers and coinbase scriptSig fields (BIP34 height, strings)
//! - Difficulty target expansion from compact bits
//! - Base58Check address decoding and pay-to-pubkey(-hash) output scripts
//!
//! Every function is a stateless transform; nothing here performs I/O.

pub mod address;
pub mod byte_order;
pub mod coinbase;
pub mod compact_size;
pub mod difficulty;
pub mod error;
pub mod hash;
pub mod network;
pub mod range;
pub mod script;

pub use address::{decode_address, Address, AddressType};
pub use byte_order::{
    hex_from_reversed_buffer, reverse_buffer, reverse_byte_order, reverse_hex,
    uint256_buffer_from_hash,
};
pub use coinbase::{serialize_number, serialize_string};
pub use compact_size::{decode_compact_size, encode_compact_size};
pub use difficulty::{hash_meets_target, target_from_bits, target_from_bits_hex};
pub use error::{CodecError, Result};
pub use hash::double_sha256;
pub use network::Network;
pub use range::{range, range_to};
pub use script::{pay_to_pubkey, pay_to_pubkey_hash};

pub use num_bigint::BigUint;
