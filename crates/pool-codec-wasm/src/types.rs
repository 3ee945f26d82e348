//! Values handed back to JavaScript as plain objects.

use pool_codec::Address;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A decoded Base58Check address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedAddress {
    /// The version byte.
    pub version: u8,
    /// The 20-byte payload hash as hex.
    pub hash: String,
    /// "mainnet", "testnet" or null for other coins.
    pub network: Option<String>,
}

impl From<Address> for DecodedAddress {
    fn from(address: Address) -> Self {
        DecodedAddress {
            version: address.version,
            hash: hex::encode(address.hash),
            network: address.network().map(|n| n.name().to_string()),
        }
    }
}

impl DecodedAddress {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
