//! JavaScript entry points, named after the pool utility functions they
//! replace.

use js_sys::Uint8Array;
use pool_codec::{
    address, byte_order, coinbase, compact_size, difficulty, hash, range as ranges, script,
    Address, CodecError, Network,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::types::DecodedAddress;

/// Largest integer a JS number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Map a codec error into a JS exception, logging it to the console.
fn to_js_error(err: CodecError) -> JsValue {
    let message = err.to_string();
    console_warn(&message);
    JsValue::from_str(&message)
}

/// Convert a JS number into an unsigned integer.
fn js_uint(n: f64) -> Result<u64, JsValue> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 || n > MAX_SAFE_INTEGER {
        return Err(JsValue::from_str(&format!(
            "Expected a non-negative safe integer, got {}",
            n
        )));
    }
    Ok(n as u64)
}

/// Convert a JS number into an `i32` without ToInt32 wrapping.
fn js_int(n: f64) -> Result<i32, JsValue> {
    if !n.is_finite() || n.fract() != 0.0 || n < i32::MIN as f64 || n > i32::MAX as f64 {
        return Err(JsValue::from_str(&format!(
            "Expected a 32-bit integer, got {}",
            n
        )));
    }
    Ok(n as i32)
}

#[wasm_bindgen(js_name = reverseBuffer)]
pub fn reverse_buffer(buf: &[u8]) -> Vec<u8> {
    byte_order::reverse_buffer(buf)
}

#[wasm_bindgen(js_name = reverseHex)]
pub fn reverse_hex(hex: &str) -> Result<String, JsValue> {
    byte_order::reverse_hex(hex).map_err(to_js_error)
}

/// Byte-swap each 32-bit word of a 32-byte buffer, then reverse it.
#[wasm_bindgen(js_name = reverseByteOrder)]
pub fn reverse_byte_order(buf: &[u8]) -> Result<Vec<u8>, JsValue> {
    byte_order::reverse_byte_order(buf)
        .map(|out| out.to_vec())
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = uint256BufferFromHash)]
pub fn uint256_buffer_from_hash(hex: &str) -> Result<Vec<u8>, JsValue> {
    byte_order::uint256_buffer_from_hash(hex)
        .map(|out| out.to_vec())
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = hexFromReversedBuffer)]
pub fn hex_from_reversed_buffer(buf: &[u8]) -> String {
    byte_order::hex_from_reversed_buffer(buf)
}

#[wasm_bindgen(js_name = doublesha)]
pub fn doublesha(buf: &[u8]) -> Vec<u8> {
    hash::double_sha256(buf).to_vec()
}

#[wasm_bindgen(js_name = varIntBuffer)]
pub fn var_int_buffer(n: f64) -> Result<Vec<u8>, JsValue> {
    Ok(compact_size::encode_compact_size(js_uint(n)?))
}

/// Expand a bits hex string into the target, returned as hex.
#[wasm_bindgen(js_name = bignumFromBits)]
pub fn bignum_from_bits(bits: &str) -> Result<String, JsValue> {
    difficulty::target_from_bits_hex(bits)
        .map(|target| target.to_str_radix(16))
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = serializeNumber)]
pub fn serialize_number(n: f64) -> Result<Vec<u8>, JsValue> {
    Ok(coinbase::serialize_number(js_uint(n)?))
}

/// Length-prefix the UTF-8 bytes of `s`.
#[wasm_bindgen(js_name = serializeString)]
pub fn serialize_string(s: &str) -> Vec<u8> {
    coinbase::serialize_string(s.as_bytes())
}

/// Python style `range`: `range(stop)`, `range(start, stop)` or
/// `range(start, stop, step)`.
#[wasm_bindgen(js_name = range)]
pub fn range(start: f64, stop: Option<f64>, step: Option<f64>) -> Result<Vec<i32>, JsValue> {
    let start = js_int(start)?;
    let (start, stop) = match stop {
        Some(stop) => (start, js_int(stop)?),
        None => (0, start),
    };
    let step = step.map(js_int).transpose()?.unwrap_or(1);
    // Bounds and step are i32, so every yielded value fits in i32.
    Ok(ranges::range(start.into(), stop.into(), step.into())
        .map(|v| v as i32)
        .collect())
}

/// Decode an address into `{ version, hash, network }`.
#[wasm_bindgen(js_name = addressToPubkeyhash)]
pub fn address_to_pubkeyhash(addr: &str) -> Result<JsValue, JsValue> {
    let decoded = address::decode_address(addr).map_err(to_js_error)?;
    DecodedAddress::from(decoded).to_js()
}

/// Encode a 20-byte hash as a P2PKH (or P2SH) address for a named network.
#[wasm_bindgen(js_name = encodeAddress)]
pub fn encode_address(network: &str, hash: &[u8], script_hash: bool) -> Result<String, JsValue> {
    let network: Network = network.parse().map_err(to_js_error)?;
    let hash: [u8; 20] = hash.try_into().map_err(|_| {
        to_js_error(CodecError::InvalidLength {
            expected: 20,
            actual: hash.len(),
        })
    })?;
    let address = if script_hash {
        Address::p2sh(network, hash)
    } else {
        Address::p2pkh(network, hash)
    };
    Ok(address.encode())
}

/// Pay-to-pubkey script from a hex string or a `Uint8Array` key.
#[wasm_bindgen(js_name = scriptToPubkey)]
pub fn script_to_pubkey(key: JsValue) -> Result<Vec<u8>, JsValue> {
    let result = if let Some(hex) = key.as_string() {
        script::pay_to_pubkey_hex(&hex)
    } else if let Some(bytes) = key.dyn_ref::<Uint8Array>() {
        script::pay_to_pubkey(&bytes.to_vec())
    } else {
        return Err(JsValue::from_str("Expected a hex string or Uint8Array"));
    };
    result.map_err(to_js_error)
}

/// Pay-to-pubkey-hash script for a Base58Check address.
#[wasm_bindgen(js_name = scriptToAddress)]
pub fn script_to_address(addr: &str) -> Result<Vec<u8>, JsValue> {
    script::pay_to_pubkey_hash(addr).map_err(to_js_error)
}

/// Log a warning to the browser console.
fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
