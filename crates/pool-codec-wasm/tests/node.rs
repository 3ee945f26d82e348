#![cfg(target_arch = "wasm32")]

use pool_codec_wasm::codec::*;
use pool_codec_wasm::DecodedAddress;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn reverses_hex() {
    assert_eq!(reverse_hex("0a0b0c").unwrap(), "0c0b0a");
    assert!(reverse_hex("xyz").is_err());
}

#[wasm_bindgen_test]
fn encodes_numbers_from_js() {
    assert_eq!(var_int_buffer(253.0).unwrap(), vec![0xfd, 0xfd, 0x00]);
    assert_eq!(serialize_number(252.0).unwrap(), vec![0x01, 0xfc]);
    assert!(var_int_buffer(-1.0).is_err());
    assert!(serialize_number(1.5).is_err());
}

#[wasm_bindgen_test]
fn expands_bits() {
    assert_eq!(
        bignum_from_bits("1d00ffff").unwrap(),
        format!("ffff{}", "0".repeat(52))
    );
}

#[wasm_bindgen_test]
fn python_style_range() {
    assert_eq!(range(3.0, None, None).unwrap(), vec![0, 1, 2]);
    assert_eq!(range(5.0, Some(0.0), Some(-1.0)).unwrap(), vec![5, 4, 3, 2, 1]);
    assert!(range(5.0, Some(5.0), None).unwrap().is_empty());
}

#[wasm_bindgen_test]
fn range_rejects_values_outside_i32() {
    assert!(range(0.0, Some(3e9), None).is_err());
    assert!(range(0.5, None, None).is_err());
    assert!(range(0.0, Some(4.0), Some(f64::NAN)).is_err());
}

#[wasm_bindgen_test]
fn encodes_address_for_network() {
    let hash = hex::decode("2c7a568d346629f5308a5b75d825d28b09297153").unwrap();
    assert_eq!(
        encode_address("mainnet", &hash, false).unwrap(),
        "154BHe8d7Dmm7pWLG8J9gceXiCfCRDtWAo"
    );
    let testnet = encode_address("testnet", &hash, true).unwrap();
    let value = address_to_pubkeyhash(&testnet).unwrap();
    let decoded: DecodedAddress = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(decoded.version, 0xc4);
    assert!(encode_address("dogecoin", &hash, false).is_err());
    assert!(encode_address("mainnet", &hash[..19], false).is_err());
}

#[wasm_bindgen_test]
fn decodes_address_object() {
    let value = address_to_pubkeyhash("154BHe8d7Dmm7pWLG8J9gceXiCfCRDtWAo").unwrap();
    let decoded: DecodedAddress = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(decoded.version, 0);
    assert_eq!(decoded.hash, "2c7a568d346629f5308a5b75d825d28b09297153");
    assert_eq!(decoded.network.as_deref(), Some("mainnet"));
}

#[wasm_bindgen_test]
fn builds_scripts() {
    let p2pkh = script_to_address("154BHe8d7Dmm7pWLG8J9gceXiCfCRDtWAo").unwrap();
    assert_eq!(p2pkh.len(), 25);

    let key = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    let p2pk = script_to_pubkey(JsValue::from_str(key)).unwrap();
    assert_eq!(p2pk.len(), 35);
    assert!(script_to_pubkey(JsValue::from_f64(1.0)).is_err());
}
