//! WebAssembly bindings for the pool codec library.
//!
//! Exposes the coinbase, target and address codecs to JavaScript pool
//! software under the names of the utility functions they replace.

use wasm_bindgen::prelude::*;

pub mod codec;
pub mod types;

pub use types::DecodedAddress;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
