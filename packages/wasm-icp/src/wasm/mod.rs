//! WASM bindings for wasm-icp
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod account;
pub mod parser;
pub mod try_into_js_value;

// Re-export WASM types
pub use account::WasmAccount;
pub use parser::AccountNamespace;
