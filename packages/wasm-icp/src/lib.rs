//! wasm-icp: WASM module for Internet Computer ICRC-1 account addresses
//!
//! This crate provides:
//! - Parsing of user-entered destinations (bare principal, principal plus
//!   manual subaccount, or compact `owner-checksum.subaccount` address)
//! - Compact address encoding with checksum
//! - Subaccount resolution from hex, byte lists, or principals
//! - The minimal subaccount argument for ICRC-1 transfers
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_icp::{parse_account, Account, SubaccountInput};
//!
//! let manual = SubaccountInput::Hex("0x01".to_string());
//! let account: Option<Account> =
//!     parse_account("ryjl3-tyaaa-aaaaa-aaaba-cai", Some(&manual)).unwrap();
//! assert_eq!(
//!     account.unwrap().to_string(),
//!     "ryjl3-tyaaa-aaaaa-aaaba-cai-ryjl3ty.01"
//! );
//! ```

pub mod account;
pub mod address;
pub mod error;
pub mod parser;
pub mod principal;
pub mod subaccount;
pub mod types;
pub mod wasm;

#[cfg(test)]
mod test_utils;

// Re-export main types for convenience
pub use account::{get_subaccount_for_transfer, subaccount_arg_from_slice, Account};
pub use address::{
    classify_address, classify_address_for, decode_compact_address, encode_compact_address,
    looks_like_compact_address, owner_checksum, AddressShape, CHECKSUM_LEN,
};
pub use error::AccountError;
pub use parser::parse_account;
pub use principal::{Identity, Principal, PrincipalExt};
pub use subaccount::{
    bytes_to_hex, hex_to_bytes, is_default_subaccount, resolve_subaccount, Subaccount,
    DEFAULT_SUBACCOUNT, SUBACCOUNT_LEN,
};
pub use types::SubaccountInput;

// Re-export WASM types
pub use wasm::{AccountNamespace, WasmAccount};
