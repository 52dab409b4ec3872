//! WASM bindings for ICRC-1 accounts.
//!
//! Wraps the core `Account` for JavaScript.

use crate::account::{get_subaccount_for_transfer, Account};
use crate::address::decode_compact_address;
use crate::error::AccountError;
use crate::principal::{Principal, PrincipalExt};
use crate::subaccount::left_pad;
use crate::wasm::try_into_js_value::TryIntoJsValue;
use wasm_bindgen::prelude::*;

/// WASM wrapper for an ICRC-1 account.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WasmAccount {
    inner: Account,
}

#[wasm_bindgen]
impl WasmAccount {
    /// Decode a compact address (`owner-checksum[.hex]`).
    #[wasm_bindgen(js_name = fromText)]
    pub fn from_text(text: &str) -> Result<WasmAccount, AccountError> {
        decode_compact_address(text).map(|inner| WasmAccount { inner })
    }

    /// Create from owner principal text and an optional subaccount.
    ///
    /// A subaccount shorter than 32 bytes is left-padded with zeros.
    #[wasm_bindgen(js_name = fromParts)]
    pub fn from_parts(
        owner: &str,
        subaccount: Option<Vec<u8>>,
    ) -> Result<WasmAccount, AccountError> {
        let owner = Principal::from_text_checked(owner)?;
        let subaccount = subaccount.map(|bytes| left_pad(&bytes)).transpose()?;
        Ok(WasmAccount {
            inner: Account::from_transfer_args(owner, subaccount),
        })
    }

    /// Owner principal text.
    #[wasm_bindgen(getter)]
    pub fn owner(&self) -> String {
        self.inner.owner.to_string()
    }

    /// Full 32-byte subaccount (all zeros for the default).
    #[wasm_bindgen(getter)]
    pub fn subaccount(&self) -> Vec<u8> {
        self.inner.subaccount.to_vec()
    }

    /// Check if the subaccount is the all-zero default.
    #[wasm_bindgen(getter, js_name = hasDefaultSubaccount)]
    pub fn has_default_subaccount(&self) -> bool {
        self.inner.has_default_subaccount()
    }

    /// Compact address text.
    #[wasm_bindgen(js_name = toText)]
    pub fn to_text(&self) -> String {
        self.inner.to_string()
    }

    /// Subaccount argument for an ICRC-1 transfer; undefined for the default.
    #[wasm_bindgen(js_name = transferSubaccount)]
    pub fn transfer_subaccount(&self) -> Option<Vec<u8>> {
        get_subaccount_for_transfer(&self.inner).map(|s| s.to_vec())
    }

    /// Check if two accounts are equal.
    #[wasm_bindgen]
    pub fn equals(&self, other: &WasmAccount) -> bool {
        self.inner == other.inner
    }

    /// Plain object `{ owner, subaccount, address }`.
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        self.inner.try_to_js_value().map_err(|e| e.into())
    }
}

impl WasmAccount {
    /// Create from inner Account.
    pub fn from_inner(inner: Account) -> Self {
        WasmAccount { inner }
    }

    /// Get the inner Account for internal Rust use.
    pub fn inner(&self) -> &Account {
        &self.inner
    }
}
