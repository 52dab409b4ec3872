//! WASM bindings for account parsing
//!
//! AccountNamespace provides static methods for parsing, encoding, and
//! validating ICRC-1 account input.

use crate::account::subaccount_arg_from_slice;
use crate::address::{
    classify_address, decode_compact_address, encode_compact_address, looks_like_compact_address,
};
use crate::parser::parse_account;
use crate::principal::Principal;
use crate::subaccount::{bytes_to_hex, hex_to_bytes, is_default_subaccount, resolve_subaccount};
use crate::types::SubaccountInput;
use crate::wasm::account::WasmAccount;
use wasm_bindgen::prelude::*;

/// Namespace for account operations
#[wasm_bindgen]
pub struct AccountNamespace;

#[wasm_bindgen]
impl AccountNamespace {
    /// Parse a destination entered by the user
    ///
    /// # Arguments
    /// * `text` - Compact address or bare principal
    /// * `manual` - Optional `{ kind, value }` subaccount, used only for a bare principal
    ///
    /// # Returns
    /// The account, or `undefined` while the principal is still incomplete.
    /// Throws when the input is fully formed but invalid.
    #[wasm_bindgen(js_name = parseAccount)]
    pub fn parse_account_wasm(
        text: &str,
        manual: JsValue,
    ) -> Result<Option<WasmAccount>, JsValue> {
        let manual: Option<SubaccountInput> = if manual.is_undefined() || manual.is_null() {
            None
        } else {
            Some(
                serde_wasm_bindgen::from_value(manual)
                    .map_err(|e| JsValue::from_str(&format!("Invalid subaccount input: {}", e)))?,
            )
        };
        let parsed = parse_account::<Principal>(text, manual.as_ref())?;
        Ok(parsed.map(WasmAccount::from_inner))
    }

    /// Decode a compact address, verifying its checksum
    #[wasm_bindgen(js_name = decodeCompactAddress)]
    pub fn decode_compact_address(text: &str) -> Result<WasmAccount, JsValue> {
        let account = decode_compact_address(text)?;
        Ok(WasmAccount::from_inner(account))
    }

    /// Encode owner and optional subaccount as a compact address
    #[wasm_bindgen(js_name = encodeCompactAddress)]
    pub fn encode_compact_address(
        owner: &str,
        subaccount: Option<Vec<u8>>,
    ) -> Result<String, JsValue> {
        let account = WasmAccount::from_parts(owner, subaccount)?;
        Ok(encode_compact_address(account.inner()))
    }

    /// Structural check whether text is shaped like a compact address
    #[wasm_bindgen(js_name = looksLikeCompactAddress)]
    pub fn looks_like_compact_address(text: &str) -> bool {
        looks_like_compact_address(text)
    }

    /// Classify text as "bareIdentity", "compactAddress" or "invalid"
    #[wasm_bindgen(js_name = classifyAddress)]
    pub fn classify_address(text: &str) -> String {
        classify_address(text).as_str().to_string()
    }

    /// Resolve a manually entered subaccount
    ///
    /// # Arguments
    /// * `kind` - "hex", "byteList" or "principal"
    /// * `value` - Text as entered
    ///
    /// # Returns
    /// 32 bytes, or `undefined` when `value` is blank
    #[wasm_bindgen(js_name = resolveSubaccount)]
    pub fn resolve_subaccount(kind: &str, value: &str) -> Result<Option<Vec<u8>>, JsValue> {
        let input = SubaccountInput::from_kind(kind, value)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown subaccount kind: {}", kind)))?;
        let resolved = resolve_subaccount::<Principal>(&input)?;
        Ok(resolved.map(|s| s.to_vec()))
    }

    /// Check whether bytes are the all-zero default subaccount
    #[wasm_bindgen(js_name = isDefaultSubaccount)]
    pub fn is_default_subaccount(bytes: &[u8]) -> bool {
        is_default_subaccount(bytes)
    }

    /// Transfer argument for a 32-byte subaccount; undefined for the default
    ///
    /// Aborts if `bytes` is not 32 bytes long.
    #[wasm_bindgen(js_name = getSubaccountForTransfer)]
    pub fn get_subaccount_for_transfer(bytes: &[u8]) -> Option<Vec<u8>> {
        subaccount_arg_from_slice(bytes).map(|s| s.to_vec())
    }

    /// Lowercase hex without prefix
    #[wasm_bindgen(js_name = bytesToHex)]
    pub fn bytes_to_hex(bytes: &[u8]) -> String {
        bytes_to_hex(bytes)
    }

    /// Decode hex with or without 0x prefix
    #[wasm_bindgen(js_name = hexToBytes)]
    pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, JsValue> {
        hex_to_bytes(hex).map_err(|e| e.into())
    }
}
