//! Rust to JavaScript value conversion
//!
//! This module provides the TryIntoJsValue trait for converting account types
//! to plain JavaScript objects.

use crate::account::{get_subaccount_for_transfer, Account};
use crate::principal::Identity;
use wasm_bindgen::prelude::*;

/// Error type for JS conversion failures
#[derive(Debug, Clone)]
pub struct JsConversionError(String);

impl JsConversionError {
    pub fn new(msg: &str) -> Self {
        JsConversionError(msg.to_string())
    }
}

impl std::fmt::Display for JsConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<JsConversionError> for JsValue {
    fn from(err: JsConversionError) -> Self {
        js_sys::Error::new(&err.0).into()
    }
}

/// Trait for converting Rust types to JavaScript values
pub trait TryIntoJsValue {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError>;
}

impl TryIntoJsValue for String {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        Ok(JsValue::from_str(self))
    }
}

impl TryIntoJsValue for [u8; 32] {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        Ok(js_sys::Uint8Array::from(&self[..]).into())
    }
}

impl<T: TryIntoJsValue> TryIntoJsValue for Option<T> {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        match self {
            Some(v) => v.try_to_js_value(),
            None => Ok(JsValue::undefined()),
        }
    }
}

impl<I: Identity> TryIntoJsValue for Account<I> {
    fn try_to_js_value(&self) -> Result<JsValue, JsConversionError> {
        // `subaccount` mirrors the ICRC-1 transfer argument: undefined when default.
        crate::js_obj!(
            "owner" => self.owner.to_text(),
            "subaccount" => get_subaccount_for_transfer(self),
            "address" => self.to_string(),
        )
    }
}

/// Macro for building JavaScript objects
#[macro_export]
macro_rules! js_obj {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        use $crate::wasm::try_into_js_value::{TryIntoJsValue, JsConversionError};
        let obj = js_sys::Object::new();
        $(
            js_sys::Reflect::set(
                &obj,
                &wasm_bindgen::JsValue::from_str($key),
                &TryIntoJsValue::try_to_js_value(&$value)?
            ).map_err(|_| JsConversionError::new(&format!("Failed to set property: {}", $key)))?;
        )*
        Ok::<wasm_bindgen::JsValue, JsConversionError>(obj.into())
    }};
}

// WASM tests - only run in wasm32 target
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::principal::Principal;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_account_conversion() {
        let account = Account::new(Principal::management_canister());
        let value = account.try_to_js_value().unwrap();
        let owner = js_sys::Reflect::get(&value, &"owner".into()).unwrap();
        assert_eq!(owner.as_string().unwrap(), "aaaaa-aa");
        let subaccount = js_sys::Reflect::get(&value, &"subaccount".into()).unwrap();
        assert!(subaccount.is_undefined());
    }
}
