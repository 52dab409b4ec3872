//! Error types for wasm-icp

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Main error type for account parsing and encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Owner text is not a valid principal
    #[error("Invalid principal: {0}")]
    InvalidPrincipalFormat(String),
    /// Compact address checksum does not match the owner
    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
    /// Subaccount hex is malformed
    #[error("Invalid subaccount hex: {0}")]
    InvalidSubaccountHex(String),
    /// Subaccount byte list is malformed
    #[error("Invalid subaccount byte list: {0}")]
    InvalidSubaccountByteList(String),
    /// Principal given as a subaccount source did not parse
    #[error("Invalid subaccount principal: {0}")]
    InvalidSubaccountPrincipal(String),
    /// Subaccount input does not fit in 32 bytes
    #[error("Subaccount too long: at most {max} allowed, got {actual}")]
    SubaccountTooLong { max: usize, actual: usize },
}

impl AccountError {
    /// Stable name of the error variant, exposed to JS as `error.name`
    pub fn kind(&self) -> &'static str {
        match self {
            AccountError::InvalidPrincipalFormat(_) => "InvalidPrincipalFormat",
            AccountError::ChecksumMismatch { .. } => "ChecksumMismatch",
            AccountError::InvalidSubaccountHex(_) => "InvalidSubaccountHex",
            AccountError::InvalidSubaccountByteList(_) => "InvalidSubaccountByteList",
            AccountError::InvalidSubaccountPrincipal(_) => "InvalidSubaccountPrincipal",
            AccountError::SubaccountTooLong { .. } => "SubaccountTooLong",
        }
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<AccountError> for JsValue {
    fn from(err: AccountError) -> Self {
        let js_err = js_sys::Error::new(&err.to_string());
        js_err.set_name(err.kind());
        js_err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccountError::InvalidPrincipalFormat("bad principal".to_string());
        assert_eq!(err.to_string(), "Invalid principal: bad principal");

        let err = AccountError::ChecksumMismatch {
            expected: "aaaaaaa".to_string(),
            actual: "bbbbbbb".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Checksum mismatch: expected aaaaaaa, got bbbbbbb"
        );
    }

    #[test]
    fn test_kind() {
        let err = AccountError::SubaccountTooLong { max: 32, actual: 33 };
        assert_eq!(err.kind(), "SubaccountTooLong");
        assert_eq!(
            AccountError::InvalidSubaccountHex(String::new()).kind(),
            "InvalidSubaccountHex"
        );
    }
}
