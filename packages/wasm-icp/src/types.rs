//! Shared input types for account parsing

use serde::{Deserialize, Serialize};

/// Manually entered subaccount, tagged with how the text should be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SubaccountInput {
    /// Hex text, optional `0x` prefix, at most 64 digits
    Hex(String),
    /// Decimal bytes separated by commas or whitespace, at most 32 entries
    ByteList(String),
    /// Principal text whose bytes become the subaccount
    Principal(String),
}

impl SubaccountInput {
    /// Build an input from a kind name as used on the JS side
    pub fn from_kind(kind: &str, value: &str) -> Option<Self> {
        let value = value.to_string();
        match kind {
            "hex" => Some(SubaccountInput::Hex(value)),
            "byteList" => Some(SubaccountInput::ByteList(value)),
            "principal" => Some(SubaccountInput::Principal(value)),
            _ => None,
        }
    }

    /// Kind name as used on the JS side
    pub fn kind(&self) -> &'static str {
        match self {
            SubaccountInput::Hex(_) => "hex",
            SubaccountInput::ByteList(_) => "byteList",
            SubaccountInput::Principal(_) => "principal",
        }
    }

    /// The raw text as entered
    pub fn value(&self) -> &str {
        match self {
            SubaccountInput::Hex(v) | SubaccountInput::ByteList(v) | SubaccountInput::Principal(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged() {
        let input: SubaccountInput =
            serde_json::from_str(r#"{"kind":"byteList","value":"1, 2"}"#).unwrap();
        assert_eq!(input, SubaccountInput::ByteList("1, 2".to_string()));

        let input: SubaccountInput =
            serde_json::from_str(r#"{"kind":"hex","value":"0xff"}"#).unwrap();
        assert_eq!(input.kind(), "hex");
        assert_eq!(input.value(), "0xff");
    }

    #[test]
    fn test_unknown_kind() {
        assert!(serde_json::from_str::<SubaccountInput>(r#"{"kind":"base64","value":"AA=="}"#).is_err());
        assert_eq!(SubaccountInput::from_kind("base64", "AA=="), None);
    }

    #[test]
    fn test_from_kind_matches_kind() {
        for kind in ["hex", "byteList", "principal"] {
            let input = SubaccountInput::from_kind(kind, "x").unwrap();
            assert_eq!(input.kind(), kind);
        }
    }
}
