//! Owner identity for ICRC-1 accounts.
//!
//! Wraps `ic_principal::Principal` and describes it through the [`Identity`]
//! trait so the account codec does not depend on one concrete identity type.

use crate::error::AccountError;
use std::fmt::Debug;

/// Re-export the underlying Internet Computer principal type.
pub use ic_principal::Principal;

/// Longest principal text: 29 bytes + 4 byte CRC is 53 base32 chars, plus 10 dashes.
pub const MAX_PRINCIPAL_TEXT_LEN: usize = 63;

/// Characters per dash-separated group in principal text.
const GROUP_LEN: usize = 5;

/// Owner identity capability consumed by the account codec.
pub trait Identity: Clone + PartialEq + Debug {
    /// Parse canonical text, verifying any checksum the identity format carries.
    fn parse_text(text: &str) -> Result<Self, AccountError>;

    /// Canonical text form.
    fn to_text(&self) -> String;

    /// Raw bytes that checksums and derived subaccounts are computed from.
    fn raw_bytes(&self) -> &[u8];

    /// Structural test for a complete identity text. No checksum verification.
    fn has_text_shape(text: &str) -> bool;

    /// Structural test for text that may still grow into an identity.
    ///
    /// Defaults to [`Identity::has_text_shape`], so implementors that keep the
    /// default classify incomplete text as invalid rather than as a bare identity.
    fn has_partial_text_shape(text: &str) -> bool {
        Self::has_text_shape(text)
    }

    /// Longest possible text form, if bounded. Text that long which still
    /// fails to parse cannot be completed by typing more.
    fn max_text_len() -> Option<usize> {
        None
    }
}

impl Identity for Principal {
    fn parse_text(text: &str) -> Result<Self, AccountError> {
        Principal::from_text_checked(text)
    }

    fn to_text(&self) -> String {
        self.to_string()
    }

    fn raw_bytes(&self) -> &[u8] {
        self.as_slice()
    }

    fn has_text_shape(text: &str) -> bool {
        if text.is_empty() || text.len() > MAX_PRINCIPAL_TEXT_LEN {
            return false;
        }
        let groups: Vec<&str> = text.split('-').collect();
        let (last, rest) = match groups.split_last() {
            Some(split) => split,
            None => return false,
        };
        rest.iter()
            .all(|g| g.len() == GROUP_LEN && is_base32(g))
            && (1..=GROUP_LEN).contains(&last.len())
            && is_base32(last)
    }

    fn has_partial_text_shape(text: &str) -> bool {
        if text.is_empty() || text.len() > MAX_PRINCIPAL_TEXT_LEN {
            return false;
        }
        let groups: Vec<&str> = text.split('-').collect();
        let (last, rest) = match groups.split_last() {
            Some(split) => split,
            None => return false,
        };
        // A trailing dash leaves an empty last group while typing.
        rest.iter()
            .all(|g| g.len() == GROUP_LEN && is_base32(g))
            && last.len() <= GROUP_LEN
            && is_base32(last)
    }

    fn max_text_len() -> Option<usize> {
        Some(MAX_PRINCIPAL_TEXT_LEN)
    }
}

/// RFC 4648 base32 alphabet, matched case-insensitively.
fn is_base32(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_alphabetic() || (b'2'..=b'7').contains(&b))
}

/// Extension trait for Principal to return `AccountError`.
pub trait PrincipalExt {
    fn from_text_checked(text: &str) -> Result<Principal, AccountError>;
}

impl PrincipalExt for Principal {
    /// Parse principal text, including its embedded CRC-32.
    fn from_text_checked(text: &str) -> Result<Principal, AccountError> {
        Principal::from_text(text)
            .map_err(|e| AccountError::InvalidPrincipalFormat(format!("{}: {}", text, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_well_known_principals() {
        let management = Principal::parse_text("aaaaa-aa").unwrap();
        assert_eq!(management, Principal::management_canister());
        assert!(management.raw_bytes().is_empty());

        let anonymous = Principal::parse_text("2vxsx-fae").unwrap();
        assert_eq!(anonymous, Principal::anonymous());
        assert_eq!(anonymous.raw_bytes(), &[0x04]);
    }

    #[test]
    fn test_roundtrip() {
        let text = "ryjl3-tyaaa-aaaaa-aaaba-cai";
        let principal = Principal::parse_text(text).unwrap();
        assert_eq!(Identity::to_text(&principal), text);
        assert_eq!(
            principal.raw_bytes(),
            &[0, 0, 0, 0, 0, 0, 0, 2, 1, 1]
        );
    }

    #[rstest]
    #[case("")]
    #[case("ryjl3-tyaaa-aaaaa-aaaba-cab")]
    #[case("ryjl3tyaaaaaaaaaaabacai")]
    #[case("not a principal")]
    fn test_invalid_text(#[case] text: &str) {
        assert!(matches!(
            Principal::parse_text(text),
            Err(AccountError::InvalidPrincipalFormat(_))
        ));
    }

    #[rstest]
    #[case("aaaaa-aa", true)]
    #[case("2vxsx-fae", true)]
    #[case("ryjl3-tyaaa-aaaaa-aaaba-cai", true)]
    #[case("RYJL3-TYAAA-AAAAA-AAABA-CAI", true)]
    #[case("ryjl3-tyaaa-aaaaa-aaaba-cai-", false)]
    #[case("ryjl3-tyaa-aaaaa", false)]
    #[case("ryjl3-tyaaa-aaaaa-aaaba-caiaaaa", false)]
    #[case("ryjl1-tyaaa", false)]
    #[case("", false)]
    fn test_text_shape(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(Principal::has_text_shape(text), expected);
    }

    #[rstest]
    #[case("r", true)]
    #[case("ryjl3-", true)]
    #[case("ryjl3-ty", true)]
    #[case("ryjl-", false)]
    #[case("ryjl3--", false)]
    #[case("ryjl3!", false)]
    fn test_partial_text_shape(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(Principal::has_partial_text_shape(text), expected);
    }
}
