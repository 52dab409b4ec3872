//! ICRC-1 account: owner principal plus 32-byte subaccount

use crate::address::{decode_compact_address, encode_compact_address};
use crate::error::AccountError;
use crate::principal::{Identity, Principal};
use crate::subaccount::{
    bytes_to_hex, is_default_subaccount, Subaccount, DEFAULT_SUBACCOUNT, SUBACCOUNT_LEN,
};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Payment destination on an ICRC-1 ledger
///
/// The subaccount is always resolved; "no subaccount" is [`DEFAULT_SUBACCOUNT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account<I: Identity = Principal> {
    pub owner: I,
    pub subaccount: Subaccount,
}

impl<I: Identity> Account<I> {
    /// Account on the default subaccount
    pub fn new(owner: I) -> Self {
        Account {
            owner,
            subaccount: DEFAULT_SUBACCOUNT,
        }
    }

    pub fn with_subaccount(owner: I, subaccount: Subaccount) -> Self {
        Account { owner, subaccount }
    }

    /// Rebuild an account from transfer arguments, where `None` means default
    pub fn from_transfer_args(owner: I, subaccount: Option<Subaccount>) -> Self {
        Account {
            owner,
            subaccount: subaccount.unwrap_or(DEFAULT_SUBACCOUNT),
        }
    }

    pub fn has_default_subaccount(&self) -> bool {
        is_default_subaccount(&self.subaccount)
    }
}

impl<I: Identity> fmt::Display for Account<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_compact_address(self))
    }
}

impl FromStr for Account<Principal> {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_compact_address(s)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountRepr {
    owner: String,
    subaccount: Option<String>,
}

impl<I: Identity> Serialize for Account<I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AccountRepr {
            owner: self.owner.to_text(),
            subaccount: get_subaccount_for_transfer(self).map(|s| bytes_to_hex(&s)),
        }
        .serialize(serializer)
    }
}

/// Subaccount argument for an ICRC-1 transfer
///
/// The default subaccount is omitted so generated requests stay canonical.
pub fn get_subaccount_for_transfer<I: Identity>(account: &Account<I>) -> Option<Subaccount> {
    subaccount_arg_from_slice(&account.subaccount)
}

/// Same as [`get_subaccount_for_transfer`] for raw bytes.
///
/// # Panics
/// If `bytes` is not exactly 32 bytes long. Callers must pass a resolved
/// subaccount; any other length is a bug, not user input.
pub fn subaccount_arg_from_slice(bytes: &[u8]) -> Option<Subaccount> {
    assert_eq!(
        bytes.len(),
        SUBACCOUNT_LEN,
        "transfer subaccount must be {} bytes",
        SUBACCOUNT_LEN
    );
    if is_default_subaccount(bytes) {
        return None;
    }
    let mut subaccount = DEFAULT_SUBACCOUNT;
    subaccount.copy_from_slice(bytes);
    Some(subaccount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> Principal {
        Principal::parse_text("ryjl3-tyaaa-aaaaa-aaaba-cai").unwrap()
    }

    fn subaccount_one() -> Subaccount {
        let mut s = DEFAULT_SUBACCOUNT;
        s[31] = 0x01;
        s
    }

    #[test]
    fn test_transfer_arg_default_is_absent() {
        let account = Account::new(ledger());
        assert!(account.has_default_subaccount());
        assert_eq!(get_subaccount_for_transfer(&account), None);
    }

    #[test]
    fn test_transfer_arg_non_default() {
        let account = Account::with_subaccount(ledger(), subaccount_one());
        assert!(!account.has_default_subaccount());
        assert_eq!(get_subaccount_for_transfer(&account), Some(subaccount_one()));
    }

    #[test]
    fn test_from_transfer_args() {
        assert_eq!(
            Account::from_transfer_args(ledger(), None),
            Account::new(ledger())
        );
        let account = Account::from_transfer_args(ledger(), Some(subaccount_one()));
        assert_eq!(get_subaccount_for_transfer(&account), Some(subaccount_one()));
    }

    #[test]
    #[should_panic(expected = "transfer subaccount must be 32 bytes")]
    fn test_transfer_arg_wrong_length_panics() {
        subaccount_arg_from_slice(&[1u8; 31]);
    }

    #[test]
    fn test_display_and_from_str() {
        let account = Account::with_subaccount(ledger(), subaccount_one());
        let text = account.to_string();
        assert!(text.starts_with("ryjl3-tyaaa-aaaaa-aaaba-cai-"));
        assert!(text.ends_with(".01"));
        assert_eq!(text.parse::<Account>().unwrap(), account);
    }

    #[test]
    fn test_account_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Account>();
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Account::new(ledger())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "owner": "ryjl3-tyaaa-aaaaa-aaaba-cai", "subaccount": null })
        );

        let json = serde_json::to_value(Account::with_subaccount(ledger(), subaccount_one())).unwrap();
        assert_eq!(json["subaccount"], serde_json::json!(format!("{}01", "00".repeat(31))));
    }
}
