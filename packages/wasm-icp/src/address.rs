//! Compact account address encoding and decoding
//!
//! A compact address packs an account into one string:
//!
//! ```text
//! {owner}-{checksum}[.{subaccount hex}]
//! ```
//!
//! The checksum is CRC-32 over the owner's raw bytes, big-endian, written as
//! unpadded lowercase base32 (always 7 characters). The subaccount tail is only
//! present for non-default subaccounts and is emitted with leading zero bytes
//! removed. Decoding accepts any tail of up to 64 hex digits.

use crate::account::Account;
use crate::error::AccountError;
use crate::principal::{Identity, Principal};
use crate::subaccount::{hex_to_bytes, left_pad, trimmed_hex, DEFAULT_SUBACCOUNT, SUBACCOUNT_LEN};
use data_encoding::BASE32_NOPAD;
use serde::Serialize;

/// Checksum width in characters
pub const CHECKSUM_LEN: usize = 7;

/// Longest accepted subaccount tail in hex digits
const MAX_TAIL_LEN: usize = SUBACCOUNT_LEN * 2;

/// Structural classification of user-entered address text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressShape {
    /// Plain owner text, possibly incomplete; a subaccount may be entered separately
    BareIdentity,
    /// `{owner}-{checksum}[.{hex}]`; the subaccount is part of the text
    CompactAddress,
    /// Neither shape
    Invalid,
}

impl AddressShape {
    /// Name as used on the JS side
    pub fn as_str(self) -> &'static str {
        match self {
            AddressShape::BareIdentity => "bareIdentity",
            AddressShape::CompactAddress => "compactAddress",
            AddressShape::Invalid => "invalid",
        }
    }
}

/// Calculate the address checksum (CRC-32 of owner bytes, base32)
pub fn owner_checksum(owner_bytes: &[u8]) -> String {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(owner_bytes);
    let crc = hasher.finalize().to_be_bytes();
    BASE32_NOPAD.encode(&crc).to_ascii_lowercase()
}

/// Encode an account to its compact address
pub fn encode_compact_address<I: Identity>(account: &Account<I>) -> String {
    let owner = account.owner.to_text();
    let checksum = owner_checksum(account.owner.raw_bytes());
    if account.has_default_subaccount() {
        format!("{}-{}", owner, checksum)
    } else {
        format!("{}-{}.{}", owner, checksum, trimmed_hex(&account.subaccount))
    }
}

/// Decode a compact address, verifying its checksum
pub fn decode_compact_address<I: Identity>(text: &str) -> Result<Account<I>, AccountError> {
    let text = text.trim();
    let (head, tail) = match text.split_once('.') {
        Some((head, tail)) => (head, Some(tail)),
        None => (text, None),
    };

    let (owner_text, checksum) = head
        .rsplit_once('-')
        .filter(|(owner, checksum)| !owner.is_empty() && !checksum.is_empty())
        .ok_or_else(|| {
            AccountError::InvalidPrincipalFormat(format!(
                "{} is not of the form owner-checksum",
                head
            ))
        })?;

    let owner = I::parse_text(owner_text)?;

    let expected = owner_checksum(owner.raw_bytes());
    if !expected.eq_ignore_ascii_case(checksum) {
        log::debug!(
            "checksum mismatch for {}: expected {}, got {}",
            owner_text,
            expected,
            checksum
        );
        return Err(AccountError::ChecksumMismatch {
            expected,
            actual: checksum.to_string(),
        });
    }

    let subaccount = match tail {
        Some(tail) => decode_tail(tail)?,
        None => DEFAULT_SUBACCOUNT,
    };

    Ok(Account { owner, subaccount })
}

fn decode_tail(tail: &str) -> Result<[u8; SUBACCOUNT_LEN], AccountError> {
    if tail.is_empty() {
        return Err(AccountError::InvalidSubaccountHex(
            "empty subaccount after '.'".to_string(),
        ));
    }
    if tail.len() > MAX_TAIL_LEN {
        return Err(AccountError::SubaccountTooLong {
            max: MAX_TAIL_LEN,
            actual: tail.len(),
        });
    }
    if !is_hex(tail) {
        return Err(AccountError::InvalidSubaccountHex(format!(
            "{} is not hex",
            tail
        )));
    }
    // Trimmed tails may have an odd number of digits.
    let bytes = if tail.len() % 2 == 1 {
        hex_to_bytes(&format!("0{}", tail))?
    } else {
        hex_to_bytes(tail)?
    };
    left_pad(&bytes)
}

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Classify principal-based address text without verifying any checksum
pub fn classify_address(text: &str) -> AddressShape {
    classify_address_for::<Principal>(text)
}

/// Classify address text for an arbitrary owner identity type
pub fn classify_address_for<I: Identity>(text: &str) -> AddressShape {
    let text = text.trim();
    if text.is_empty() {
        return AddressShape::Invalid;
    }
    if has_compact_shape::<I>(text) {
        AddressShape::CompactAddress
    } else if I::has_partial_text_shape(text) || has_partial_compact_shape::<I>(text) {
        AddressShape::BareIdentity
    } else {
        log::debug!("address text matches no known shape");
        AddressShape::Invalid
    }
}

/// Whether principal-based text is shaped like a compact address
pub fn looks_like_compact_address(text: &str) -> bool {
    classify_address(text) == AddressShape::CompactAddress
}

fn has_compact_shape<I: Identity>(text: &str) -> bool {
    let head = match text.rsplit_once('.') {
        Some((head, tail)) => {
            if tail.is_empty() || tail.len() > MAX_TAIL_LEN || !is_hex(tail) {
                return false;
            }
            head
        }
        None => text,
    };

    // Owner text contains dashes too, so only the last one separates the checksum.
    match head.rsplit_once('-') {
        Some((owner, checksum)) => {
            // Width only: a mistyped checksum character must still reach decode
            // and fail there as a checksum mismatch.
            checksum.len() == CHECKSUM_LEN && I::has_text_shape(owner)
        }
        None => false,
    }
}

/// Compact address still being typed: checksum or tail incomplete
fn has_partial_compact_shape<I: Identity>(text: &str) -> bool {
    let (head, has_tail) = match text.rsplit_once('.') {
        Some((head, tail)) => {
            if tail.len() > MAX_TAIL_LEN || !is_hex(tail) {
                return false;
            }
            (head, true)
        }
        None => (text, false),
    };
    match head.rsplit_once('-') {
        Some((owner, checksum)) => {
            let checksum_ok = if has_tail {
                checksum.len() == CHECKSUM_LEN
            } else {
                checksum.len() <= CHECKSUM_LEN
            };
            checksum_ok
                && checksum.bytes().all(|b| b.is_ascii_alphanumeric())
                && I::has_text_shape(owner)
        }
        None => false,
    }
}
