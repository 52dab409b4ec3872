//! ICRC-1 subaccounts and the resolver for manually entered subaccounts.
//!
//! A subaccount is always 32 bytes. Shorter inputs are left-padded with zeros
//! so that the entered value occupies the low-order end.

use crate::error::AccountError;
use crate::principal::Identity;
use crate::types::SubaccountInput;

/// Subaccount length in bytes
pub const SUBACCOUNT_LEN: usize = 32;

/// 32-byte subaccount
pub type Subaccount = [u8; SUBACCOUNT_LEN];

/// The all-zero subaccount, equivalent to "no subaccount" on the ledger
pub const DEFAULT_SUBACCOUNT: Subaccount = [0u8; SUBACCOUNT_LEN];

/// Check whether `bytes` is the 32-byte all-zero default subaccount
pub fn is_default_subaccount(bytes: &[u8]) -> bool {
    bytes.len() == SUBACCOUNT_LEN && bytes.iter().all(|b| *b == 0)
}

/// Lowercase hex without prefix
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex text, with or without `0x` prefix
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, AccountError> {
    let trimmed = strip_hex_prefix(hex_str.trim());
    hex::decode(trimmed)
        .map_err(|e| AccountError::InvalidSubaccountHex(format!("{}: {}", hex_str, e)))
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Left-pad `bytes` into a subaccount
pub fn left_pad(bytes: &[u8]) -> Result<Subaccount, AccountError> {
    if bytes.len() > SUBACCOUNT_LEN {
        return Err(AccountError::SubaccountTooLong {
            max: SUBACCOUNT_LEN,
            actual: bytes.len(),
        });
    }
    let mut subaccount = DEFAULT_SUBACCOUNT;
    subaccount[SUBACCOUNT_LEN - bytes.len()..].copy_from_slice(bytes);
    Ok(subaccount)
}

/// Strip leading zero bytes and hex encode the remainder
///
/// Returns an empty string for the default subaccount.
pub fn trimmed_hex(subaccount: &Subaccount) -> String {
    let first = subaccount
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(SUBACCOUNT_LEN);
    bytes_to_hex(&subaccount[first..])
}

/// Resolve a manually entered subaccount
///
/// Returns `Ok(None)` when the input is blank, so callers can tell an unfilled
/// field apart from a malformed one. `I` is the identity type used for
/// [`SubaccountInput::Principal`].
pub fn resolve_subaccount<I: Identity>(
    input: &SubaccountInput,
) -> Result<Option<Subaccount>, AccountError> {
    let raw = input.value().trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let resolved = match input {
        SubaccountInput::Hex(_) => resolve_hex(raw),
        SubaccountInput::ByteList(_) => resolve_byte_list(raw),
        SubaccountInput::Principal(_) => resolve_principal::<I>(raw),
    };
    if let Err(e) = &resolved {
        log::debug!("rejected {} subaccount input: {}", input.kind(), e);
    }
    resolved.map(Some)
}

fn resolve_hex(raw: &str) -> Result<Subaccount, AccountError> {
    let digits = strip_hex_prefix(raw);
    if digits.is_empty() {
        return Err(AccountError::InvalidSubaccountHex(format!(
            "no hex digits in {}",
            raw
        )));
    }
    if digits.len() > SUBACCOUNT_LEN * 2 {
        return Err(AccountError::SubaccountTooLong {
            max: SUBACCOUNT_LEN * 2,
            actual: digits.len(),
        });
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(AccountError::InvalidSubaccountHex(format!(
            "invalid character {:?} in {}",
            c, raw
        )));
    }
    if digits.len() % 2 != 0 {
        return Err(AccountError::InvalidSubaccountHex(format!(
            "odd number of hex digits in {}",
            raw
        )));
    }
    left_pad(&hex_to_bytes(digits)?)
}

fn resolve_byte_list(raw: &str) -> Result<Subaccount, AccountError> {
    let inner = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(raw);

    // Commas separate entries; whitespace around or instead of them is allowed.
    let mut tokens = Vec::new();
    for part in inner.split(',') {
        let words: Vec<&str> = part.split_whitespace().collect();
        if words.is_empty() {
            return Err(AccountError::InvalidSubaccountByteList(format!(
                "empty entry in {}",
                raw
            )));
        }
        tokens.extend(words);
    }

    if tokens.len() > SUBACCOUNT_LEN {
        return Err(AccountError::SubaccountTooLong {
            max: SUBACCOUNT_LEN,
            actual: tokens.len(),
        });
    }

    let bytes = tokens
        .iter()
        .map(|token| {
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AccountError::InvalidSubaccountByteList(format!(
                    "{:?} is not a decimal number",
                    token
                )));
            }
            token.parse::<u8>().map_err(|_| {
                AccountError::InvalidSubaccountByteList(format!(
                    "{} is out of range 0..=255",
                    token
                ))
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    left_pad(&bytes)
}

fn resolve_principal<I: Identity>(raw: &str) -> Result<Subaccount, AccountError> {
    let identity = I::parse_text(raw).map_err(|e| match e {
        AccountError::InvalidPrincipalFormat(msg) => AccountError::InvalidSubaccountPrincipal(msg),
        other => other,
    })?;
    left_pad(identity.raw_bytes())
}
