//! Account parsing for user-entered destinations
//!
//! Routes text through the address classifier, then either decodes a compact
//! address or parses a bare principal and attaches a manually entered subaccount.

use crate::account::Account;
use crate::address::{classify_address_for, decode_compact_address, AddressShape};
use crate::error::AccountError;
use crate::principal::Identity;
use crate::subaccount::{resolve_subaccount, DEFAULT_SUBACCOUNT};
use crate::types::SubaccountInput;

/// Parse a destination account
///
/// # Arguments
/// * `text` - Compact address or bare owner text
/// * `manual` - Separately entered subaccount, used only for bare owner text
///
/// # Returns
/// * `Ok(Some(account))` - Complete, validated account
/// * `Ok(None)` - Owner text is not complete yet; keep waiting for input
/// * `Err(_)` - Fully formed but wrong; must block the transfer
///
/// Owner text that fails to parse counts as incomplete while it is shorter than
/// [`Identity::max_text_len`], since typing more may still make it valid. A
/// mistyped principal of intermediate length therefore stays `Ok(None)`; at
/// full length the parse error is returned.
pub fn parse_account<I: Identity>(
    text: &str,
    manual: Option<&SubaccountInput>,
) -> Result<Option<Account<I>>, AccountError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    match classify_address_for::<I>(text) {
        AddressShape::CompactAddress => {
            if manual.is_some() {
                log::debug!("compact address carries its own subaccount; ignoring manual input");
            }
            decode_compact_address(text).map(Some)
        }
        AddressShape::BareIdentity => {
            let owner = match I::parse_text(text) {
                Ok(owner) => owner,
                // Nothing can be appended to a full-length owner except a checksum.
                Err(e)
                    if I::max_text_len().is_some_and(|max| text.len() >= max)
                        && I::has_text_shape(text) =>
                {
                    return Err(e);
                }
                Err(e) => {
                    log::debug!("owner text not complete: {}", e);
                    return Ok(None);
                }
            };
            let subaccount = match manual {
                Some(input) => resolve_subaccount::<I>(input)?,
                None => None,
            };
            Ok(Some(Account {
                owner,
                subaccount: subaccount.unwrap_or(DEFAULT_SUBACCOUNT),
            }))
        }
        AddressShape::Invalid => Err(AccountError::InvalidPrincipalFormat(format!(
            "{} is neither a principal nor an account address",
            text
        ))),
    }
}
