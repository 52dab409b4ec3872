//! Test fixtures shared across modules

use crate::error::AccountError;
use crate::principal::Identity;

/// Identity fixture: raw bytes as lowercase hex in dash-separated groups of four.
///
/// Carries no checksum of its own, so any single-character edit of valid text
/// still parses to a different identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexIdentity(pub Vec<u8>);

const GROUP_LEN: usize = 4;

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

impl Identity for HexIdentity {
    fn parse_text(text: &str) -> Result<Self, AccountError> {
        if !Self::has_text_shape(text) {
            return Err(AccountError::InvalidPrincipalFormat(text.to_string()));
        }
        let digits: String = text.split('-').collect();
        hex::decode(digits)
            .map(HexIdentity)
            .map_err(|e| AccountError::InvalidPrincipalFormat(e.to_string()))
    }

    fn to_text(&self) -> String {
        hex::encode(&self.0)
            .as_bytes()
            .chunks(GROUP_LEN)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join("-")
    }

    fn raw_bytes(&self) -> &[u8] {
        &self.0
    }

    fn has_text_shape(text: &str) -> bool {
        let groups: Vec<&str> = text.split('-').collect();
        match groups.split_last() {
            Some((last, rest)) => {
                rest.iter().all(|g| g.len() == GROUP_LEN && is_lower_hex(g))
                    && (last.len() == 2 || last.len() == GROUP_LEN)
                    && is_lower_hex(last)
            }
            None => false,
        }
    }
}

#[test]
fn test_hex_identity_roundtrip() {
    let id = HexIdentity(vec![0x01, 0x23, 0x45, 0x67, 0x89]);
    assert_eq!(id.to_text(), "0123-4567-89");
    assert_eq!(HexIdentity::parse_text("0123-4567-89").unwrap(), id);
    assert!(HexIdentity::parse_text("0123-456-89").is_err());
}
