//! OUI (vendor prefix) type with notation-agnostic parsing.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of hex digits in a full MAC address.
const MAC_HEX_DIGITS: usize = 12;

/// Number of hex digits in an OUI.
const OUI_HEX_DIGITS: usize = 6;

/// Organizationally Unique Identifier: the first three octets of a MAC.
///
/// Switches print MAC addresses in several notations, so both
/// [`Oui::from_mac_text`] and [`FromStr`] accept Cisco dotted groups of
/// four digits, colon or hyphen separated octets, and bare hex.
///
/// # Examples
///
/// ```
/// use macmap_types::Oui;
///
/// let oui = Oui::from_mac_text("aabb.cc11.2233").unwrap();
/// assert_eq!(oui.to_string(), "aa:bb:cc");
///
/// // Same vendor, different notation
/// let other = Oui::from_mac_text("AA-BB-CC-44-55-66").unwrap();
/// assert_eq!(oui, other);
///
/// // OUI keys parse on their own as well
/// let key: Oui = "aabb.cc".parse().unwrap();
/// assert_eq!(oui, key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Oui([u8; 3]);

impl Oui {
    /// Creates a new OUI from raw bytes.
    pub const fn new(bytes: [u8; 3]) -> Self {
        Oui(bytes)
    }

    /// Extracts the OUI from a full MAC address in any common notation.
    ///
    /// Accepts Cisco dotted (`aabb.ccdd.eeff`), colon, hyphen and bare hex
    /// forms. The text must contain exactly 12 hex digits.
    pub fn from_mac_text(mac: &str) -> Result<Self, ParseError> {
        let digits = hex_digits(mac, MAC_HEX_DIGITS)
            .ok_or_else(|| ParseError::InvalidMacAddress(mac.to_string()))?;
        Ok(Self::from_digits(&digits))
    }

    fn from_digits(digits: &[u8]) -> Self {
        let mut bytes = [0u8; 3];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (digits[2 * i] << 4) | digits[2 * i + 1];
        }
        Oui(bytes)
    }
}

/// Collects hex nibbles from `s` written in one of the supported notations.
///
/// Dotted text uses groups of four digits (the last group of an OUI key
/// has two); colon and hyphen text uses groups of two. A single separator
/// kind is allowed per text. Returns `None` on any other shape or if the
/// digit count is not exactly `expected`.
fn hex_digits(s: &str, expected: usize) -> Option<Vec<u8>> {
    let s = s.trim();
    let separator = s.chars().find(|c| matches!(c, '.' | ':' | '-'));
    let groups: Vec<&str> = match separator {
        Some(sep) => s.split(sep).collect(),
        None => vec![s],
    };

    let well_formed = match separator {
        None => true,
        Some('.') => groups.split_last().is_some_and(|(last, rest)| {
            rest.iter().all(|group| group.len() == 4) && matches!(last.len(), 2 | 4)
        }),
        Some(_) => groups.iter().all(|group| group.len() == 2),
    };
    if !well_formed {
        return None;
    }

    let mut digits = Vec::with_capacity(expected);
    for c in groups.iter().flat_map(|group| group.chars()) {
        digits.push(c.to_digit(16)? as u8);
    }
    (digits.len() == expected).then_some(digits)
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}:{:02x}:{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for Oui {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits =
            hex_digits(s, OUI_HEX_DIGITS).ok_or_else(|| ParseError::InvalidOui(s.to_string()))?;
        Ok(Self::from_digits(&digits))
    }
}

impl TryFrom<String> for Oui {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Oui> for String {
    fn from(oui: Oui) -> String {
        oui.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_cisco_dotted_mac() {
        let oui = Oui::from_mac_text("0011.2233.4455").unwrap();
        assert_eq!(oui, Oui::new([0x00, 0x11, 0x22]));
    }

    #[test]
    fn test_from_colon_and_hyphen_mac() {
        let colon = Oui::from_mac_text("00:11:22:33:44:55").unwrap();
        let hyphen = Oui::from_mac_text("00-11-22-33-44-55").unwrap();
        let bare = Oui::from_mac_text("001122334455").unwrap();
        assert_eq!(colon, hyphen);
        assert_eq!(colon, bare);
    }

    #[test]
    fn test_mac_text_is_case_insensitive() {
        let upper = Oui::from_mac_text("AABB.CCDD.EEFF").unwrap();
        let lower = Oui::from_mac_text("aabb.ccdd.eeff").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "aa:bb:cc");
    }

    #[test]
    fn test_invalid_mac_text() {
        assert!(Oui::from_mac_text("").is_err());
        assert!(Oui::from_mac_text("aabb.ccdd").is_err());
        assert!(Oui::from_mac_text("aabb.ccdd.eeff.0011").is_err());
        assert!(Oui::from_mac_text("gggg.ccdd.eeff").is_err());
        assert!(Oui::from_mac_text("Gi1/0/1").is_err());
    }

    #[test]
    fn test_parse_oui_key_notations() {
        let expected = Oui::new([0xaa, 0xbb, 0xcc]);
        for key in ["aabb.cc", "AA:BB:CC", "aa-bb-cc", "AABBCC"] {
            assert_eq!(key.parse::<Oui>().unwrap(), expected, "key {key}");
        }
    }

    #[test]
    fn test_parse_oui_rejects_full_mac() {
        assert!("aabb.ccdd.eeff".parse::<Oui>().is_err());
        assert!("aabb".parse::<Oui>().is_err());
    }

    #[test]
    fn test_misplaced_separators_are_rejected() {
        assert!(Oui::from_mac_text("a.a.b.b.c.c.1.1.2.2.3.3").is_err());
        assert!(Oui::from_mac_text("aabb::cc11..2233").is_err());
        assert!(Oui::from_mac_text("aa:bb:cc-11-22-33").is_err());
        assert!(Oui::from_mac_text("aab.bcc1.12233").is_err());
        assert!(Oui::from_mac_text("aabbcc:112233").is_err());
        assert!(Oui::from_mac_text("aabb.cc11.2233.").is_err());
        assert!("aa.bb.cc".parse::<Oui>().is_err());
        assert!("aabb:cc".parse::<Oui>().is_err());
    }

    #[test]
    fn test_serde_string_form() {
        let oui = Oui::new([0x00, 0x1b, 0x54]);
        let s: String = oui.into();
        assert_eq!(s, "00:1b:54");
        assert_eq!(Oui::try_from(s).unwrap(), oui);
    }
}
