//! ISO-8859-15 (Latin-9) single-byte codepage
//!
//! Latin-9 matches Latin-1 everywhere except eight positions, which carry the
//! euro sign and a few French and Finnish letters instead of rarely used symbols.

use crate::error::{XcomError, XcomResult};

/// Positions where ISO-8859-15 departs from ISO-8859-1
const OVERRIDES: [(u8, char); 8] = [
    (0xA4, '€'),
    (0xA6, 'Š'),
    (0xA8, 'š'),
    (0xB4, 'Ž'),
    (0xB8, 'ž'),
    (0xBC, 'Œ'),
    (0xBD, 'œ'),
    (0xBE, 'Ÿ'),
];

fn decode_byte(b: u8) -> char {
    OVERRIDES
        .iter()
        .find(|(byte, _)| *byte == b)
        .map(|(_, c)| *c)
        .unwrap_or(b as char)
}

fn encode_char(c: char) -> Option<u8> {
    if let Some((byte, _)) = OVERRIDES.iter().find(|(_, ch)| *ch == c) {
        return Some(*byte);
    }
    let code = c as u32;
    if code > 0xFF {
        return None;
    }
    let byte = code as u8;
    // the Latin-1 characters displaced by the overrides have no Latin-9 byte
    if OVERRIDES.iter().any(|(b, _)| *b == byte) {
        return None;
    }
    Some(byte)
}

/// Decode ISO-8859-15 bytes; every byte value maps to a character
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| decode_byte(b)).collect()
}

/// Encode text to ISO-8859-15
///
/// # Errors
///
/// Returns `InvalidValue` when a character has no ISO-8859-15 representation
pub fn encode(text: &str) -> XcomResult<Vec<u8>> {
    text.chars()
        .map(|c| {
            encode_char(c).ok_or_else(|| {
                XcomError::InvalidValue(format!(
                    "Character {:?} (U+{:04X}) is not representable in ISO-8859-15",
                    c, c as u32
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(decode(b"Xtender 1"), "Xtender 1");
        assert_eq!(encode("Xtender 1").unwrap(), b"Xtender 1".to_vec());
    }

    #[test]
    fn test_euro_sign() {
        assert_eq!(decode(&[0xA4]), "€");
        assert_eq!(encode("5€").unwrap(), vec![b'5', 0xA4]);
    }

    #[test]
    fn test_latin1_shared_range() {
        assert_eq!(decode(&[0xB0, 0x43]), "°C");
        assert_eq!(encode("°C").unwrap(), vec![0xB0, 0x43]);
    }

    #[test]
    fn test_every_byte_survives() {
        let all: Vec<u8> = (0..=0xFFu8).collect();
        assert_eq!(encode(&decode(&all)).unwrap(), all);
    }

    #[test]
    fn test_displaced_latin1_characters_rejected() {
        // U+00A4 CURRENCY SIGN is replaced by the euro sign in Latin-9
        assert!(encode("\u{00A4}").is_err());
        assert!(encode("漢").is_err());
    }
}
