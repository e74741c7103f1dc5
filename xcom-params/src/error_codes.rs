//! Device error code table
//!
//! Maps the 2-byte status code of a failed response to its symbolic name.
//! Unknown codes are surfaced as their raw value rather than rejected.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const ERROR_CODES: &[(u16, &str)] = &[
    (0x0001, "INVALID_FRAME"),
    (0x0002, "DEVICE_NOT_FOUND"),
    (0x0003, "RESPONSE_TIMEOUT"),
    (0x0011, "SERVICE_NOT_SUPPORTED"),
    (0x0012, "INVALID_SERVICE_ARGUMENT"),
    (0x0013, "SCOM_ERROR_GATEWAY_BUSY"),
    (0x0021, "TYPE_NOT_SUPPORTED"),
    (0x0022, "OBJECT_ID_NOT_FOUND"),
    (0x0023, "PROPERTY_NOT_SUPPORTED"),
    (0x0024, "INVALID_DATA_LENGTH"),
    (0x0025, "PROPERTY_IS_READ_ONLY"),
    (0x0026, "INVALID_DATA"),
    (0x0027, "DATA_TOO_SMALL"),
    (0x0028, "DATA_TOO_BIG"),
    (0x0029, "WRITE_PROPERTY_FAILED"),
    (0x002A, "READ_PROPERTY_FAILED"),
    (0x002B, "ACCESS_DENIED"),
    (0x002C, "SCOM_ERROR_OBJECT_NOT_SUPPORTED"),
    (0x002D, "SCOM_ERROR_MULTICAST_READ_NOT_SUPPORTED"),
    (0x002E, "OBJECT_PROPERTY_INVALID"),
    (0x002F, "FILE_OR_DIR_NOT_PRESENT"),
    (0x0030, "FILE_CORRUPTED"),
    (0x0081, "INVALID_SHELL_ARG"),
];

static ERROR_TABLE: Lazy<HashMap<u16, &'static str>> =
    Lazy::new(|| ERROR_CODES.iter().copied().collect());

/// Read a status code as it appears on the wire (little-endian)
pub fn code_from_wire(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

/// Symbolic name of a status code
pub fn error_name(code: u16) -> Option<&'static str> {
    ERROR_TABLE.get(&code).copied()
}

/// Symbolic name of a status code, or the raw code when it is not in the table
pub fn describe(code: u16) -> String {
    match error_name(code) {
        Some(name) => name.to_string(),
        None => format!("UNKNOWN_ERROR(0x{:04X})", code),
    }
}

/// Every known code with its name, in ascending code order
pub fn all() -> &'static [(u16, &'static str)] {
    ERROR_CODES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(error_name(0x0022), Some("OBJECT_ID_NOT_FOUND"));
        assert_eq!(error_name(code_from_wire([0x2A, 0x00])), Some("READ_PROPERTY_FAILED"));
        assert_eq!(describe(0x0081), "INVALID_SHELL_ARG");
    }

    #[test]
    fn test_unknown_code_keeps_raw_value() {
        assert_eq!(error_name(0x0099), None);
        assert_eq!(describe(0x0099), "UNKNOWN_ERROR(0x0099)");
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        assert_eq!(ERROR_TABLE.len(), all().len());
        assert!(all().windows(2).all(|w| w[0].0 < w[1].0));
    }
}
