use thiserror::Error;

use crate::datatypes::DataType;

/// Main error type for Xcom operations
#[derive(Error, Debug)]
pub enum XcomError {
    #[error("Unknown datapoint: {0}")]
    UnknownDatapoint(u32),

    #[error("Unknown datapoint name: {0}")]
    UnknownDatapointName(String),

    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Malformed {data_type} value: expected {expected} byte(s), got {actual}")]
    MalformedValue {
        data_type: DataType,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Device error {name} (0x{code:04X})")]
    Device { code: u16, name: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),
}

/// Result type alias for Xcom operations
pub type XcomResult<T> = Result<T, XcomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_value_message() {
        let err = XcomError::MalformedValue {
            data_type: DataType::Float,
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Malformed FLOAT value: expected 4 byte(s), got 2"
        );
    }

    #[test]
    fn test_device_error_message() {
        let err = XcomError::Device {
            code: 0x22,
            name: "OBJECT_ID_NOT_FOUND".to_string(),
        };
        assert_eq!(err.to_string(), "Device error OBJECT_ID_NOT_FOUND (0x0022)");
    }
}
