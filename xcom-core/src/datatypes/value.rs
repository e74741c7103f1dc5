//! Typed values exchanged with Xcom devices

use crate::datatypes::DataType;
use serde::Serialize;
use std::fmt;

/// Decoded value of a datapoint
///
/// Each variant corresponds to one `DataType`. Serialization is untagged so a
/// publisher emits the plain value (`true`, `230.5`, `"text"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// Signed 32-bit integer
    Int(i32),
    /// Float 32-bit
    Float(f32),
    /// Short enumeration code, as read from the device (signed)
    ShortEnum(i16),
    /// Long enumeration code
    LongEnum(u32),
    /// Text
    String(String),
    /// Raw bytes
    Bytes(#[serde(with = "serde_bytes")] Vec<u8>),
}

impl Value {
    /// Get the type tag this value decodes from
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Bool(_) => DataType::Bool,
            Value::Int(_) => DataType::SignedInt,
            Value::Float(_) => DataType::Float,
            Value::ShortEnum(_) => DataType::ShortEnum,
            Value::LongEnum(_) => DataType::LongEnum,
            Value::String(_) => DataType::String,
            Value::Bytes(_) => DataType::Bytes,
        }
    }

    /// Get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get any integral value (integer or enumeration code) widened to i64
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(i64::from(*i)),
            Value::ShortEnum(e) => Some(i64::from(*e)),
            Value::LongEnum(e) => Some(i64::from(*e)),
            _ => None,
        }
    }

    /// Get the value as a float; integral values are converted
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => self.as_integer().map(|i| i as f32),
        }
    }

    /// Get the value as text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as raw bytes
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::ShortEnum(e) => write!(f, "{}", e),
            Value::LongEnum(e) => write!(f, "{}", e),
            Value::String(s) => f.write_str(s),
            Value::Bytes(b) => {
                for (i, byte) in b.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:02X}", byte)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_data_type() {
        assert_eq!(Value::Bool(true).data_type(), DataType::Bool);
        assert_eq!(Value::ShortEnum(-1).data_type(), DataType::ShortEnum);
        assert_eq!(Value::Bytes(vec![]).data_type(), DataType::Bytes);
    }

    #[test]
    fn test_as_integer_widens_enums() {
        assert_eq!(Value::ShortEnum(-2).as_integer(), Some(-2));
        assert_eq!(Value::LongEnum(u32::MAX).as_integer(), Some(4_294_967_295));
        assert_eq!(Value::Float(1.0).as_integer(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::from("MODE").to_string(), "MODE");
        assert_eq!(Value::Bytes(vec![0x01, 0xAB]).to_string(), "01 AB");
    }
}
