//! Wire type tags of Xcom datapoints

use crate::error::{XcomError, XcomResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type tag attached to every datapoint, selecting the codec rule for its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Single byte, nonzero is true
    #[serde(rename = "BOOL")]
    Bool,
    /// Little-endian signed 32-bit integer
    #[serde(rename = "INTEGER")]
    SignedInt,
    /// IEEE-754 binary32, little-endian
    #[serde(rename = "FLOAT")]
    Float,
    /// 16-bit enumeration: read as signed, written as unsigned
    #[serde(rename = "ENUM_SHORT")]
    ShortEnum,
    /// Little-endian unsigned 32-bit enumeration
    #[serde(rename = "ENUM_LONG")]
    LongEnum,
    /// ISO-8859-15 text of variable length
    #[serde(rename = "STRING")]
    String,
    /// Opaque bytes of variable length
    #[serde(rename = "BYTES")]
    Bytes,
}

impl DataType {
    /// All type tags in wire tag order
    pub const ALL: [DataType; 7] = [
        DataType::Bool,
        DataType::SignedInt,
        DataType::Float,
        DataType::ShortEnum,
        DataType::LongEnum,
        DataType::String,
        DataType::Bytes,
    ];

    /// Tag string used on the wire and in catalogs
    pub fn tag(&self) -> &'static str {
        match self {
            DataType::Bool => "BOOL",
            DataType::SignedInt => "INTEGER",
            DataType::Float => "FLOAT",
            DataType::ShortEnum => "ENUM_SHORT",
            DataType::LongEnum => "ENUM_LONG",
            DataType::String => "STRING",
            DataType::Bytes => "BYTES",
        }
    }

    /// Payload width in bytes, `None` for variable-width types
    pub fn wire_width(&self) -> Option<usize> {
        match self {
            DataType::Bool => Some(1),
            DataType::ShortEnum => Some(2),
            DataType::SignedInt | DataType::Float | DataType::LongEnum => Some(4),
            DataType::String | DataType::Bytes => None,
        }
    }

    /// Check if values of this type are integral codes
    pub fn is_enum(&self) -> bool {
        matches!(self, DataType::ShortEnum | DataType::LongEnum)
    }
}

impl FromStr for DataType {
    type Err = XcomError;

    fn from_str(s: &str) -> XcomResult<Self> {
        DataType::ALL
            .iter()
            .copied()
            .find(|t| t.tag() == s)
            .ok_or_else(|| XcomError::UnsupportedType(s.to_string()))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        for t in DataType::ALL {
            assert_eq!(t.tag().parse::<DataType>().unwrap(), t);
        }
    }

    #[test]
    fn test_parse_unknown_tag() {
        match "DOUBLE".parse::<DataType>() {
            Err(XcomError::UnsupportedType(tag)) => assert_eq!(tag, "DOUBLE"),
            other => panic!("Expected UnsupportedType, got {:?}", other),
        }
    }

    #[test]
    fn test_wire_width() {
        assert_eq!(DataType::Bool.wire_width(), Some(1));
        assert_eq!(DataType::ShortEnum.wire_width(), Some(2));
        assert_eq!(DataType::Float.wire_width(), Some(4));
        assert_eq!(DataType::String.wire_width(), None);
    }
}
