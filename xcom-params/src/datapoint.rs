//! Datapoint: one addressable parameter of an Xcom device

use crate::constants::ObjectType;
use crate::identity::Identifier;
use bytes::Bytes;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use xcom_core::{codec, DataType, Value, XcomResult};

/// Catalog entry describing one device parameter
///
/// Two datapoints are equal when their ids are equal; name, type and unit are
/// ignored. A datapoint also compares equal to a bare `u16` matching its id.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Datapoint {
    /// Numeric object id on the wire
    pub id: u16,
    /// Parameter name
    pub name: &'static str,
    /// Wire type of the payload
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Display unit, if any
    pub unit: Option<&'static str>,
}

impl Datapoint {
    /// Create a datapoint without unit
    pub const fn new(id: u16, name: &'static str, data_type: DataType) -> Self {
        Self {
            id,
            name,
            data_type,
            unit: None,
        }
    }

    /// Attach a display unit
    pub const fn with_unit(self, unit: &'static str) -> Self {
        Self {
            unit: Some(unit),
            ..self
        }
    }

    /// Display unit, empty when the datapoint has none
    pub fn unit_str(&self) -> &'static str {
        self.unit.unwrap_or("")
    }

    /// Object type used to address this datapoint
    ///
    /// Ids in the user-info blocks (3xxx Xtender, 7xxx BSP, 11xxx VarioTrack,
    /// 15xxx VarioString) are read-only infos; everything else is a parameter.
    pub fn object_type(&self) -> ObjectType {
        match self.id {
            3000..=3999 | 7000..=7999 | 11000..=11999 | 15000..=15999 => ObjectType::Info,
            _ => ObjectType::Parameter,
        }
    }

    /// Decode a payload read for this datapoint
    pub fn decode(&self, bytes: &[u8]) -> XcomResult<Value> {
        codec::decode(self.data_type, bytes)
    }

    /// Encode a value to be written to this datapoint
    pub fn encode(&self, value: &Value) -> XcomResult<Bytes> {
        codec::encode(self.data_type, value)
    }

    /// Check whether `other` carries this datapoint's id
    pub fn matches<I: Identifier>(&self, other: I) -> bool {
        crate::identity::same_id(self, other)
    }
}

impl Identifier for Datapoint {
    fn identity(&self) -> Option<i64> {
        Some(i64::from(self.id))
    }
}

impl PartialEq for Datapoint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Datapoint {}

impl Hash for Datapoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq<u16> for Datapoint {
    fn eq(&self, other: &u16) -> bool {
        self.id == *other
    }
}

impl PartialEq<Datapoint> for u16 {
    fn eq(&self, other: &Datapoint) -> bool {
        *self == other.id
    }
}

impl fmt::Display for Datapoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOLTAGE: Datapoint = Datapoint::new(3011, "AC_VOLTAGE_IN", DataType::Float).with_unit("V");

    #[test]
    fn test_equality_ignores_other_fields() {
        let alias = Datapoint::new(3011, "SOMETHING_ELSE", DataType::Bool);
        assert_eq!(VOLTAGE, alias);
        assert_ne!(VOLTAGE, Datapoint::new(3012, "AC_VOLTAGE_IN", DataType::Float));
    }

    #[test]
    fn test_equality_with_raw_id() {
        assert!(VOLTAGE == 3011u16);
        assert!(3011u16 == VOLTAGE);
        assert!(VOLTAGE != 3012u16);
        assert!(VOLTAGE.matches(3011i32));
    }

    #[test]
    fn test_unit() {
        assert_eq!(VOLTAGE.unit_str(), "V");
        assert_eq!(Datapoint::new(1126, "SMART_BOOST_ALLOWED", DataType::Bool).unit_str(), "");
    }

    #[test]
    fn test_object_type() {
        assert_eq!(VOLTAGE.object_type(), ObjectType::Info);
        assert_eq!(
            Datapoint::new(1107, "MAX_CURR_AC_SOURCE", DataType::Float).object_type(),
            ObjectType::Parameter
        );
        assert_eq!(
            Datapoint::new(6062, "SOC_LEVEL_FOR_BACKUP", DataType::Float).object_type(),
            ObjectType::Parameter
        );
    }

    #[test]
    fn test_decode_uses_type() {
        assert_eq!(
            VOLTAGE.decode(&[0x00, 0x00, 0x80, 0x3F]).unwrap(),
            Value::Float(1.0)
        );
        assert!(VOLTAGE.decode(&[0x01]).is_err());
    }
}
