//! Decoded readings handed to publishers

use crate::datapoint::Datapoint;
use crate::labels::labels_for;
use serde::Serialize;
use std::fmt;
use xcom_core::Value;

/// A decoded value together with the datapoint it was read from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub datapoint: Datapoint,
    pub value: Value,
}

impl Reading {
    pub fn new(datapoint: Datapoint, value: Value) -> Self {
        Self { datapoint, value }
    }

    pub fn name(&self) -> &'static str {
        self.datapoint.name
    }

    pub fn unit(&self) -> &'static str {
        self.datapoint.unit_str()
    }

    /// Symbolic label of an enumerated reading, when the code is known
    pub fn label(&self) -> Option<&'static str> {
        labels_for(&self.datapoint)
            .and_then(|set| set.find(&self.value))
            .map(|tuple| tuple.label)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ", self.datapoint.name)?;
        match self.label() {
            Some(label) => write!(f, "{}", label)?,
            None => write!(f, "{}", self.value)?,
        }
        if let Some(unit) = self.datapoint.unit {
            write!(f, " {}", unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_display_with_unit() {
        let reading = Reading::new(catalog::BATT_VOLTAGE, Value::Float(51.5));
        assert_eq!(reading.to_string(), "BATT_VOLTAGE = 51.5 V");
        assert_eq!(reading.unit(), "V");
    }

    #[test]
    fn test_display_enum_label() {
        let reading = Reading::new(catalog::PV_OPERATING_MODE, Value::ShortEnum(8));
        assert_eq!(reading.label(), Some("MODE_CHARGE"));
        assert_eq!(reading.to_string(), "PV_OPERATING_MODE = MODE_CHARGE");

        let unknown = Reading::new(catalog::PV_OPERATING_MODE, Value::ShortEnum(42));
        assert_eq!(unknown.to_string(), "PV_OPERATING_MODE = 42");
    }

    #[test]
    fn test_serialize_for_publication() {
        let reading = Reading::new(catalog::AC_POWER_OUT, Value::Float(1.5));
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["datapoint"]["id"], 3136);
        assert_eq!(json["datapoint"]["name"], "AC_POWER_OUT");
        assert_eq!(json["datapoint"]["type"], "FLOAT");
        assert_eq!(json["datapoint"]["unit"], "kW");
        assert_eq!(json["value"], 1.5);
    }
}
