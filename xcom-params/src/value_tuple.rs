//! Named codes of enumerated values

use crate::identity::Identifier;
use serde::Serialize;
use std::fmt;
use xcom_core::Value;

/// One discrete state of an enumerated parameter
///
/// Compares by `id` only, and against decoded enumeration values directly.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValueTuple {
    /// Numeric code on the wire
    pub id: i64,
    /// Symbolic name
    pub label: &'static str,
}

impl ValueTuple {
    pub const fn new(id: i64, label: &'static str) -> Self {
        Self { id, label }
    }
}

impl Identifier for ValueTuple {
    fn identity(&self) -> Option<i64> {
        Some(self.id)
    }
}

impl PartialEq for ValueTuple {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValueTuple {}

impl PartialEq<Value> for ValueTuple {
    fn eq(&self, other: &Value) -> bool {
        other.as_integer() == Some(self.id)
    }
}

impl PartialEq<ValueTuple> for Value {
    fn eq(&self, other: &ValueTuple) -> bool {
        other == self
    }
}

impl PartialEq<i64> for ValueTuple {
    fn eq(&self, other: &i64) -> bool {
        self.id == *other
    }
}

impl fmt::Display for ValueTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOATING: ValueTuple = ValueTuple::new(3, "PHASE_FLOATING");

    #[test]
    fn test_compare_with_decoded_value() {
        assert!(Value::ShortEnum(3) == FLOATING);
        assert!(FLOATING == Value::LongEnum(3));
        assert!(FLOATING != Value::ShortEnum(2));
        assert!(FLOATING != Value::from("3"));
    }

    #[test]
    fn test_compare_ignores_label() {
        assert_eq!(FLOATING, ValueTuple::new(3, "OTHER"));
        assert!(FLOATING == 3i64);
        assert!(FLOATING != 4i64);
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(FLOATING.to_string(), "PHASE_FLOATING");
    }
}
