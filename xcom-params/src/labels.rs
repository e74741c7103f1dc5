//! Label sets of enumerated values

use crate::catalog;
use crate::datapoint::Datapoint;
use crate::identity::{same_id, Identifier};
use crate::value_tuple::ValueTuple;

// Operating modes of the VarioTrack (11016)
pub const MODE_NIGHT: ValueTuple = ValueTuple::new(0, "MODE_NIGHT");
pub const MODE_STARTUP: ValueTuple = ValueTuple::new(1, "MODE_STARTUP");
pub const MODE_CHARGER: ValueTuple = ValueTuple::new(3, "MODE_CHARGER");
pub const MODE_SECURITY: ValueTuple = ValueTuple::new(5, "MODE_SECURITY");
pub const MODE_OFF: ValueTuple = ValueTuple::new(6, "MODE_OFF");
pub const MODE_CHARGE: ValueTuple = ValueTuple::new(8, "MODE_CHARGE");
pub const MODE_CHARGE_V: ValueTuple = ValueTuple::new(9, "MODE_CHARGE_V");
pub const MODE_CHARGE_I: ValueTuple = ValueTuple::new(10, "MODE_CHARGE_I");
pub const MODE_CHARGE_T: ValueTuple = ValueTuple::new(11, "MODE_CHARGE_T");

// Battery cycle phases (11038)
pub const PHASE_BULK: ValueTuple = ValueTuple::new(0, "PHASE_BULK");
pub const PHASE_ABSORPT: ValueTuple = ValueTuple::new(1, "PHASE_ABSORPT");
pub const PHASE_EQUALIZE: ValueTuple = ValueTuple::new(2, "PHASE_EQUALIZE");
pub const PHASE_FLOATING: ValueTuple = ValueTuple::new(3, "PHASE_FLOATING");
pub const PHASE_R_FLOAT: ValueTuple = ValueTuple::new(6, "PHASE_R_FLOAT");
pub const PHASE_PER_ABS: ValueTuple = ValueTuple::new(7, "PHASE_PER_ABS");

/// All operating modes
pub static OPERATING_MODES: ValueSet = ValueSet::new(
    "operating modes",
    &[
        MODE_NIGHT,
        MODE_STARTUP,
        MODE_CHARGER,
        MODE_SECURITY,
        MODE_OFF,
        MODE_CHARGE,
        MODE_CHARGE_V,
        MODE_CHARGE_I,
        MODE_CHARGE_T,
    ],
);

/// Operating modes in which the charger is actively charging
pub static MODE_CHARGING: ValueSet = ValueSet::new(
    "charging states",
    &[MODE_CHARGE, MODE_CHARGE_V, MODE_CHARGE_I, MODE_CHARGE_T],
);

/// All battery cycle phases
pub static BATTERY_CYCLE_PHASES: ValueSet = ValueSet::new(
    "battery cycle phases",
    &[
        PHASE_BULK,
        PHASE_ABSORPT,
        PHASE_EQUALIZE,
        PHASE_FLOATING,
        PHASE_R_FLOAT,
        PHASE_PER_ABS,
    ],
);

/// Named group of value tuples
#[derive(Debug, Clone, Copy)]
pub struct ValueSet {
    name: &'static str,
    members: &'static [ValueTuple],
}

impl ValueSet {
    pub const fn new(name: &'static str, members: &'static [ValueTuple]) -> Self {
        Self { name, members }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn members(&self) -> &'static [ValueTuple] {
        self.members
    }

    /// Check whether a code, decoded value or tuple belongs to this set
    pub fn contains<I: Identifier>(&self, item: I) -> bool {
        self.find(item).is_some()
    }

    /// Find the member carrying the id of `item`
    pub fn find<I: Identifier>(&self, item: I) -> Option<&'static ValueTuple> {
        self.members.iter().find(|member| same_id(*member, &item))
    }
}

/// Label set describing the codes of a datapoint, if one is known
pub fn labels_for(datapoint: &Datapoint) -> Option<&'static ValueSet> {
    if *datapoint == catalog::PV_OPERATING_MODE {
        Some(&OPERATING_MODES)
    } else if *datapoint == catalog::BATT_CYCLE_PHASE {
        Some(&BATTERY_CYCLE_PHASES)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xcom_core::Value;

    #[test]
    fn test_decoded_charge_is_charging() {
        assert!(MODE_CHARGING.contains(Value::ShortEnum(8)));
        assert!(MODE_CHARGING.contains(8i16));
        assert!(MODE_CHARGING.contains(MODE_CHARGE_T));
    }

    #[test]
    fn test_other_modes_are_not_charging() {
        assert!(!MODE_CHARGING.contains(Value::ShortEnum(3)));
        assert!(!MODE_CHARGING.contains(MODE_NIGHT));
        assert!(!MODE_CHARGING.contains(Value::Float(8.0)));
    }

    #[test]
    fn test_find_label() {
        let tuple = OPERATING_MODES.find(Value::ShortEnum(5)).unwrap();
        assert_eq!(tuple.label, "MODE_SECURITY");
        assert!(OPERATING_MODES.find(Value::ShortEnum(2)).is_none());
        assert_eq!(BATTERY_CYCLE_PHASES.find(7u16), Some(&PHASE_PER_ABS));
    }

    #[test]
    fn test_labels_for_datapoint() {
        assert_eq!(
            labels_for(&catalog::PV_OPERATING_MODE).map(|s| s.name()),
            Some("operating modes")
        );
        // alias sharing id 11016
        assert_eq!(
            labels_for(&catalog::PV_OPERATION_MODE).map(|s| s.name()),
            Some("operating modes")
        );
        assert_eq!(
            labels_for(&catalog::BATT_CYCLE_PHASE).map(|s| s.name()),
            Some("battery cycle phases")
        );
        assert!(labels_for(&catalog::AC_POWER_OUT).is_none());
    }

    #[test]
    fn test_set_sizes() {
        assert_eq!(OPERATING_MODES.members().len(), 9);
        assert_eq!(MODE_CHARGING.members().len(), 4);
        assert_eq!(BATTERY_CYCLE_PHASES.members().len(), 6);
    }
}
