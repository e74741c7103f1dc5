//! Built-in datapoint catalog
//!
//! Entries are listed in catalog order. Several ids are shared by differently
//! named entries (1138, 3049, 3085, 3089, 11016) and the name `BATT_VOLTAGE`
//! is used twice; the entries are kept as listed and the registry reports the
//! collisions when it is built.

use crate::datapoint::Datapoint;
use xcom_core::DataType;

// Xtender parameters (writable)
pub const MAX_CURR_AC_SOURCE: Datapoint = Datapoint::new(1107, "MAX_CURR_AC_SOURCE", DataType::Float);
pub const SMART_BOOST_ALLOWED: Datapoint = Datapoint::new(1126, "SMART_BOOST_ALLOWED", DataType::Bool);
pub const BATTERY_CHARGE_CURR: Datapoint = Datapoint::new(1138, "BATTERY_CHARGE_CURR", DataType::Float);
pub const MAX_GRID_FEEDING_CURR: Datapoint = Datapoint::new(1523, "MAX_GRID_FEEDING_CURR", DataType::Float);
pub const SMART_BOOST_LIMIT: Datapoint = Datapoint::new(1607, "SMART_BOOST_LIMIT", DataType::Float);
pub const BATT_CHARGE_CURRENT: Datapoint = Datapoint::new(1138, "BATT_CHARGE_CURRENT", DataType::Float);
pub const BATT_ABSORPTION_VOLTAGE: Datapoint = Datapoint::new(1156, "BATT_ABSORPTION_VOLTAGE", DataType::Float);
pub const BATT_FLOATING_VOLTAGE: Datapoint = Datapoint::new(1140, "BATT_FLOATING_VOLTAGE", DataType::Float);
pub const BATT_EQUALIZATION_VOLTAGE: Datapoint = Datapoint::new(1143, "BATT_EQUALIZATION_VOLTAGE", DataType::Float);
pub const BATT_UNDERVOLTAGE: Datapoint = Datapoint::new(1108, "BATT_UNDERVOLTAGE", DataType::Float);
pub const BATT_TEMP_COMPENSATION: Datapoint = Datapoint::new(1139, "BATT_TEMP_COMPENSATION", DataType::Float);
pub const INVERTER_OUTPUT_VOLTAGE: Datapoint = Datapoint::new(1286, "INVERTER_OUTPUT_VOLTAGE", DataType::Float);
pub const INVERTER_OUTPUT_FREQUENCY: Datapoint = Datapoint::new(1112, "INVERTER_OUTPUT_FREQUENCY", DataType::Float);
pub const ECO_MODE_ENABLED: Datapoint = Datapoint::new(1517, "ECO_MODE_ENABLED", DataType::Bool);
pub const GRID_FEEDING_ALLOWED: Datapoint = Datapoint::new(1127, "GRID_FEEDING_ALLOWED", DataType::Bool);
pub const GRID_FEEDING_POWER_LIMIT: Datapoint = Datapoint::new(1524, "GRID_FEEDING_POWER_LIMIT", DataType::Float);
pub const TRANSFER_RELAY_ENABLED: Datapoint = Datapoint::new(1128, "TRANSFER_RELAY_ENABLED", DataType::Bool);
pub const PARAMS_SAVED_IN_FLASH: Datapoint = Datapoint::new(1550, "PARAMS_SAVED_IN_FLASH", DataType::Bool);

// RCC / Xcom-232i parameters (not reachable over SCOM, listed for completeness)
pub const USER_LEVEL: Datapoint = Datapoint::new(5012, "USER_LEVEL", DataType::ShortEnum);

// Xtender infos (read only)
pub const AC_ENERGY_IN_CURR_DAY: Datapoint = Datapoint::new(3081, "AC_POWER_IN_CURR_DAY", DataType::Float).with_unit("kWh");
pub const AC_ENERGY_IN_PREV_DAY: Datapoint = Datapoint::new(3080, "AC_POWER_IN_PREV_DAY", DataType::Float).with_unit("kWh");
pub const AC_ENERGY_OUT_CURR_DAY: Datapoint = Datapoint::new(3083, "AC_ENERGY_OUT_CURR_DAY", DataType::Float).with_unit("kWh");
pub const AC_ENERGY_OUT_PREV_DAY: Datapoint = Datapoint::new(3082, "AC_ENERGY_OUT_PREV_DAY", DataType::Float).with_unit("kWh");
pub const AC_FREQ_IN: Datapoint = Datapoint::new(3084, "AC_FREQ_IN", DataType::Float).with_unit("Hz");
pub const AC_FREQ_OUT: Datapoint = Datapoint::new(3085, "AC_FREQ_OUT", DataType::Float).with_unit("Hz");
pub const AC_POWER_IN: Datapoint = Datapoint::new(3137, "AC_POWER_IN", DataType::Float).with_unit("kW");
pub const AC_POWER_OUT: Datapoint = Datapoint::new(3136, "AC_POWER_OUT", DataType::Float).with_unit("kW");
pub const AC_VOLTAGE_IN: Datapoint = Datapoint::new(3011, "AC_VOLTAGE_IN", DataType::Float).with_unit("V");
pub const AC_VOLTAGE_OUT: Datapoint = Datapoint::new(3021, "AC_VOLTAGE_OUT", DataType::Float).with_unit("V");
pub const AC_CURRENT_IN: Datapoint = Datapoint::new(3012, "AC_CURRENT_IN", DataType::Float).with_unit("A");
pub const AC_CURRENT_OUT: Datapoint = Datapoint::new(3022, "AC_CURRENT_OUT", DataType::Float).with_unit("A");
pub const SYSTEM_STATE: Datapoint = Datapoint::new(3049, "SYSTEM_STATE", DataType::ShortEnum);
pub const OPERATING_MODE: Datapoint = Datapoint::new(3048, "OPERATING_MODE", DataType::ShortEnum);
pub const INPUT_ACTIVE: Datapoint = Datapoint::new(3020, "INPUT_ACTIVE", DataType::Bool);
pub const TRANSFER_RELAY_STATE: Datapoint = Datapoint::new(3049, "TRANSFER_RELAY_STATE", DataType::Bool);
pub const GRID_FEEDING_ACTIVE: Datapoint = Datapoint::new(3119, "GRID_FEEDING_ACTIVE", DataType::Bool);
pub const AUXILIARY_RELAY_1_STATE: Datapoint = Datapoint::new(3031, "AUXILIARY_RELAY_1_STATE", DataType::Bool);
pub const AUXILIARY_RELAY_2_STATE: Datapoint = Datapoint::new(3032, "AUXILIARY_RELAY_2_STATE", DataType::Bool);
pub const RUNNING_TIME: Datapoint = Datapoint::new(3089, "RUNNING_TIME", DataType::Float).with_unit("h");
pub const ENERGY_AC_IN_TOTAL: Datapoint = Datapoint::new(3085, "ENERGY_AC_IN_TOTAL", DataType::Float).with_unit("kWh");
pub const ENERGY_AC_OUT_TOTAL: Datapoint = Datapoint::new(3086, "ENERGY_AC_OUT_TOTAL", DataType::Float).with_unit("kWh");
pub const NUM_BATTERY_UNDERVOLTAGES: Datapoint = Datapoint::new(3088, "NUM_BATTERY_UNDERVOLTAGES", DataType::SignedInt);
pub const NUM_BATTERY_CRITICALS: Datapoint = Datapoint::new(3089, "NUM_BATTERY_CRITICALS", DataType::SignedInt);
pub const NUM_BATTERY_LOW: Datapoint = Datapoint::new(3090, "NUM_BATTERY_LOW", DataType::SignedInt);
pub const BATT_CYCLE_PHASE_XT: Datapoint = Datapoint::new(3010, "BATT_CYCLE_PHASE_XT", DataType::ShortEnum);
pub const BATT_VOLTAGE_XT: Datapoint = Datapoint::new(3092, "BATT_VOLTAGE", DataType::Float).with_unit("V");

// Xcom-CAN BMS parameters (writable)
pub const SOC_LEVEL_FOR_BACKUP: Datapoint = Datapoint::new(6062, "SOC_LEVEL_FOR_BACKUP", DataType::Float);
pub const SOC_LEVEL_FOR_GRID_FEEDING: Datapoint = Datapoint::new(6063, "SOC_LEVEL_FOR_GRID_FEEDING", DataType::Float);

// BSP infos (read only)
pub const BATT_VOLTAGE: Datapoint = Datapoint::new(7000, "BATT_VOLTAGE", DataType::Float).with_unit("V");
pub const BATT_CURRENT: Datapoint = Datapoint::new(7001, "BATT_CURRENT", DataType::Float).with_unit("A");
pub const BATT_SOC: Datapoint = Datapoint::new(7032, "BATT_SOC", DataType::Float).with_unit("%");
pub const BATT_TEMP: Datapoint = Datapoint::new(7029, "BATT_TEMP", DataType::Float).with_unit("°C");
pub const BATT_CYCLE_PHASE: Datapoint = Datapoint::new(11038, "BATT_CYCLE_PHASE", DataType::ShortEnum);
pub const BATT_POWER: Datapoint = Datapoint::new(7003, "BATT_POWER", DataType::Float).with_unit("W");
pub const BATT_CHARGE: Datapoint = Datapoint::new(7007, "BATT_CHARGE", DataType::Float).with_unit("Ah");
pub const BATT_DISCHARGE: Datapoint = Datapoint::new(7008, "BATT_DISCHARGE", DataType::Float).with_unit("Ah");
pub const BATT_CHARGE_PREV_DAY: Datapoint = Datapoint::new(7009, "BATT_CHARGE_PREV_DAY", DataType::Float).with_unit("Ah");
pub const BATT_DISCHARGE_PREV_DAY: Datapoint = Datapoint::new(7010, "BATT_DISCHARGE_PREV_DAY", DataType::Float).with_unit("Ah");
pub const BATT_STATE_OF_HEALTH: Datapoint = Datapoint::new(7033, "BATT_STATE_OF_HEALTH", DataType::Float).with_unit("%");
pub const BATT_REMAINING_AUTONOMY: Datapoint = Datapoint::new(7034, "BATT_REMAINING_AUTONOMY", DataType::Float).with_unit("h");
pub const BATT_REMAINING_CAPACITY: Datapoint = Datapoint::new(7035, "BATT_REMAINING_CAPACITY", DataType::Float).with_unit("Ah");
pub const BATT_NUM_CYCLES: Datapoint = Datapoint::new(7036, "BATT_NUM_CYCLES", DataType::SignedInt);
pub const BATT_HISTORY_DEEPEST_DISCHARGE: Datapoint = Datapoint::new(7037, "BATT_HISTORY_DEEPEST_DISCHARGE", DataType::Float).with_unit("Ah");
pub const BATT_HISTORY_MAX_VOLTAGE: Datapoint = Datapoint::new(7038, "BATT_HISTORY_MAX_VOLTAGE", DataType::Float).with_unit("V");
pub const BATT_HISTORY_MIN_VOLTAGE: Datapoint = Datapoint::new(7039, "BATT_HISTORY_MIN_VOLTAGE", DataType::Float).with_unit("V");
pub const BATT_HISTORY_TOTAL_AH_CHARGED: Datapoint = Datapoint::new(7040, "BATT_HISTORY_TOTAL_AH_CHARGED", DataType::Float).with_unit("Ah");
pub const BATT_HISTORY_TOTAL_AH_DISCHARGED: Datapoint = Datapoint::new(7041, "BATT_HISTORY_TOTAL_AH_DISCHARGED", DataType::Float).with_unit("Ah");

// VarioTrack infos (read only)
pub const PV_VOLTAGE: Datapoint = Datapoint::new(11041, "PV_VOLTAGE", DataType::Float).with_unit("V");
pub const PV_POWER: Datapoint = Datapoint::new(11043, "PV_POWER", DataType::Float).with_unit("W");
pub const PV_ENERGY_CURR_DAY: Datapoint = Datapoint::new(11007, "PV_ENERGY_CURR_DAY", DataType::Float).with_unit("kWh");
pub const PV_ENERGY_PREV_DAY: Datapoint = Datapoint::new(11011, "PV_ENERGY_PREV_DAY", DataType::Float).with_unit("kWh");
pub const PV_ENERGY_TOTAL: Datapoint = Datapoint::new(11009, "PV_ENERGY_TOTAL", DataType::Float).with_unit("MWh");
pub const PV_SUN_HOURS_CURR_DAY: Datapoint = Datapoint::new(11025, "PV_SUN_HOURS_CURR_DAY", DataType::Float).with_unit("h");
pub const PV_SUN_HOURS_PREV_DAY: Datapoint = Datapoint::new(11026, "PV_SUN_HOURS_PREV_DAY", DataType::Float).with_unit("h");
pub const PV_CURRENT: Datapoint = Datapoint::new(11042, "PV_CURRENT", DataType::Float).with_unit("A");
pub const PV_OPERATING_MODE: Datapoint = Datapoint::new(11016, "PV_OPERATING_MODE", DataType::ShortEnum);
pub const PV_CHARGING_CURRENT: Datapoint = Datapoint::new(11044, "PV_CHARGING_CURRENT", DataType::Float).with_unit("A");
pub const PV_CHARGING_POWER: Datapoint = Datapoint::new(11045, "PV_CHARGING_POWER", DataType::Float).with_unit("W");
pub const PV_INPUT_POWER_REDUCTION: Datapoint = Datapoint::new(11046, "PV_INPUT_POWER_REDUCTION", DataType::Float).with_unit("%");
pub const PV_TEMPERATURE_INTERNAL: Datapoint = Datapoint::new(11047, "PV_TEMPERATURE_INTERNAL", DataType::Float).with_unit("°C");
pub const PV_TEMPERATURE_MAX_24H: Datapoint = Datapoint::new(11048, "PV_TEMPERATURE_MAX_24H", DataType::Float).with_unit("°C");
pub const PV_TEMPERATURE_MAX_TOTAL: Datapoint = Datapoint::new(11049, "PV_TEMPERATURE_MAX_TOTAL", DataType::Float).with_unit("°C");
pub const PV_NUM_OVERTEMP_TODAY: Datapoint = Datapoint::new(11050, "PV_NUM_OVERTEMP_TODAY", DataType::SignedInt);
pub const PV_NUM_OVERTEMP_TOTAL: Datapoint = Datapoint::new(11051, "PV_NUM_OVERTEMP_TOTAL", DataType::SignedInt);
pub const PV_OPERATION_MODE: Datapoint = Datapoint::new(11016, "PV_OPERATION_MODE", DataType::ShortEnum);
pub const PV_NEXT_EQUAL: Datapoint = Datapoint::new(11037, "PV_NEXT_EQUAL", DataType::Float).with_unit("d");

// VarioTrack parameters (writable)
pub const FORCE_NEW_CYCLE: Datapoint = Datapoint::new(10029, "FORCE_NEW_CYCLE", DataType::SignedInt);

// VarioString infos (read only)
pub const VS_PV_POWER: Datapoint = Datapoint::new(15010, "VS_PV_POWER", DataType::Float).with_unit("kW");
pub const VS_PV_PROD: Datapoint = Datapoint::new(15017, "VS_PV_PROD", DataType::Float).with_unit("kWh");
pub const VS_PV_ENERGY_PREV_DAY: Datapoint = Datapoint::new(15027, "VS_PV_ENERGY_PREV_DAY", DataType::Float).with_unit("kWh");
pub const VS_PV_VOLTAGE: Datapoint = Datapoint::new(15011, "VS_PV_VOLTAGE", DataType::Float).with_unit("V");
pub const VS_PV_CURRENT: Datapoint = Datapoint::new(15012, "VS_PV_CURRENT", DataType::Float).with_unit("A");
pub const VS_BATT_VOLTAGE: Datapoint = Datapoint::new(15013, "VS_BATT_VOLTAGE", DataType::Float).with_unit("V");
pub const VS_BATT_CURRENT: Datapoint = Datapoint::new(15014, "VS_BATT_CURRENT", DataType::Float).with_unit("A");
pub const VS_OPERATING_MODE: Datapoint = Datapoint::new(15015, "VS_OPERATING_MODE", DataType::ShortEnum);
pub const VS_TEMPERATURE_INTERNAL: Datapoint = Datapoint::new(15016, "VS_TEMPERATURE_INTERNAL", DataType::Float).with_unit("°C");
pub const VS_ENERGY_TODAY: Datapoint = Datapoint::new(15018, "VS_ENERGY_TODAY", DataType::Float).with_unit("kWh");
pub const VS_NUM_ERRORS_TODAY: Datapoint = Datapoint::new(15019, "VS_NUM_ERRORS_TODAY", DataType::SignedInt);
pub const VS_NUM_ERRORS_TOTAL: Datapoint = Datapoint::new(15020, "VS_NUM_ERRORS_TOTAL", DataType::SignedInt);

/// Every catalog entry, in catalog order
pub static CATALOG: &[Datapoint] = &[
    MAX_CURR_AC_SOURCE,
    SMART_BOOST_ALLOWED,
    BATTERY_CHARGE_CURR,
    MAX_GRID_FEEDING_CURR,
    SMART_BOOST_LIMIT,
    BATT_CHARGE_CURRENT,
    BATT_ABSORPTION_VOLTAGE,
    BATT_FLOATING_VOLTAGE,
    BATT_EQUALIZATION_VOLTAGE,
    BATT_UNDERVOLTAGE,
    BATT_TEMP_COMPENSATION,
    INVERTER_OUTPUT_VOLTAGE,
    INVERTER_OUTPUT_FREQUENCY,
    ECO_MODE_ENABLED,
    GRID_FEEDING_ALLOWED,
    GRID_FEEDING_POWER_LIMIT,
    TRANSFER_RELAY_ENABLED,
    PARAMS_SAVED_IN_FLASH,
    USER_LEVEL,
    AC_ENERGY_IN_CURR_DAY,
    AC_ENERGY_IN_PREV_DAY,
    AC_ENERGY_OUT_CURR_DAY,
    AC_ENERGY_OUT_PREV_DAY,
    AC_FREQ_IN,
    AC_FREQ_OUT,
    AC_POWER_IN,
    AC_POWER_OUT,
    AC_VOLTAGE_IN,
    AC_VOLTAGE_OUT,
    AC_CURRENT_IN,
    AC_CURRENT_OUT,
    SYSTEM_STATE,
    OPERATING_MODE,
    INPUT_ACTIVE,
    TRANSFER_RELAY_STATE,
    GRID_FEEDING_ACTIVE,
    AUXILIARY_RELAY_1_STATE,
    AUXILIARY_RELAY_2_STATE,
    RUNNING_TIME,
    ENERGY_AC_IN_TOTAL,
    ENERGY_AC_OUT_TOTAL,
    NUM_BATTERY_UNDERVOLTAGES,
    NUM_BATTERY_CRITICALS,
    NUM_BATTERY_LOW,
    BATT_CYCLE_PHASE_XT,
    BATT_VOLTAGE_XT,
    SOC_LEVEL_FOR_BACKUP,
    SOC_LEVEL_FOR_GRID_FEEDING,
    BATT_VOLTAGE,
    BATT_CURRENT,
    BATT_SOC,
    BATT_TEMP,
    BATT_CYCLE_PHASE,
    BATT_POWER,
    BATT_CHARGE,
    BATT_DISCHARGE,
    BATT_CHARGE_PREV_DAY,
    BATT_DISCHARGE_PREV_DAY,
    BATT_STATE_OF_HEALTH,
    BATT_REMAINING_AUTONOMY,
    BATT_REMAINING_CAPACITY,
    BATT_NUM_CYCLES,
    BATT_HISTORY_DEEPEST_DISCHARGE,
    BATT_HISTORY_MAX_VOLTAGE,
    BATT_HISTORY_MIN_VOLTAGE,
    BATT_HISTORY_TOTAL_AH_CHARGED,
    BATT_HISTORY_TOTAL_AH_DISCHARGED,
    PV_VOLTAGE,
    PV_POWER,
    PV_ENERGY_CURR_DAY,
    PV_ENERGY_PREV_DAY,
    PV_ENERGY_TOTAL,
    PV_SUN_HOURS_CURR_DAY,
    PV_SUN_HOURS_PREV_DAY,
    PV_CURRENT,
    PV_OPERATING_MODE,
    PV_CHARGING_CURRENT,
    PV_CHARGING_POWER,
    PV_INPUT_POWER_REDUCTION,
    PV_TEMPERATURE_INTERNAL,
    PV_TEMPERATURE_MAX_24H,
    PV_TEMPERATURE_MAX_TOTAL,
    PV_NUM_OVERTEMP_TODAY,
    PV_NUM_OVERTEMP_TOTAL,
    PV_OPERATION_MODE,
    PV_NEXT_EQUAL,
    FORCE_NEW_CYCLE,
    VS_PV_POWER,
    VS_PV_PROD,
    VS_PV_ENERGY_PREV_DAY,
    VS_PV_VOLTAGE,
    VS_PV_CURRENT,
    VS_BATT_VOLTAGE,
    VS_BATT_CURRENT,
    VS_OPERATING_MODE,
    VS_TEMPERATURE_INTERNAL,
    VS_ENERGY_TODAY,
    VS_NUM_ERRORS_TODAY,
    VS_NUM_ERRORS_TOTAL,
];
