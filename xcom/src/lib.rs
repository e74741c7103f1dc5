//! Xcom - Rust implementation of the Studer Xcom parameter protocol
//!
//! This library models the parameter catalog and value codec used to poll and
//! configure Xtender inverters, VarioTrack/VarioString solar chargers and the
//! BSP battery monitor through an Xcom gateway.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `xcom-core`: Errors, type tags, typed values and the value codec
//! - `xcom-params`: Datapoint catalog, registry, value labels, error codes
//! - `xcom-client`: Transport boundary and parameter access client
//!
//! # Usage
//!
//! ```
//! use xcom::params::{catalog, labels, registry};
//! use xcom::Value;
//!
//! let power = registry().decode_by_id(3136, &[0x00, 0x00, 0x80, 0x3F]).unwrap();
//! assert_eq!(power, Value::Float(1.0));
//!
//! let mode = catalog::PV_OPERATING_MODE.decode(&[0x08, 0x00]).unwrap();
//! assert!(labels::MODE_CHARGING.contains(&mode));
//! ```

// Re-export core types
pub use xcom_core::{codec, DataType, Value, XcomError, XcomResult};

// Re-export the catalog
pub mod params {
    pub use xcom_params::*;
}

// Re-export client API
pub mod client {
    pub use xcom_client::*;
}
