//! Parameter catalog for the Xcom protocol
//!
//! This crate provides the static datapoint catalog of the supported devices,
//! the registry that resolves datapoints by id or name, the label sets of
//! enumerated values, the device error code table and the protocol constants
//! a transport needs to address a datapoint.
//!
//! All data is immutable once built and safe to share between threads.

pub mod identity;
pub mod datapoint;
pub mod value_tuple;
pub mod catalog;
pub mod registry;
pub mod labels;
pub mod error_codes;
pub mod constants;
pub mod reading;

pub use identity::{same_id, Identifier};
pub use datapoint::Datapoint;
pub use value_tuple::ValueTuple;
pub use registry::{registry, DuplicateId, DuplicateName, Registry};
pub use labels::{labels_for, ValueSet};
pub use constants::{ObjectType, Property, ServiceId, UserLevel};
pub use reading::Reading;
