//! Xcom parameter access client
//!
//! This crate sits on the boundary between the parameter catalog and a device
//! transport. It resolves datapoints, builds property requests, encodes and
//! decodes payloads and maps device status codes to errors. Framing, I/O,
//! timeouts and retries belong to the `ParameterTransport` implementation.

pub mod config;
pub mod transport;
pub mod client;

pub use config::{XcomConfig, XcomConfigBuilder};
pub use transport::{ParameterTransport, PropertyRequest, PropertyResponse};
pub use client::XcomClient;
