//! Core types and utilities for the Xcom protocol
//!
//! This crate provides the error taxonomy, the wire type tags, typed values
//! and the value codec that translates between raw payloads and typed values.
//! It performs no I/O and holds no mutable state.

pub mod error;
pub mod datatypes;
pub mod codec;

pub use error::{XcomError, XcomResult};
pub use datatypes::{DataType, Value};
pub use codec::{decode, decode_tagged, encode, encode_tagged};
