//! Data types used in the Xcom protocol

pub mod data_type;
pub mod value;
pub mod iso8859_15;

pub use data_type::DataType;
pub use value::Value;
