//! Xcom protocol constants
//!
//! These select what a transport request addresses. They are carried as
//! little-endian values on the wire: service ids as one byte, object types,
//! property ids and user levels as two bytes.

use serde::{Deserialize, Serialize};
use xcom_core::{XcomError, XcomResult};

/// Service requested from the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ServiceId {
    ReadProperty = 0x01,
    WriteProperty = 0x02,
}

impl ServiceId {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> XcomResult<Self> {
        match code {
            0x01 => Ok(Self::ReadProperty),
            0x02 => Ok(Self::WriteProperty),
            _ => Err(XcomError::InvalidValue(format!("Unknown service id 0x{:02X}", code))),
        }
    }
}

/// Kind of object addressed by a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ObjectType {
    /// Read-only user info
    Info = 0x0001,
    /// Configurable parameter
    Parameter = 0x0002,
    Message = 0x0003,
    Guid = 0x0004,
    Datalog = 0x0005,
}

impl ObjectType {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn to_le_bytes(self) -> [u8; 2] {
        self.code().to_le_bytes()
    }

    pub fn from_code(code: u16) -> XcomResult<Self> {
        match code {
            0x0001 => Ok(Self::Info),
            0x0002 => Ok(Self::Parameter),
            0x0003 => Ok(Self::Message),
            0x0004 => Ok(Self::Guid),
            0x0005 => Ok(Self::Datalog),
            _ => Err(XcomError::InvalidValue(format!("Unknown object type 0x{:04X}", code))),
        }
    }
}

/// Property of an object to access: the access kind of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Property {
    /// Current value (infos and saved parameter value)
    Value = 0x0005,
    /// Minimum accepted value of a parameter
    Min = 0x0006,
    /// Maximum accepted value of a parameter
    Max = 0x0007,
    /// User level required to modify a parameter
    Level = 0x0008,
    /// Parameter value held in RAM only, not written to flash
    UnsavedValue = 0x000D,
}

impl Property {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn to_le_bytes(self) -> [u8; 2] {
        self.code().to_le_bytes()
    }

    pub fn from_code(code: u16) -> XcomResult<Self> {
        match code {
            0x0005 => Ok(Self::Value),
            0x0006 => Ok(Self::Min),
            0x0007 => Ok(Self::Max),
            0x0008 => Ok(Self::Level),
            0x000D => Ok(Self::UnsavedValue),
            _ => Err(XcomError::InvalidValue(format!("Unknown property id 0x{:04X}", code))),
        }
    }
}

/// User level reported by the `Level` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum UserLevel {
    ViewOnly = 0x0000,
    Basic = 0x0010,
    Expert = 0x0020,
    Installer = 0x0030,
    Qsp = 0x0040,
}

impl UserLevel {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn to_le_bytes(self) -> [u8; 2] {
        self.code().to_le_bytes()
    }

    pub fn from_code(code: u16) -> XcomResult<Self> {
        match code {
            0x0000 => Ok(Self::ViewOnly),
            0x0010 => Ok(Self::Basic),
            0x0020 => Ok(Self::Expert),
            0x0030 => Ok(Self::Installer),
            0x0040 => Ok(Self::Qsp),
            _ => Err(XcomError::InvalidValue(format!("Unknown user level 0x{:04X}", code))),
        }
    }
}
