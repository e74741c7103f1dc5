//! Client configuration

use serde::{Deserialize, Serialize};
use xcom_core::{XcomError, XcomResult};
use xcom_params::Property;

/// Settings shared by the client and the transport it drives
///
/// The serial settings are consumed by the transport implementation; the
/// client itself uses the destination address and the access properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XcomConfig {
    /// Serial device of the Xcom-232i gateway
    pub serial_device: String,
    /// Serial baud rate
    pub baud_rate: u32,
    /// Destination device address
    pub destination: u32,
    /// Property read by `get_value`
    pub read_property: Property,
    /// Property written by `set_value`
    pub write_property: Property,
}

impl Default for XcomConfig {
    fn default() -> Self {
        Self {
            serial_device: "/dev/ttyUSB0".to_string(),
            baud_rate: 115_200,
            destination: 100,
            read_property: Property::Value,
            // RAM only, not persisted to flash
            write_property: Property::UnsavedValue,
        }
    }
}

impl XcomConfig {
    pub fn builder() -> XcomConfigBuilder {
        XcomConfigBuilder::new()
    }

    /// Check the settings for values no transport can use
    pub fn validate(&self) -> XcomResult<()> {
        if self.serial_device.trim().is_empty() {
            return Err(XcomError::InvalidValue("Serial device must not be empty".to_string()));
        }
        if self.baud_rate == 0 {
            return Err(XcomError::InvalidValue("Baud rate must be greater than zero".to_string()));
        }
        Ok(())
    }
}

/// Builder for `XcomConfig`
///
/// ```
/// use xcom_client::XcomConfig;
///
/// let config = XcomConfig::builder()
///     .serial_device("/dev/ttyUSB1")
///     .baud_rate(38_400)
///     .build()
///     .unwrap();
/// assert_eq!(config.destination, 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct XcomConfigBuilder {
    config: XcomConfig,
}

impl XcomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serial_device(mut self, device: impl Into<String>) -> Self {
        self.config.serial_device = device.into();
        self
    }

    pub fn baud_rate(mut self, baud_rate: u32) -> Self {
        self.config.baud_rate = baud_rate;
        self
    }

    pub fn destination(mut self, destination: u32) -> Self {
        self.config.destination = destination;
        self
    }

    pub fn read_property(mut self, property: Property) -> Self {
        self.config.read_property = property;
        self
    }

    pub fn write_property(mut self, property: Property) -> Self {
        self.config.write_property = property;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> XcomResult<XcomConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
