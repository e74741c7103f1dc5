//! Transport boundary
//!
//! The transport turns a `PropertyRequest` into a framed exchange with the
//! device and hands back the raw response payload or the device status code.

use async_trait::async_trait;
use bytes::Bytes;
use xcom_core::XcomResult;
use xcom_params::{Datapoint, ObjectType, Property, ServiceId};

/// One property access addressed to a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRequest {
    pub service: ServiceId,
    pub object_type: ObjectType,
    pub object_id: u32,
    pub property: Property,
    pub destination: u32,
}

impl PropertyRequest {
    /// Request reading `property` of a datapoint
    pub fn read(datapoint: &Datapoint, property: Property, destination: u32) -> Self {
        Self::new(ServiceId::ReadProperty, datapoint, property, destination)
    }

    /// Request writing `property` of a datapoint
    pub fn write(datapoint: &Datapoint, property: Property, destination: u32) -> Self {
        Self::new(ServiceId::WriteProperty, datapoint, property, destination)
    }

    fn new(service: ServiceId, datapoint: &Datapoint, property: Property, destination: u32) -> Self {
        Self {
            service,
            object_type: datapoint.object_type(),
            object_id: u32::from(datapoint.id),
            property,
            destination,
        }
    }
}

/// Outcome of a property access as reported by the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyResponse {
    /// Success, with the response payload (empty for writes)
    Data(Bytes),
    /// Failure, with the 2-byte status code from the response
    Failure(u16),
}

/// Device transport driven by `XcomClient`
///
/// Implementations own framing, checksums, timeouts and retries. A response
/// flagged as failed must be returned as `PropertyResponse::Failure`, not as
/// an error; errors are for exchanges that produced no response at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParameterTransport: Send + Sync {
    /// Perform a read request
    async fn read_property(&mut self, request: PropertyRequest) -> XcomResult<PropertyResponse>;

    /// Perform a write request carrying an encoded payload
    async fn write_property(
        &mut self,
        request: PropertyRequest,
        payload: Bytes,
    ) -> XcomResult<PropertyResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use xcom_params::catalog;

    #[test]
    fn test_read_request_for_info() {
        let request = PropertyRequest::read(&catalog::AC_POWER_OUT, Property::Value, 100);
        assert_eq!(request.service, ServiceId::ReadProperty);
        assert_eq!(request.object_type, ObjectType::Info);
        assert_eq!(request.object_id, 3136);
        assert_eq!(request.destination, 100);
    }

    #[test]
    fn test_write_request_for_parameter() {
        let request =
            PropertyRequest::write(&catalog::SMART_BOOST_ALLOWED, Property::UnsavedValue, 101);
        assert_eq!(request.service, ServiceId::WriteProperty);
        assert_eq!(request.object_type, ObjectType::Parameter);
        assert_eq!(request.property, Property::UnsavedValue);
    }
}
