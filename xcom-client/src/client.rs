//! Parameter access over a transport

use crate::config::XcomConfig;
use crate::transport::{ParameterTransport, PropertyRequest, PropertyResponse};
use xcom_core::{codec, DataType, Value, XcomError, XcomResult};
use xcom_params::{error_codes, registry, Datapoint, Property, Reading, Registry, UserLevel};

/// Reads and writes datapoints through a `ParameterTransport`
///
/// Every call is a single exchange; a failed read is returned to the caller,
/// which is expected to log it and carry on with its polling cycle.
#[derive(Debug)]
pub struct XcomClient<T> {
    transport: T,
    config: XcomConfig,
    registry: &'static Registry,
}

impl<T: ParameterTransport> XcomClient<T> {
    /// Create a client over the built-in catalog
    pub fn new(transport: T, config: XcomConfig) -> Self {
        Self::with_registry(transport, config, registry())
    }

    /// Create a client resolving ids and names through another registry
    pub fn with_registry(transport: T, config: XcomConfig, registry: &'static Registry) -> Self {
        Self {
            transport,
            config,
            registry,
        }
    }

    pub fn config(&self) -> &XcomConfig {
        &self.config
    }

    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Read the configured value property of a datapoint
    pub async fn get_value(&mut self, datapoint: &Datapoint) -> XcomResult<Value> {
        let property = self.config.read_property;
        self.get_property(datapoint, property).await
    }

    /// Read a datapoint by id
    pub async fn get_value_by_id(&mut self, id: u32) -> XcomResult<Value> {
        let datapoint = *self.registry.get_by_id(id)?;
        self.get_value(&datapoint).await
    }

    /// Read an id that is not in the catalog, with an explicit type tag
    ///
    /// The id is addressed like a catalog entry (`Datapoint::object_type`).
    pub async fn get_value_by_id_as(&mut self, id: u16, data_type: DataType) -> XcomResult<Value> {
        let datapoint = Datapoint::new(id, "UNLISTED", data_type);
        self.get_value(&datapoint).await
    }

    /// Read a datapoint by name
    pub async fn get_value_by_name(&mut self, name: &str) -> XcomResult<Value> {
        let datapoint = *self.registry.get_by_name(name)?;
        self.get_value(&datapoint).await
    }

    /// Read a datapoint and keep its metadata for publication
    pub async fn get_reading(&mut self, datapoint: &Datapoint) -> XcomResult<Reading> {
        let value = self.get_value(datapoint).await?;
        Ok(Reading::new(*datapoint, value))
    }

    /// Read a value-like property (value, min, max or unsaved value)
    ///
    /// # Errors
    ///
    /// `Property::Level` does not carry a value of the datapoint's type and is
    /// rejected with `InvalidValue`; use `get_user_level` instead.
    pub async fn get_property(
        &mut self,
        datapoint: &Datapoint,
        property: Property,
    ) -> XcomResult<Value> {
        if property == Property::Level {
            return Err(XcomError::InvalidValue(format!(
                "{:?} is not a value property of {}",
                property, datapoint
            )));
        }
        let payload = self.read(datapoint, property).await?;
        datapoint.decode(&payload)
    }

    /// Read the user level required to modify a parameter
    pub async fn get_user_level(&mut self, datapoint: &Datapoint) -> XcomResult<UserLevel> {
        let payload = self.read(datapoint, Property::Level).await?;
        match codec::decode(DataType::ShortEnum, &payload)? {
            // levels travel as unsigned codes
            Value::ShortEnum(code) => UserLevel::from_code(code as u16),
            other => Err(XcomError::InvalidValue(format!(
                "Unexpected user level payload {} for {}",
                other, datapoint
            ))),
        }
    }

    /// Write a value to the configured write property of a datapoint
    pub async fn set_value(&mut self, datapoint: &Datapoint, value: &Value) -> XcomResult<()> {
        let payload = datapoint.encode(value)?;
        let request =
            PropertyRequest::write(datapoint, self.config.write_property, self.config.destination);
        log::debug!(
            "Writing {:?} of {} to device {}: {}",
            request.property,
            datapoint,
            request.destination,
            value
        );
        match self.transport.write_property(request, payload).await? {
            PropertyResponse::Data(_) => Ok(()),
            PropertyResponse::Failure(code) => Err(device_error(datapoint, code)),
        }
    }

    async fn read(&mut self, datapoint: &Datapoint, property: Property) -> XcomResult<bytes::Bytes> {
        let request = PropertyRequest::read(datapoint, property, self.config.destination);
        log::debug!(
            "Reading {:?} of {} from device {}",
            property,
            datapoint,
            request.destination
        );
        match self.transport.read_property(request).await? {
            PropertyResponse::Data(payload) => Ok(payload),
            PropertyResponse::Failure(code) => Err(device_error(datapoint, code)),
        }
    }
}

fn device_error(datapoint: &Datapoint, code: u16) -> XcomError {
    let name = error_codes::describe(code);
    log::warn!("Device rejected access to {}: {} (0x{:04X})", datapoint, name, code);
    XcomError::Device { code, name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockParameterTransport;
    use bytes::Bytes;
    use mockall::predicate::*;
    use xcom_params::{catalog, labels, ObjectType};

    fn client(mock: MockParameterTransport) -> XcomClient<MockParameterTransport> {
        XcomClient::new(mock, XcomConfig::default())
    }

    #[tokio::test]
    async fn test_get_value_decodes_payload() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .with(eq(PropertyRequest::read(&catalog::AC_POWER_OUT, Property::Value, 100)))
            .times(1)
            .returning(|_| Ok(PropertyResponse::Data(Bytes::from_static(&[0x00, 0x00, 0x80, 0x3F]))));

        let value = client(mock).get_value(&catalog::AC_POWER_OUT).await.unwrap();
        assert_eq!(value, Value::Float(1.0));
    }

    #[tokio::test]
    async fn test_get_value_by_name_and_label() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .withf(|request| request.object_id == 11016 && request.object_type == ObjectType::Info)
            .returning(|_| Ok(PropertyResponse::Data(Bytes::from_static(&[0x08, 0x00]))));

        let value = client(mock).get_value_by_name("PV_OPERATING_MODE").await.unwrap();
        assert!(labels::MODE_CHARGING.contains(&value));
        assert!(value == labels::MODE_CHARGE);
    }

    #[tokio::test]
    async fn test_get_unlisted_id_with_type() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .withf(|request| {
                request.object_id == 3000
                    && request.object_type == ObjectType::Info
                    && request.property == Property::Value
            })
            .times(1)
            .returning(|_| Ok(PropertyResponse::Data(Bytes::from_static(&[0x00, 0x00, 0x50, 0x42]))));

        let mut client = client(mock);
        assert!(!client.registry().contains(3000));
        let value = client.get_value_by_id_as(3000, DataType::Float).await.unwrap();
        assert_eq!(value, Value::Float(52.0));
    }

    #[tokio::test]
    async fn test_user_level_rejects_malformed_payload() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .returning(|_| Ok(PropertyResponse::Data(Bytes::from_static(&[0x20]))));
        let result = client(mock).get_user_level(&catalog::SMART_BOOST_ALLOWED).await;
        assert!(matches!(result, Err(XcomError::MalformedValue { .. })));
    }

    #[tokio::test]
    async fn test_unknown_id_never_reaches_transport() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property().never();

        let result = client(mock).get_value_by_id(99_999).await;
        assert!(matches!(result, Err(XcomError::UnknownDatapoint(99_999))));
    }

    #[tokio::test]
    async fn test_failure_maps_to_named_device_error() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .returning(|_| Ok(PropertyResponse::Failure(0x0022)));
        match client(mock).get_value(&catalog::BATT_SOC).await {
            Err(XcomError::Device { code, name }) => {
                assert_eq!(code, 0x0022);
                assert_eq!(name, "OBJECT_ID_NOT_FOUND");
            }
            other => panic!("Expected Device error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_failure_code_surfaces_raw_code() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .returning(|_| Ok(PropertyResponse::Failure(0x00F0)));
        match client(mock).get_value(&catalog::BATT_SOC).await {
            Err(XcomError::Device { code, name }) => {
                assert_eq!(code, 0x00F0);
                assert_eq!(name, "UNKNOWN_ERROR(0x00F0)");
            }
            other => panic!("Expected Device error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .returning(|_| Ok(PropertyResponse::Data(Bytes::from_static(&[0x01]))));
        let result = client(mock).get_value(&catalog::BATT_SOC).await;
        assert!(matches!(result, Err(XcomError::MalformedValue { .. })));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .returning(|_| Err(XcomError::Transport("no response".to_string())));
        let result = client(mock).get_value(&catalog::BATT_SOC).await;
        assert!(matches!(result, Err(XcomError::Transport(_))));
    }

    #[tokio::test]
    async fn test_get_min_and_max() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .withf(|request| request.property == Property::Min)
            .returning(|_| Ok(PropertyResponse::Data(Bytes::from_static(&[0x00, 0x00, 0x00, 0x00]))));
        mock.expect_read_property()
            .withf(|request| request.property == Property::Max)
            .returning(|_| Ok(PropertyResponse::Data(Bytes::from_static(&[0x00, 0x00, 0x48, 0x42]))));

        let mut client = client(mock);
        let min = client.get_property(&catalog::MAX_CURR_AC_SOURCE, Property::Min).await.unwrap();
        let max = client.get_property(&catalog::MAX_CURR_AC_SOURCE, Property::Max).await.unwrap();
        assert_eq!(min, Value::Float(0.0));
        assert_eq!(max, Value::Float(50.0));
        assert!(client
            .get_property(&catalog::MAX_CURR_AC_SOURCE, Property::Level)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_get_user_level() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .withf(|request| request.property == Property::Level)
            .returning(|_| Ok(PropertyResponse::Data(Bytes::from_static(&[0x20, 0x00]))));
        let level = client(mock).get_user_level(&catalog::SMART_BOOST_ALLOWED).await.unwrap();
        assert_eq!(level, UserLevel::Expert);
    }

    #[tokio::test]
    async fn test_set_value_writes_unsaved_value() {
        let mut mock = MockParameterTransport::new();
        mock.expect_write_property()
            .withf(|request, payload| {
                request.property == Property::UnsavedValue
                    && request.object_type == ObjectType::Parameter
                    && request.object_id == 1138
                    && &payload[..] == [0x00, 0x00, 0x20, 0x41]
            })
            .times(1)
            .returning(|_, _| Ok(PropertyResponse::Data(Bytes::new())));

        client(mock)
            .set_value(&catalog::BATTERY_CHARGE_CURR, &Value::Float(10.0))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_set_value_rejects_unencodable_value() {
        let mut mock = MockParameterTransport::new();
        mock.expect_write_property().never();
        let result = client(mock)
            .set_value(&catalog::SMART_BOOST_ALLOWED, &Value::from("yes"))
            .await;
        assert!(matches!(result, Err(XcomError::InvalidValue(_))));
    }

    #[tokio::test]
    async fn test_set_value_read_only_failure() {
        let mut mock = MockParameterTransport::new();
        mock.expect_write_property()
            .returning(|_, _| Ok(PropertyResponse::Failure(0x0025)));
        let result = client(mock).set_value(&catalog::AC_POWER_OUT, &Value::Float(1.0)).await;
        match result {
            Err(XcomError::Device { name, .. }) => assert_eq!(name, "PROPERTY_IS_READ_ONLY"),
            other => panic!("Expected Device error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_reading() {
        let mut mock = MockParameterTransport::new();
        mock.expect_read_property()
            .returning(|_| Ok(PropertyResponse::Data(Bytes::from_static(&[0x00, 0x00, 0x80, 0x3F]))));
        let reading = client(mock).get_reading(&catalog::AC_POWER_OUT).await.unwrap();
        assert_eq!(reading.to_string(), "AC_POWER_OUT = 1 kW");
    }
}
