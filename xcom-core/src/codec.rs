//! Value codec for Xcom payloads
//!
//! Translates between raw payloads and typed values, dispatched on the type tag.
//! All multi-byte quantities are little-endian.
//!
//! # Short enumerations
//!
//! `ENUM_SHORT` payloads are read as signed 16-bit and written as unsigned
//! 16-bit. `encode` accepts codes in `-32768..=65535`, writing negative codes as their
//! two's-complement pattern so a decoded reading always re-encodes to the bytes
//! it came from.

use crate::datatypes::{iso8859_15, DataType, Value};
use crate::error::{XcomError, XcomResult};
use bytes::{BufMut, Bytes, BytesMut};

/// Decode a payload according to its type tag
///
/// # Errors
///
/// Returns `MalformedValue` if a fixed-width payload has the wrong length
pub fn decode(data_type: DataType, bytes: &[u8]) -> XcomResult<Value> {
    let value = match data_type {
        DataType::Bool => {
            let [b] = fixed::<1>(data_type, bytes)?;
            Value::Bool(b != 0x00)
        }
        DataType::SignedInt => Value::Int(i32::from_le_bytes(fixed(data_type, bytes)?)),
        DataType::Float => Value::Float(f32::from_le_bytes(fixed(data_type, bytes)?)),
        DataType::ShortEnum => Value::ShortEnum(i16::from_le_bytes(fixed(data_type, bytes)?)),
        DataType::LongEnum => Value::LongEnum(u32::from_le_bytes(fixed(data_type, bytes)?)),
        DataType::String => Value::String(iso8859_15::decode(bytes)),
        DataType::Bytes => Value::Bytes(bytes.to_vec()),
    };
    Ok(value)
}

/// Encode a value according to a type tag
///
/// Integral values are accepted for every numeric tag as long as they fit the
/// wire width; see the module documentation for the short enumeration range.
///
/// # Errors
///
/// Returns `InvalidValue` if the value cannot be represented in the wire type
pub fn encode(data_type: DataType, value: &Value) -> XcomResult<Bytes> {
    let mut buf = BytesMut::with_capacity(data_type.wire_width().unwrap_or(0));
    match data_type {
        DataType::Bool => {
            let flag = match value {
                Value::Bool(b) => *b,
                other => integer(data_type, other)? != 0,
            };
            buf.put_u8(u8::from(flag));
        }
        DataType::SignedInt => {
            let v = integer(data_type, value)?;
            buf.put_i32_le(in_range(data_type, v, i64::from(i32::MIN), i64::from(i32::MAX))? as i32);
        }
        DataType::Float => {
            let v = match value {
                Value::Float(f) => *f,
                other => integer(data_type, other)? as f32,
            };
            buf.put_f32_le(v);
        }
        DataType::ShortEnum => {
            let v = integer(data_type, value)?;
            let v = in_range(data_type, v, i64::from(i16::MIN), i64::from(u16::MAX))?;
            // negative codes keep their 16-bit two's-complement pattern
            buf.put_u16_le(v as u16);
        }
        DataType::LongEnum => {
            let v = integer(data_type, value)?;
            buf.put_u32_le(in_range(data_type, v, 0, i64::from(u32::MAX))? as u32);
        }
        DataType::String => match value {
            Value::String(s) => buf.put_slice(&iso8859_15::encode(s)?),
            other => return Err(mismatch(data_type, other)),
        },
        DataType::Bytes => match value {
            Value::Bytes(b) => buf.put_slice(b),
            other => return Err(mismatch(data_type, other)),
        },
    }
    Ok(buf.freeze())
}

/// Decode a payload using a wire tag string such as `"FLOAT"`
///
/// # Errors
///
/// Returns `UnsupportedType` if the tag has no codec rule, otherwise as `decode`
pub fn decode_tagged(tag: &str, bytes: &[u8]) -> XcomResult<Value> {
    decode(tag.parse()?, bytes)
}

/// Encode a value using a wire tag string such as `"ENUM_SHORT"`
///
/// # Errors
///
/// Returns `UnsupportedType` if the tag has no codec rule, otherwise as `encode`
pub fn encode_tagged(tag: &str, value: &Value) -> XcomResult<Bytes> {
    encode(tag.parse()?, value)
}

fn fixed<const N: usize>(data_type: DataType, bytes: &[u8]) -> XcomResult<[u8; N]> {
    bytes.try_into().map_err(|_| XcomError::MalformedValue {
        data_type,
        expected: N,
        actual: bytes.len(),
    })
}

fn integer(data_type: DataType, value: &Value) -> XcomResult<i64> {
    value.as_integer().ok_or_else(|| mismatch(data_type, value))
}

fn in_range(data_type: DataType, v: i64, min: i64, max: i64) -> XcomResult<i64> {
    if (min..=max).contains(&v) {
        Ok(v)
    } else {
        Err(XcomError::InvalidValue(format!(
            "{} is out of range for {} ({}..={})",
            v, data_type, min, max
        )))
    }
}

fn mismatch(data_type: DataType, value: &Value) -> XcomError {
    XcomError::InvalidValue(format!(
        "Cannot encode {} value as {}",
        value.data_type(),
        data_type
    ))
}
