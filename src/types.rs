//! FIT base types and scalar values.
//!
//! Every field in a data record carries a scalar of one of the seventeen
//! FIT base types. Each base type has a fixed element width, an 8-bit wire
//! tag stored in definition records, and an invalid sentinel that marks a
//! field as absent. The scalar codec here writes one value in a caller
//! chosen byte order; string buffers and the domain wrappers (timestamps,
//! positions) sit one layer up, in the field codec.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::position::{Latitude, Longitude};
use crate::time::{DateTime, LocalDateTime};
use crate::{EncodeError, Result};

/// Byte order for multi-byte values inside records.
///
/// The architecture byte of every definition record reflects the order in
/// use. The file trailer CRC and the global message number are always
/// little-endian, whatever is chosen here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Architecture byte as stored in a definition record.
    pub fn arch_byte(self) -> u8 {
        match self {
            ByteOrder::LittleEndian => 0x00,
            ByteOrder::BigEndian => 0x01,
        }
    }

    pub(crate) fn u16_bytes(self, v: u16) -> [u8; 2] {
        match self {
            ByteOrder::LittleEndian => v.to_le_bytes(),
            ByteOrder::BigEndian => v.to_be_bytes(),
        }
    }

    pub(crate) fn u32_bytes(self, v: u32) -> [u8; 4] {
        match self {
            ByteOrder::LittleEndian => v.to_le_bytes(),
            ByteOrder::BigEndian => v.to_be_bytes(),
        }
    }

    pub(crate) fn u64_bytes(self, v: u64) -> [u8; 8] {
        match self {
            ByteOrder::LittleEndian => v.to_le_bytes(),
            ByteOrder::BigEndian => v.to_be_bytes(),
        }
    }
}

/// FIT base type, with its on-wire tag as the discriminant.
///
/// Bit 7 of the tag marks the multi-byte types whose layout depends on the
/// architecture byte of the governing definition record.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Enum = 0x00,
    Sint8 = 0x01,
    Uint8 = 0x02,
    Sint16 = 0x83,
    Uint16 = 0x84,
    Sint32 = 0x85,
    Uint32 = 0x86,
    String = 0x07,
    Float32 = 0x88,
    Float64 = 0x89,
    Uint8z = 0x0A,
    Uint16z = 0x8B,
    Uint32z = 0x8C,
    Byte = 0x0D,
    Sint64 = 0x8E,
    Uint64 = 0x8F,
    Uint64z = 0x90,
}

impl BaseType {
    /// On-wire type tag for definition records.
    pub fn wire_tag(self) -> u8 {
        self as u8
    }

    /// Width in bytes of one element.
    ///
    /// Strings have no fixed width; the profile-declared buffer length
    /// applies instead, and this returns 0.
    pub fn size(self) -> u8 {
        match self {
            BaseType::Enum
            | BaseType::Sint8
            | BaseType::Uint8
            | BaseType::Uint8z
            | BaseType::Byte => 1,
            BaseType::Sint16 | BaseType::Uint16 | BaseType::Uint16z => 2,
            BaseType::Sint32 | BaseType::Uint32 | BaseType::Uint32z | BaseType::Float32 => 4,
            BaseType::Sint64 | BaseType::Uint64 | BaseType::Uint64z | BaseType::Float64 => 8,
            BaseType::String => 0,
        }
    }

    /// Whether `v` still holds this base type's invalid sentinel.
    ///
    /// Sentinels are all-ones for unsigned, enum and byte types, the
    /// maximum for signed types, zero for the `z` variants, NaN for floats
    /// and the empty string for strings. A value of the wrong shape is not
    /// a sentinel; the codec reports it as a type mismatch instead.
    pub(crate) fn is_sentinel(self, v: &Value) -> bool {
        match (self, v) {
            (BaseType::Enum | BaseType::Uint8 | BaseType::Byte, Value::Uint8(x)) => *x == u8::MAX,
            (BaseType::Uint8z, Value::Uint8(x)) => *x == 0,
            (BaseType::Sint8, Value::Sint8(x)) => *x == i8::MAX,
            (BaseType::Uint16, Value::Uint16(x)) => *x == u16::MAX,
            (BaseType::Uint16z, Value::Uint16(x)) => *x == 0,
            (BaseType::Sint16, Value::Sint16(x)) => *x == i16::MAX,
            (BaseType::Uint32, Value::Uint32(x)) => *x == u32::MAX,
            (BaseType::Uint32z, Value::Uint32(x)) => *x == 0,
            (BaseType::Sint32, Value::Sint32(x)) => *x == i32::MAX,
            (BaseType::Uint64, Value::Uint64(x)) => *x == u64::MAX,
            (BaseType::Uint64z, Value::Uint64(x)) => *x == 0,
            (BaseType::Sint64, Value::Sint64(x)) => *x == i64::MAX,
            (BaseType::Float32, Value::Float32(x)) => x.is_nan(),
            (BaseType::Float64, Value::Float64(x)) => x.is_nan(),
            (BaseType::String, Value::String(s)) => s.is_empty(),
            _ => false,
        }
    }
}

/// A single field value as visited by the encoder.
///
/// Message structs expose their fields through
/// [`Mesg::field_values`](crate::profile::Mesg::field_values); the codec
/// checks each value against the profile-declared base type and rejects a
/// mismatched shape with [`EncodeError::TypeMismatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Uint8(u8),
    Sint8(i8),
    Uint16(u16),
    Sint16(i16),
    Uint32(u32),
    Sint32(i32),
    Uint64(u64),
    Sint64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    DateTime(DateTime),
    LocalDateTime(LocalDateTime),
    Latitude(Latitude),
    Longitude(Longitude),
}

/// Encode one scalar of `base` in `order`, writing exactly `base.size()`
/// bytes.
///
/// Strings and the domain wrappers are not scalars; passing one here is a
/// type mismatch by construction.
pub(crate) fn write_scalar<W: Write>(
    w: &mut W,
    v: &Value,
    base: BaseType,
    order: ByteOrder,
) -> Result<()> {
    match (base, v) {
        (BaseType::Enum | BaseType::Uint8 | BaseType::Uint8z | BaseType::Byte, Value::Uint8(x)) => {
            w.write_all(&[*x])?
        }
        (BaseType::Sint8, Value::Sint8(x)) => w.write_all(&[*x as u8])?,
        (BaseType::Uint16 | BaseType::Uint16z, Value::Uint16(x)) => {
            w.write_all(&order.u16_bytes(*x))?
        }
        (BaseType::Sint16, Value::Sint16(x)) => w.write_all(&order.u16_bytes(*x as u16))?,
        (BaseType::Uint32 | BaseType::Uint32z, Value::Uint32(x)) => {
            w.write_all(&order.u32_bytes(*x))?
        }
        (BaseType::Sint32, Value::Sint32(x)) => w.write_all(&order.u32_bytes(*x as u32))?,
        (BaseType::Uint64 | BaseType::Uint64z, Value::Uint64(x)) => {
            w.write_all(&order.u64_bytes(*x))?
        }
        (BaseType::Sint64, Value::Sint64(x)) => w.write_all(&order.u64_bytes(*x as u64))?,
        (BaseType::Float32, Value::Float32(x)) => w.write_all(&order.u32_bytes(x.to_bits()))?,
        (BaseType::Float64, Value::Float64(x)) => w.write_all(&order.u64_bytes(x.to_bits()))?,
        (base, v) => {
            return Err(EncodeError::TypeMismatch {
                base,
                value: v.clone(),
            })
        }
    }
    Ok(())
}
