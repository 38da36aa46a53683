//! The generated message profile.
//!
//! FIT message layouts are global: a 16-bit message number identifies a
//! schema shared by every file, and a per-message table maps each declared
//! field position to its wire number, domain kind, base type and, for
//! strings, buffer length. This module holds that static profile for the
//! message set this crate encodes, plus the [`Mesg`] trait the encoder
//! visits messages through.
//!
//! Tables are ordered so that `table[i].sindex == i`; a message whose field
//! count disagrees with its table is reported as
//! [`EncodeError::FieldCountMismatch`](crate::EncodeError::FieldCountMismatch)
//! rather than patched over.

mod messages;

pub use messages::*;

use serde::{Deserialize, Serialize};

use crate::types::{BaseType, Value};

/// Global message number.
///
/// The variants cover the profile subset this crate ships tables for.
#[repr(u16)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    num_enum::TryFromPrimitive,
    num_enum::IntoPrimitive,
    Serialize,
    Deserialize,
)]
pub enum MesgNum {
    FileId = 0,
    Capabilities = 1,
    DeviceSettings = 2,
    UserProfile = 3,
    HrmProfile = 4,
    SdmProfile = 5,
    BikeProfile = 6,
    ZonesTarget = 7,
    HrZone = 8,
    PowerZone = 9,
    MetZone = 10,
    Sport = 12,
    Goal = 15,
    Session = 18,
    Lap = 19,
    Record = 20,
    Event = 21,
    DeviceInfo = 23,
    Workout = 26,
    WorkoutStep = 27,
    Schedule = 28,
    WeightScale = 30,
    Course = 31,
    CoursePoint = 32,
    Totals = 33,
    Activity = 34,
    Software = 35,
    FileCapabilities = 37,
    MesgCapabilities = 38,
    FieldCapabilities = 39,
    FileCreator = 49,
    BloodPressure = 51,
    SpeedZone = 53,
    Monitoring = 55,
    Length = 101,
    MonitoringInfo = 103,
    CadenceZone = 131,
    SegmentLap = 142,
    SegmentId = 148,
    SegmentLeaderboardEntry = 149,
    SegmentPoint = 150,
    SegmentFile = 151,
    TimestampCorrelation = 162,
    Invalid = 0xFFFF,
}

/// Domain kind of a profile field.
///
/// `Native` fields are plain scalars of their base type; the other kinds
/// wrap a base type with domain semantics (epoch seconds, semicircles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Native,
    TimeUtc,
    TimeLocal,
    Lat,
    Lng,
}

/// Immutable per-field metadata from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Position within the message's declared field order.
    pub sindex: u8,
    /// Wire field number.
    pub num: u8,
    pub kind: FieldKind,
    pub base: BaseType,
    /// Repeating field. Not encodable in this revision.
    pub array: bool,
    /// For strings, the on-wire buffer length in bytes; otherwise the
    /// element count, always 1 here.
    pub length: u8,
}

impl FieldDescriptor {
    /// On-wire size of this field in a data record.
    pub fn wire_size(&self) -> u8 {
        match self.base {
            BaseType::String => self.length,
            base => base.size(),
        }
    }

    /// Whether `v` is this field's invalid sentinel, meaning the field is
    /// omitted from both the definition and the data record.
    pub fn is_invalid(&self, v: &Value) -> bool {
        match (self.kind, v) {
            (FieldKind::TimeUtc, Value::DateTime(t)) => t.is_invalid(),
            (FieldKind::TimeLocal, Value::LocalDateTime(t)) => t.is_invalid(),
            (FieldKind::Lat, Value::Latitude(p)) => p.is_invalid(),
            (FieldKind::Lng, Value::Longitude(p)) => p.is_invalid(),
            (FieldKind::Native, v) => self.base.is_sentinel(v),
            // Mismatched shape: keep the field so the writer reports it.
            _ => false,
        }
    }
}

/// A typed FIT message the encoder can visit.
///
/// Implementations are expanded by the message declaration macro; the
/// value order matches the profile table's `sindex` order.
pub trait Mesg {
    /// Global message number of this message type.
    fn mesg_num(&self) -> MesgNum;

    /// Every declared field's current value, ordered by `sindex`.
    fn field_values(&self) -> Vec<Value>;
}

/// Profile descriptor table for `mesg`, ordered so that
/// `table[i].sindex == i`. `None` for numbers without a shipped table.
pub fn fields(mesg: MesgNum) -> Option<&'static [FieldDescriptor]> {
    messages::descriptor_table(mesg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sindex_ordered() {
        for raw in 0u16..=200 {
            let Ok(mesg) = MesgNum::try_from(raw) else {
                continue;
            };
            let Some(table) = fields(mesg) else {
                continue;
            };
            assert!(!table.is_empty(), "{mesg:?} table is empty");
            for (i, field) in table.iter().enumerate() {
                assert_eq!(
                    usize::from(field.sindex),
                    i,
                    "{mesg:?} field {i} out of order"
                );
                assert!(!field.array, "{mesg:?} declares an array field");
            }
        }
    }

    #[test]
    fn test_tables_match_message_field_counts() {
        assert_eq!(
            fields(MesgNum::FileId).unwrap().len(),
            FileIdMsg::new().field_values().len()
        );
        assert_eq!(
            fields(MesgNum::Record).unwrap().len(),
            RecordMsg::new().field_values().len()
        );
        assert_eq!(
            fields(MesgNum::Session).unwrap().len(),
            SessionMsg::new().field_values().len()
        );
    }

    #[test]
    fn test_new_messages_are_all_invalid() {
        let mesgs: Vec<(&'static str, MesgNum, Vec<Value>)> = vec![
            ("file_id", MesgNum::FileId, FileIdMsg::new().field_values()),
            ("record", MesgNum::Record, RecordMsg::new().field_values()),
            ("lap", MesgNum::Lap, LapMsg::new().field_values()),
            ("goal", MesgNum::Goal, GoalMsg::new().field_values()),
            (
                "segment_id",
                MesgNum::SegmentId,
                SegmentIdMsg::new().field_values(),
            ),
        ];
        for (name, num, values) in mesgs {
            let table = fields(num).unwrap();
            assert_eq!(table.len(), values.len());
            for (field, value) in table.iter().zip(&values) {
                assert!(
                    field.is_invalid(value),
                    "{name} field {} not at its sentinel",
                    field.sindex
                );
            }
        }
    }

    #[test]
    fn test_wire_size() {
        let table = fields(MesgNum::FileId).unwrap();
        // time_created: uint32 backing
        assert_eq!(table[4].wire_size(), 4);
        // product_name: string buffer length
        assert_eq!(table[6].wire_size(), 20);
    }

    #[test]
    fn test_mesg_num_conversions() {
        assert_eq!(MesgNum::try_from(20u16).unwrap(), MesgNum::Record);
        assert_eq!(u16::from(MesgNum::TimestampCorrelation), 162);
        assert!(MesgNum::try_from(11u16).is_err());
    }
}
