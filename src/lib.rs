//! # fitwire - FIT binary encoding
//!
//! Byte-exact encoder for the FIT (Flexible and Interoperable Data
//! Transfer) format used by fitness and sensor devices. A FIT file is a
//! 12- or 14-byte header, a stream of self-describing definition and data
//! records, and a Dynastream CRC-16 trailer:
//!
//! ```text
//! ┌────────────┬──────────────────────────────┬──────────┐
//! │ FileHeader │ definition / data records    │ crc16 le │
//! └────────────┴──────────────────────────────┴──────────┘
//! ```
//!
//! Callers build a typed [`File`] (a FileId message, optional common
//! messages, and one of the type-specific payload aggregates) and hand it
//! to [`encode`]. The encoder walks each message, drops every field still
//! at its base type's invalid sentinel, emits a definition record
//! describing the rest, then the matching data record, and finally seals
//! the stream with the CRC.
//!
//! ## Quick start
//!
//! ```
//! use fitwire::{encode, ActivityFile, ByteOrder, DateTime, File, FilePayload};
//! use fitwire::{Latitude, Longitude, RecordMsg};
//!
//! let mut activity = ActivityFile::default();
//! let mut record = RecordMsg::new();
//! record.timestamp = DateTime::from_fit_secs(1_000_000_000);
//! record.position_lat = Latitude::from_degrees(52.2053);
//! record.position_long = Longitude::from_degrees(0.1218);
//! record.heart_rate = 142;
//! activity.records.push(record);
//!
//! let mut file = File::new(FilePayload::Activity(activity));
//! file.file_id.manufacturer = 1;
//! file.file_id.time_created = DateTime::from_fit_secs(1_000_000_000);
//!
//! let mut out = Vec::new();
//! encode(&mut out, &mut file, ByteOrder::LittleEndian)?;
//!
//! assert_eq!(&out[8..12], b".FIT");
//! assert_eq!(file.crc, fitwire::checksum(&out[..out.len() - 2]));
//! # Ok::<(), fitwire::EncodeError>(())
//! ```
//!
//! ## Modules
//!
//! - [`crc`] - rolling Dynastream CRC-16
//! - [`types`] - base types, scalar values, byte order
//! - [`time`] / [`position`] - domain wrappers (FIT epoch seconds,
//!   semicircle coordinates)
//! - [`profile`] - generated message structs and their field tables
//! - [`file`] - the [`File`] container and payload aggregates
//! - [`header`] - the file header
//!
//! ## What is not encoded
//!
//! Fields at their invalid sentinel, array-valued profile fields, local
//! timestamps (their UTC offset is unrecoverable), and manufacturer
//! specific file types. The byte order chosen at the call site applies to
//! every record; the global message number inside definitions and the
//! trailer CRC are little-endian per the format.

use thiserror::Error;

pub mod crc;
mod encode;
pub mod file;
pub mod header;
pub mod position;
pub mod profile;
pub mod time;
pub mod types;

pub use crc::{checksum, Crc16};
pub use encode::encode;
pub use file::{
    ActivityFile, ActivitySummaryFile, BloodPressureFile, CourseFile, DeviceFile, File,
    FilePayload, FileType, GoalsFile, MonitoringAFile, MonitoringBFile, MonitoringDailyFile,
    SchedulesFile, SegmentFile, SegmentListFile, SettingsFile, SportFile, TotalsFile, WeightFile,
    WorkoutFile,
};
pub use header::FileHeader;
pub use position::{Latitude, Longitude};
pub use profile::{
    ActivityMsg, BikeProfileMsg, BloodPressureMsg, CadenceZoneMsg, CapabilitiesMsg, CourseMsg,
    CoursePointMsg, DeviceInfoMsg, DeviceSettingsMsg, EventMsg, FieldCapabilitiesMsg,
    FieldDescriptor, FieldKind, FileCapabilitiesMsg, FileCreatorMsg, FileIdMsg, GoalMsg, HrZoneMsg,
    HrmProfileMsg, LapMsg, LengthMsg, Mesg, MesgCapabilitiesMsg, MesgNum, MetZoneMsg,
    MonitoringInfoMsg, MonitoringMsg, PowerZoneMsg, RecordMsg, ScheduleMsg, SdmProfileMsg,
    SegmentFileMsg, SegmentIdMsg, SegmentLapMsg, SegmentLeaderboardEntryMsg, SegmentPointMsg,
    SessionMsg, SoftwareMsg, SpeedZoneMsg, SportMsg, TimestampCorrelationMsg, TotalsMsg,
    UserProfileMsg, WeightScaleMsg, WorkoutMsg, WorkoutStepMsg, ZonesTargetMsg,
};
pub use time::{DateTime, LocalDateTime, FIT_EPOCH_UNIX};
pub use types::{BaseType, ByteOrder, Value};

/// FIT protocol version written into new headers (2.0).
pub const PROTOCOL_VERSION: u8 = 0x20;

/// FIT profile version written into new headers (21.32).
pub const PROFILE_VERSION: u16 = 2132;

/// Errors from encoding a FIT file.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The FileId type does not match the populated payload variant.
    #[error("fit file type is {actual:?}, not {requested:?}")]
    WrongFileType {
        actual: FileType,
        requested: FileType,
    },

    /// A field or file requests a feature this encoder does not implement.
    #[error("not supported: {0}")]
    Unsupported(&'static str),

    /// A string field does not survive truncation to its declared buffer.
    #[error("can't encode {0:?} as UTF-8 string")]
    InvalidUtf8(String),

    /// The value supplied for a field is not assignable to its declared
    /// base type.
    #[error("value {value:?} does not match base type {base:?}")]
    TypeMismatch { base: BaseType, value: Value },

    /// The sink failed; the cause is surfaced unchanged.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    /// A message's field count disagrees with its profile table.
    #[error("message {mesg:?} has {got} fields, profile declares {want}")]
    FieldCountMismatch {
        mesg: MesgNum,
        got: usize,
        want: usize,
    },

    /// Elements of a message list disagree on which fields are populated,
    /// so one shared definition record cannot describe them all.
    #[error("list elements of {mesg:?} have differing field layouts")]
    NonUniformList { mesg: MesgNum },

    /// Header size other than 12 or 14 bytes.
    #[error("invalid header size {size}")]
    InvalidHeader { size: u8 },
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
