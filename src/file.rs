//! In-memory FIT files.
//!
//! A [`File`] is the unit the encoder consumes: a header, the required
//! FileId message, optional common messages, and one type-specific
//! [`FilePayload`] selected by `FileId.file_type`. Payload aggregates are
//! pure data containers; the encoder visits them in declared order.

use serde::{Deserialize, Serialize};

use crate::header::FileHeader;
use crate::profile::{
    ActivityMsg, BikeProfileMsg, BloodPressureMsg, CadenceZoneMsg, CapabilitiesMsg, CourseMsg,
    CoursePointMsg, DeviceInfoMsg, DeviceSettingsMsg, EventMsg, FieldCapabilitiesMsg,
    FileCapabilitiesMsg, FileCreatorMsg, FileIdMsg, GoalMsg, HrZoneMsg, HrmProfileMsg, LapMsg,
    LengthMsg, MesgCapabilitiesMsg, MetZoneMsg, MonitoringInfoMsg, MonitoringMsg, PowerZoneMsg,
    RecordMsg, ScheduleMsg, SdmProfileMsg, SegmentFileMsg, SegmentIdMsg, SegmentLapMsg,
    SegmentLeaderboardEntryMsg, SegmentPointMsg, SessionMsg, SoftwareMsg, SpeedZoneMsg, SportMsg,
    TimestampCorrelationMsg, TotalsMsg, UserProfileMsg, WeightScaleMsg, WorkoutMsg, WorkoutStepMsg,
    ZonesTargetMsg,
};

/// FIT file type, as carried by `FileId.file_type`.
#[repr(u8)]
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
pub enum FileType {
    Device = 1,
    Settings = 2,
    Sport = 3,
    Activity = 4,
    Workout = 5,
    Course = 6,
    Schedules = 7,
    Weight = 9,
    Totals = 10,
    Goals = 11,
    BloodPressure = 14,
    MonitoringA = 15,
    ActivitySummary = 20,
    MonitoringDaily = 28,
    MonitoringB = 32,
    Segment = 34,
    SegmentList = 35,
    MfgRangeMin = 0xF7,
    MfgRangeMax = 0xFE,
    Invalid = 0xFF,
}

impl FileType {
    /// Whether this type falls in the manufacturer-specific range, which
    /// has no profile and cannot be encoded.
    pub fn is_manufacturer_specific(self) -> bool {
        (FileType::MfgRangeMin as u8..=FileType::MfgRangeMax as u8).contains(&(self as u8))
    }
}

/// Messages of an activity file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFile {
    pub activity: Option<ActivityMsg>,
    pub sessions: Vec<SessionMsg>,
    pub laps: Vec<LapMsg>,
    pub lengths: Vec<LengthMsg>,
    pub records: Vec<RecordMsg>,
    pub events: Vec<EventMsg>,
}

/// Messages of a device file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceFile {
    pub softwares: Vec<SoftwareMsg>,
    pub capabilities: Vec<CapabilitiesMsg>,
    pub file_capabilities: Vec<FileCapabilitiesMsg>,
    pub mesg_capabilities: Vec<MesgCapabilitiesMsg>,
    pub field_capabilities: Vec<FieldCapabilitiesMsg>,
}

/// Messages of a settings file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsFile {
    pub user_profiles: Vec<UserProfileMsg>,
    pub hrm_profiles: Vec<HrmProfileMsg>,
    pub sdm_profiles: Vec<SdmProfileMsg>,
    pub bike_profiles: Vec<BikeProfileMsg>,
    pub device_settings: Vec<DeviceSettingsMsg>,
}

/// Messages of a sport settings file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SportFile {
    pub sport: Option<SportMsg>,
    pub zones_target: Option<ZonesTargetMsg>,
    pub hr_zones: Vec<HrZoneMsg>,
    pub power_zones: Vec<PowerZoneMsg>,
    pub met_zones: Vec<MetZoneMsg>,
    pub speed_zones: Vec<SpeedZoneMsg>,
    pub cadence_zones: Vec<CadenceZoneMsg>,
}

/// Messages of a workout file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutFile {
    pub workout: Option<WorkoutMsg>,
    pub workout_steps: Vec<WorkoutStepMsg>,
}

/// Messages of a course file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFile {
    pub course: Option<CourseMsg>,
    pub laps: Vec<LapMsg>,
    pub course_points: Vec<CoursePointMsg>,
    pub records: Vec<RecordMsg>,
    pub events: Vec<EventMsg>,
}

/// Messages of a schedules file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchedulesFile {
    pub schedules: Vec<ScheduleMsg>,
}

/// Messages of a weight file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightFile {
    pub user_profile: Option<UserProfileMsg>,
    pub weight_scales: Vec<WeightScaleMsg>,
    pub device_infos: Vec<DeviceInfoMsg>,
}

/// Messages of a totals file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotalsFile {
    pub totals: Vec<TotalsMsg>,
}

/// Messages of a goals file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalsFile {
    pub goals: Vec<GoalMsg>,
}

/// Messages of a blood-pressure file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BloodPressureFile {
    pub user_profile: Option<UserProfileMsg>,
    pub blood_pressures: Vec<BloodPressureMsg>,
    pub device_infos: Vec<DeviceInfoMsg>,
}

/// Messages of a monitoring A file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitoringAFile {
    pub monitoring_info: Option<MonitoringInfoMsg>,
    pub monitorings: Vec<MonitoringMsg>,
}

/// Messages of an activity summary file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitySummaryFile {
    pub activity: Option<ActivityMsg>,
    pub sessions: Vec<SessionMsg>,
    pub laps: Vec<LapMsg>,
}

/// Messages of a daily monitoring file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitoringDailyFile {
    pub monitorings: Vec<MonitoringMsg>,
}

/// Messages of a monitoring B file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitoringBFile {
    pub monitoring_info: Option<MonitoringInfoMsg>,
    pub monitorings: Vec<MonitoringMsg>,
    pub device_infos: Vec<DeviceInfoMsg>,
}

/// Messages of a segment file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentFile {
    pub segment_id: Option<SegmentIdMsg>,
    pub leaderboard_entries: Vec<SegmentLeaderboardEntryMsg>,
    pub points: Vec<SegmentPointMsg>,
    pub laps: Vec<SegmentLapMsg>,
}

/// Messages of a segment list file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentListFile {
    pub segment_files: Vec<SegmentFileMsg>,
}

/// Type-specific payload of a FIT file, selected by `FileId.file_type`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilePayload {
    Activity(ActivityFile),
    Device(DeviceFile),
    Settings(SettingsFile),
    Sport(SportFile),
    Workout(WorkoutFile),
    Course(CourseFile),
    Schedules(SchedulesFile),
    Weight(WeightFile),
    Totals(TotalsFile),
    Goals(GoalsFile),
    BloodPressure(BloodPressureFile),
    MonitoringA(MonitoringAFile),
    ActivitySummary(ActivitySummaryFile),
    MonitoringDaily(MonitoringDailyFile),
    MonitoringB(MonitoringBFile),
    Segment(SegmentFile),
    SegmentList(SegmentListFile),
}

impl FilePayload {
    /// The file type this payload belongs to.
    pub fn file_type(&self) -> FileType {
        match self {
            FilePayload::Activity(_) => FileType::Activity,
            FilePayload::Device(_) => FileType::Device,
            FilePayload::Settings(_) => FileType::Settings,
            FilePayload::Sport(_) => FileType::Sport,
            FilePayload::Workout(_) => FileType::Workout,
            FilePayload::Course(_) => FileType::Course,
            FilePayload::Schedules(_) => FileType::Schedules,
            FilePayload::Weight(_) => FileType::Weight,
            FilePayload::Totals(_) => FileType::Totals,
            FilePayload::Goals(_) => FileType::Goals,
            FilePayload::BloodPressure(_) => FileType::BloodPressure,
            FilePayload::MonitoringA(_) => FileType::MonitoringA,
            FilePayload::ActivitySummary(_) => FileType::ActivitySummary,
            FilePayload::MonitoringDaily(_) => FileType::MonitoringDaily,
            FilePayload::MonitoringB(_) => FileType::MonitoringB,
            FilePayload::Segment(_) => FileType::Segment,
            FilePayload::SegmentList(_) => FileType::SegmentList,
        }
    }
}

/// A complete in-memory FIT file.
///
/// A successful [`encode`](crate::encode) rewrites `header.data_size`,
/// `header.crc` and `crc` with the values it wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub header: FileHeader,
    /// File CRC as written in the trailer.
    pub crc: u16,
    /// Required first message of every file.
    pub file_id: FileIdMsg,
    pub file_creator: Option<FileCreatorMsg>,
    pub timestamp_correlation: Option<TimestampCorrelationMsg>,
    pub device_info: Option<DeviceInfoMsg>,
    pub payload: FilePayload,
}

impl File {
    /// New file for `payload`, with `file_id.file_type` set to match and a
    /// default 14-byte header.
    pub fn new(payload: FilePayload) -> Self {
        let mut file_id = FileIdMsg::new();
        file_id.file_type = payload.file_type();
        File {
            header: FileHeader::new(),
            crc: 0,
            file_id,
            file_creator: None,
            timestamp_correlation: None,
            device_info: None,
            payload,
        }
    }

    /// The file type declared by the FileId message.
    pub fn file_type(&self) -> FileType {
        self.file_id.file_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_file_id_type() {
        let file = File::new(FilePayload::Activity(ActivityFile::default()));
        assert_eq!(file.file_type(), FileType::Activity);

        let file = File::new(FilePayload::Course(CourseFile::default()));
        assert_eq!(file.file_type(), FileType::Course);
    }

    #[test]
    fn test_payload_file_types() {
        assert_eq!(
            FilePayload::Segment(SegmentFile::default()).file_type(),
            FileType::Segment
        );
        assert_eq!(
            FilePayload::MonitoringDaily(MonitoringDailyFile::default()).file_type(),
            FileType::MonitoringDaily
        );
    }

    #[test]
    fn test_manufacturer_range() {
        assert!(FileType::MfgRangeMin.is_manufacturer_specific());
        assert!(FileType::MfgRangeMax.is_manufacturer_specific());
        assert!(!FileType::Activity.is_manufacturer_specific());
        assert!(!FileType::Invalid.is_manufacturer_specific());
    }
}
