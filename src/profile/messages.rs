//! Message structs and their profile tables.
//!
//! One `fit_mesg!` invocation per global message number expands the typed
//! struct (fields in `sindex` order), an all-invalid `Default`, the
//! [`Mesg`] impl, and the static [`FieldDescriptor`] table. Field numbers
//! and base types follow the FIT global profile; array-typed profile
//! fields are not declared here.

use super::{FieldDescriptor, FieldKind, Mesg, MesgNum};
use crate::file::FileType;
use crate::position::{Latitude, Longitude};
use crate::time::{DateTime, LocalDateTime};
use crate::types::{BaseType, Value};

/// Expands one profile table into a message struct.
///
/// Each field line is `(sindex, name, rust type, wire number, base token)`,
/// where the base token is a FIT base type keyword (`uint16`, `uint32z`,
/// `string <len>`, ...), `enum` with an optional typed enum, or one of the
/// domain kinds `time_utc`, `time_local`, `lat`, `lng`.
macro_rules! fit_mesg {
    // invalid sentinel per base token
    (@invalid enum $t:ty) => { <$t>::Invalid };
    (@invalid enum) => { 0xFFu8 };
    (@invalid sint8) => { 0x7Fi8 };
    (@invalid uint8) => { 0xFFu8 };
    (@invalid sint16) => { 0x7FFFi16 };
    (@invalid uint16) => { 0xFFFFu16 };
    (@invalid sint32) => { 0x7FFF_FFFFi32 };
    (@invalid uint32) => { 0xFFFF_FFFFu32 };
    (@invalid string $len:literal) => { String::new() };
    (@invalid float32) => { f32::NAN };
    (@invalid float64) => { f64::NAN };
    (@invalid uint8z) => { 0u8 };
    (@invalid uint16z) => { 0u16 };
    (@invalid uint32z) => { 0u32 };
    (@invalid byte) => { 0xFFu8 };
    (@invalid sint64) => { 0x7FFF_FFFF_FFFF_FFFFi64 };
    (@invalid uint64) => { 0xFFFF_FFFF_FFFF_FFFFu64 };
    (@invalid uint64z) => { 0u64 };
    (@invalid time_utc) => { DateTime::INVALID };
    (@invalid time_local) => { LocalDateTime::INVALID };
    (@invalid lat) => { Latitude::INVALID };
    (@invalid lng) => { Longitude::INVALID };

    // Value constructor per base token
    (@value $v:expr, enum $t:ty) => { Value::Uint8($v as u8) };
    (@value $v:expr, enum) => { Value::Uint8($v) };
    (@value $v:expr, sint8) => { Value::Sint8($v) };
    (@value $v:expr, uint8) => { Value::Uint8($v) };
    (@value $v:expr, sint16) => { Value::Sint16($v) };
    (@value $v:expr, uint16) => { Value::Uint16($v) };
    (@value $v:expr, sint32) => { Value::Sint32($v) };
    (@value $v:expr, uint32) => { Value::Uint32($v) };
    (@value $v:expr, string $len:literal) => { Value::String($v.clone()) };
    (@value $v:expr, float32) => { Value::Float32($v) };
    (@value $v:expr, float64) => { Value::Float64($v) };
    (@value $v:expr, uint8z) => { Value::Uint8($v) };
    (@value $v:expr, uint16z) => { Value::Uint16($v) };
    (@value $v:expr, uint32z) => { Value::Uint32($v) };
    (@value $v:expr, byte) => { Value::Uint8($v) };
    (@value $v:expr, sint64) => { Value::Sint64($v) };
    (@value $v:expr, uint64) => { Value::Uint64($v) };
    (@value $v:expr, uint64z) => { Value::Uint64($v) };
    (@value $v:expr, time_utc) => { Value::DateTime($v) };
    (@value $v:expr, time_local) => { Value::LocalDateTime($v) };
    (@value $v:expr, lat) => { Value::Latitude($v) };
    (@value $v:expr, lng) => { Value::Longitude($v) };

    // descriptor per base token
    (@desc $sindex:literal, $num:literal, enum $t:ty) => {
        fit_mesg!(@native $sindex, $num, BaseType::Enum, 1)
    };
    (@desc $sindex:literal, $num:literal, enum) => {
        fit_mesg!(@native $sindex, $num, BaseType::Enum, 1)
    };
    (@desc $sindex:literal, $num:literal, sint8) => {
        fit_mesg!(@native $sindex, $num, BaseType::Sint8, 1)
    };
    (@desc $sindex:literal, $num:literal, uint8) => {
        fit_mesg!(@native $sindex, $num, BaseType::Uint8, 1)
    };
    (@desc $sindex:literal, $num:literal, sint16) => {
        fit_mesg!(@native $sindex, $num, BaseType::Sint16, 1)
    };
    (@desc $sindex:literal, $num:literal, uint16) => {
        fit_mesg!(@native $sindex, $num, BaseType::Uint16, 1)
    };
    (@desc $sindex:literal, $num:literal, sint32) => {
        fit_mesg!(@native $sindex, $num, BaseType::Sint32, 1)
    };
    (@desc $sindex:literal, $num:literal, uint32) => {
        fit_mesg!(@native $sindex, $num, BaseType::Uint32, 1)
    };
    (@desc $sindex:literal, $num:literal, string $len:literal) => {
        fit_mesg!(@native $sindex, $num, BaseType::String, $len)
    };
    (@desc $sindex:literal, $num:literal, float32) => {
        fit_mesg!(@native $sindex, $num, BaseType::Float32, 1)
    };
    (@desc $sindex:literal, $num:literal, float64) => {
        fit_mesg!(@native $sindex, $num, BaseType::Float64, 1)
    };
    (@desc $sindex:literal, $num:literal, uint8z) => {
        fit_mesg!(@native $sindex, $num, BaseType::Uint8z, 1)
    };
    (@desc $sindex:literal, $num:literal, uint16z) => {
        fit_mesg!(@native $sindex, $num, BaseType::Uint16z, 1)
    };
    (@desc $sindex:literal, $num:literal, uint32z) => {
        fit_mesg!(@native $sindex, $num, BaseType::Uint32z, 1)
    };
    (@desc $sindex:literal, $num:literal, byte) => {
        fit_mesg!(@native $sindex, $num, BaseType::Byte, 1)
    };
    (@desc $sindex:literal, $num:literal, sint64) => {
        fit_mesg!(@native $sindex, $num, BaseType::Sint64, 1)
    };
    (@desc $sindex:literal, $num:literal, uint64) => {
        fit_mesg!(@native $sindex, $num, BaseType::Uint64, 1)
    };
    (@desc $sindex:literal, $num:literal, uint64z) => {
        fit_mesg!(@native $sindex, $num, BaseType::Uint64z, 1)
    };
    (@desc $sindex:literal, $num:literal, time_utc) => {
        FieldDescriptor {
            sindex: $sindex,
            num: $num,
            kind: FieldKind::TimeUtc,
            base: BaseType::Uint32,
            array: false,
            length: 1,
        }
    };
    (@desc $sindex:literal, $num:literal, time_local) => {
        FieldDescriptor {
            sindex: $sindex,
            num: $num,
            kind: FieldKind::TimeLocal,
            base: BaseType::Uint32,
            array: false,
            length: 1,
        }
    };
    (@desc $sindex:literal, $num:literal, lat) => {
        FieldDescriptor {
            sindex: $sindex,
            num: $num,
            kind: FieldKind::Lat,
            base: BaseType::Sint32,
            array: false,
            length: 1,
        }
    };
    (@desc $sindex:literal, $num:literal, lng) => {
        FieldDescriptor {
            sindex: $sindex,
            num: $num,
            kind: FieldKind::Lng,
            base: BaseType::Sint32,
            array: false,
            length: 1,
        }
    };
    (@native $sindex:literal, $num:literal, $base:expr, $len:literal) => {
        FieldDescriptor {
            sindex: $sindex,
            num: $num,
            kind: FieldKind::Native,
            base: $base,
            array: false,
            length: $len,
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident, $mesg:ident, $table:ident {
            $( ($sindex:literal, $field:ident, $ty:ty, $num:literal, $($tok:tt)*) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( pub $field: $ty, )+
        }

        impl Default for $name {
            /// Every field at its invalid sentinel.
            fn default() -> Self {
                Self {
                    $( $field: fit_mesg!(@invalid $($tok)*), )+
                }
            }
        }

        impl $name {
            /// New message with every field at its invalid sentinel.
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl Mesg for $name {
            fn mesg_num(&self) -> MesgNum {
                MesgNum::$mesg
            }

            fn field_values(&self) -> Vec<Value> {
                vec![ $( fit_mesg!(@value self.$field, $($tok)*) ),+ ]
            }
        }

        pub(crate) static $table: &[FieldDescriptor] = &[
            $( fit_mesg!(@desc $sindex, $num, $($tok)*), )+
        ];
    };
}

fit_mesg! {
    /// File identification, the required first message of every file
    /// (global 0).
    FileIdMsg, FileId, FILE_ID_FIELDS {
        (0, file_type, FileType, 0, enum FileType),
        (1, manufacturer, u16, 1, uint16),
        (2, product, u16, 2, uint16),
        (3, serial_number, u32, 3, uint32z),
        (4, time_created, DateTime, 4, time_utc),
        (5, number, u16, 5, uint16),
        (6, product_name, String, 8, string 20),
    }
}

fit_mesg! {
    /// Software that created the file (global 49).
    FileCreatorMsg, FileCreator, FILE_CREATOR_FIELDS {
        (0, software_version, u16, 0, uint16),
        (1, hardware_version, u8, 1, uint8),
    }
}

fit_mesg! {
    /// Correlation between system and UTC timestamps (global 162).
    TimestampCorrelationMsg, TimestampCorrelation, TIMESTAMP_CORRELATION_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, fractional_timestamp, u16, 0, uint16),
        (2, system_timestamp, DateTime, 1, time_utc),
        (3, fractional_system_timestamp, u16, 2, uint16),
        (4, local_timestamp, LocalDateTime, 3, time_local),
        (5, timestamp_ms, u16, 4, uint16),
        (6, system_timestamp_ms, u16, 5, uint16),
    }
}

fit_mesg! {
    /// Hardware that produced the data (global 23).
    DeviceInfoMsg, DeviceInfo, DEVICE_INFO_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, device_index, u8, 0, uint8),
        (2, device_type, u8, 1, uint8),
        (3, manufacturer, u16, 2, uint16),
        (4, serial_number, u32, 3, uint32z),
        (5, product, u16, 4, uint16),
        (6, software_version, u16, 5, uint16),
        (7, hardware_version, u8, 6, uint8),
        (8, battery_voltage, u16, 10, uint16),
        (9, product_name, String, 27, string 20),
    }
}

fit_mesg! {
    /// Activity summary (global 34).
    ActivityMsg, Activity, ACTIVITY_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, total_timer_time, u32, 0, uint32),
        (2, num_sessions, u16, 1, uint16),
        (3, activity_type, u8, 2, enum),
        (4, event, u8, 3, enum),
        (5, event_type, u8, 4, enum),
        (6, local_timestamp, LocalDateTime, 5, time_local),
        (7, event_group, u8, 6, uint8),
    }
}

fit_mesg! {
    /// Per-session summary (global 18).
    SessionMsg, Session, SESSION_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, event, u8, 0, enum),
        (2, event_type, u8, 1, enum),
        (3, start_time, DateTime, 2, time_utc),
        (4, start_position_lat, Latitude, 3, lat),
        (5, start_position_long, Longitude, 4, lng),
        (6, sport, u8, 5, enum),
        (7, sub_sport, u8, 6, enum),
        (8, total_elapsed_time, u32, 7, uint32),
        (9, total_timer_time, u32, 8, uint32),
        (10, total_distance, u32, 9, uint32),
        (11, total_calories, u16, 11, uint16),
        (12, avg_speed, u16, 14, uint16),
        (13, max_speed, u16, 15, uint16),
        (14, avg_heart_rate, u8, 16, uint8),
        (15, max_heart_rate, u8, 17, uint8),
    }
}

fit_mesg! {
    /// Per-lap summary (global 19).
    LapMsg, Lap, LAP_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, event, u8, 0, enum),
        (2, event_type, u8, 1, enum),
        (3, start_time, DateTime, 2, time_utc),
        (4, start_position_lat, Latitude, 3, lat),
        (5, start_position_long, Longitude, 4, lng),
        (6, end_position_lat, Latitude, 5, lat),
        (7, end_position_long, Longitude, 6, lng),
        (8, total_elapsed_time, u32, 7, uint32),
        (9, total_timer_time, u32, 8, uint32),
        (10, total_distance, u32, 9, uint32),
        (11, total_calories, u16, 11, uint16),
        (12, avg_speed, u16, 13, uint16),
        (13, max_speed, u16, 14, uint16),
        (14, avg_heart_rate, u8, 15, uint8),
        (15, max_heart_rate, u8, 16, uint8),
    }
}

fit_mesg! {
    /// One point of a recording (global 20).
    RecordMsg, Record, RECORD_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, position_lat, Latitude, 0, lat),
        (2, position_long, Longitude, 1, lng),
        (3, altitude, u16, 2, uint16),
        (4, heart_rate, u8, 3, uint8),
        (5, cadence, u8, 4, uint8),
        (6, distance, u32, 5, uint32),
        (7, speed, u16, 6, uint16),
        (8, power, u16, 7, uint16),
        (9, temperature, i8, 13, sint8),
    }
}

fit_mesg! {
    /// Timer and workout events (global 21).
    EventMsg, Event, EVENT_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, event, u8, 0, enum),
        (2, event_type, u8, 1, enum),
        (3, data16, u16, 2, uint16),
        (4, data, u32, 3, uint32),
        (5, event_group, u8, 4, uint8),
    }
}

fit_mesg! {
    /// One pool length of a swim activity (global 101).
    LengthMsg, Length, LENGTH_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, event, u8, 0, enum),
        (2, event_type, u8, 1, enum),
        (3, start_time, DateTime, 2, time_utc),
        (4, total_elapsed_time, u32, 3, uint32),
        (5, total_timer_time, u32, 4, uint32),
        (6, total_strokes, u16, 5, uint16),
        (7, avg_speed, u16, 6, uint16),
        (8, swim_stroke, u8, 7, enum),
        (9, avg_swimming_cadence, u8, 9, uint8),
        (10, length_type, u8, 12, enum),
    }
}

fit_mesg! {
    /// Installed software version (global 35).
    SoftwareMsg, Software, SOFTWARE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, version, u16, 3, uint16),
        (2, part_number, String, 5, string 16),
    }
}

fit_mesg! {
    /// Device capability flags (global 1).
    CapabilitiesMsg, Capabilities, CAPABILITIES_FIELDS {
        (0, workouts_supported, u32, 21, uint32z),
        (1, connectivity_supported, u32, 23, uint32z),
    }
}

fit_mesg! {
    /// Per-file-type capabilities (global 37).
    FileCapabilitiesMsg, FileCapabilities, FILE_CAPABILITIES_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, file_type, FileType, 0, enum FileType),
        (2, flags, u8, 1, uint8z),
        (3, directory, String, 2, string 16),
        (4, max_count, u16, 3, uint16),
        (5, max_size, u32, 4, uint32),
    }
}

fit_mesg! {
    /// Per-message capabilities (global 38).
    MesgCapabilitiesMsg, MesgCapabilities, MESG_CAPABILITIES_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, file_type, FileType, 0, enum FileType),
        (2, mesg_num, u16, 1, uint16),
        (3, count_type, u8, 2, enum),
        (4, count, u16, 3, uint16),
    }
}

fit_mesg! {
    /// Per-field capabilities (global 39).
    FieldCapabilitiesMsg, FieldCapabilities, FIELD_CAPABILITIES_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, file_type, FileType, 0, enum FileType),
        (2, mesg_num, u16, 1, uint16),
        (3, field_num, u8, 2, uint8),
        (4, count, u16, 3, uint16),
    }
}

fit_mesg! {
    /// Owner profile (global 3).
    UserProfileMsg, UserProfile, USER_PROFILE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, friendly_name, String, 0, string 16),
        (2, gender, u8, 1, enum),
        (3, age, u8, 2, uint8),
        (4, height, u8, 3, uint8),
        (5, weight, u16, 4, uint16),
        (6, language, u8, 5, enum),
        (7, resting_heart_rate, u8, 8, uint8),
    }
}

fit_mesg! {
    /// Paired heart-rate monitor settings (global 4).
    HrmProfileMsg, HrmProfile, HRM_PROFILE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, enabled, u8, 0, enum),
        (2, hrm_ant_id, u16, 1, uint16z),
        (3, log_hrv, u8, 2, enum),
        (4, hrm_ant_id_trans_type, u8, 3, uint8z),
    }
}

fit_mesg! {
    /// Paired stride sensor settings (global 5).
    SdmProfileMsg, SdmProfile, SDM_PROFILE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, enabled, u8, 0, enum),
        (2, sdm_ant_id, u16, 1, uint16z),
        (3, sdm_cal_factor, u16, 2, uint16),
        (4, odometer, u32, 3, uint32),
        (5, speed_source, u8, 4, enum),
    }
}

fit_mesg! {
    /// Per-bike settings (global 6).
    BikeProfileMsg, BikeProfile, BIKE_PROFILE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, name, String, 0, string 16),
        (2, sport, u8, 1, enum),
        (3, sub_sport, u8, 2, enum),
        (4, odometer, u32, 3, uint32),
        (5, bike_spd_ant_id, u16, 4, uint16z),
        (6, bike_cad_ant_id, u16, 5, uint16z),
    }
}

fit_mesg! {
    /// Device-wide settings (global 2).
    DeviceSettingsMsg, DeviceSettings, DEVICE_SETTINGS_FIELDS {
        (0, active_time_zone, u8, 0, uint8),
        (1, utc_offset, u32, 1, uint32),
    }
}

fit_mesg! {
    /// Sport and sub-sport of a recording (global 12).
    SportMsg, Sport, SPORT_FIELDS {
        (0, sport, u8, 0, enum),
        (1, sub_sport, u8, 1, enum),
        (2, name, String, 3, string 16),
    }
}

fit_mesg! {
    /// Training targets (global 7).
    ZonesTargetMsg, ZonesTarget, ZONES_TARGET_FIELDS {
        (0, max_heart_rate, u8, 1, uint8),
        (1, threshold_heart_rate, u8, 2, uint8),
        (2, functional_threshold_power, u16, 3, uint16),
        (3, hr_calc_type, u8, 5, enum),
        (4, pwr_calc_type, u8, 7, enum),
    }
}

fit_mesg! {
    /// Heart-rate zone boundary (global 8).
    HrZoneMsg, HrZone, HR_ZONE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, high_bpm, u8, 1, uint8),
        (2, name, String, 2, string 16),
    }
}

fit_mesg! {
    /// Power zone boundary (global 9).
    PowerZoneMsg, PowerZone, POWER_ZONE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, high_value, u16, 1, uint16),
        (2, name, String, 2, string 16),
    }
}

fit_mesg! {
    /// Metabolic zone boundary (global 10).
    MetZoneMsg, MetZone, MET_ZONE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, high_bpm, u8, 1, uint8),
        (2, calories, u16, 2, uint16),
        (3, fat_calories, u8, 3, uint8),
    }
}

fit_mesg! {
    /// Speed zone boundary (global 53).
    SpeedZoneMsg, SpeedZone, SPEED_ZONE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, high_value, u16, 0, uint16),
        (2, name, String, 1, string 16),
    }
}

fit_mesg! {
    /// Cadence zone boundary (global 131).
    CadenceZoneMsg, CadenceZone, CADENCE_ZONE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, high_value, u8, 0, uint8),
        (2, name, String, 1, string 16),
    }
}

fit_mesg! {
    /// Workout header (global 26).
    WorkoutMsg, Workout, WORKOUT_FIELDS {
        (0, sport, u8, 4, enum),
        (1, capabilities, u32, 5, uint32z),
        (2, num_valid_steps, u16, 6, uint16),
        (3, wkt_name, String, 8, string 16),
    }
}

fit_mesg! {
    /// One step of a workout (global 27).
    WorkoutStepMsg, WorkoutStep, WORKOUT_STEP_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, wkt_step_name, String, 0, string 16),
        (2, duration_type, u8, 1, enum),
        (3, duration_value, u32, 2, uint32),
        (4, target_type, u8, 3, enum),
        (5, target_value, u32, 4, uint32),
        (6, intensity, u8, 7, enum),
    }
}

fit_mesg! {
    /// Scheduled workout or course (global 28).
    ScheduleMsg, Schedule, SCHEDULE_FIELDS {
        (0, manufacturer, u16, 0, uint16),
        (1, product, u16, 1, uint16),
        (2, serial_number, u32, 2, uint32z),
        (3, time_created, DateTime, 3, time_utc),
        (4, completed, u8, 4, enum),
        (5, schedule_type, u8, 5, enum),
        (6, scheduled_time, LocalDateTime, 6, time_local),
    }
}

fit_mesg! {
    /// One weighing (global 30).
    WeightScaleMsg, WeightScale, WEIGHT_SCALE_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, weight, u16, 0, uint16),
        (2, percent_fat, u16, 1, uint16),
        (3, percent_hydration, u16, 2, uint16),
        (4, bone_mass, u16, 4, uint16),
        (5, muscle_mass, u16, 5, uint16),
        (6, basal_met, u16, 7, uint16),
        (7, user_profile_index, u16, 12, uint16),
    }
}

fit_mesg! {
    /// Lifetime totals per sport (global 33).
    TotalsMsg, Totals, TOTALS_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, timer_time, u32, 0, uint32),
        (2, distance, u32, 1, uint32),
        (3, calories, u32, 2, uint32),
        (4, sport, u8, 3, enum),
        (5, elapsed_time, u32, 4, uint32),
        (6, sessions, u16, 5, uint16),
    }
}

fit_mesg! {
    /// Training goal (global 15).
    GoalMsg, Goal, GOAL_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, sport, u8, 0, enum),
        (2, sub_sport, u8, 1, enum),
        (3, start_date, DateTime, 2, time_utc),
        (4, end_date, DateTime, 3, time_utc),
        (5, goal_type, u8, 4, enum),
        (6, value, u32, 5, uint32),
        (7, repeat, u8, 6, enum),
        (8, target_value, u32, 7, uint32),
        (9, recurrence, u8, 8, enum),
        (10, enabled, u8, 10, enum),
    }
}

fit_mesg! {
    /// One blood-pressure reading (global 51).
    BloodPressureMsg, BloodPressure, BLOOD_PRESSURE_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, systolic_pressure, u16, 0, uint16),
        (2, diastolic_pressure, u16, 1, uint16),
        (3, mean_arterial_pressure, u16, 2, uint16),
        (4, map_3_sample_mean, u16, 3, uint16),
        (5, heart_rate, u8, 6, uint8),
        (6, status, u8, 8, enum),
        (7, user_profile_index, u16, 9, uint16),
    }
}

fit_mesg! {
    /// Start of a monitoring period (global 103).
    MonitoringInfoMsg, MonitoringInfo, MONITORING_INFO_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, local_timestamp, LocalDateTime, 0, time_local),
    }
}

fit_mesg! {
    /// One monitoring sample (global 55).
    MonitoringMsg, Monitoring, MONITORING_FIELDS {
        (0, timestamp, DateTime, 253, time_utc),
        (1, device_index, u8, 0, uint8),
        (2, calories, u16, 1, uint16),
        (3, distance, u32, 2, uint32),
        (4, cycles, u32, 3, uint32),
        (5, active_time, u32, 4, uint32),
        (6, activity_type, u8, 5, enum),
        (7, activity_subtype, u8, 6, enum),
        (8, local_timestamp, LocalDateTime, 11, time_local),
        (9, temperature, i16, 12, sint16),
        (10, heart_rate, u8, 27, uint8),
    }
}

fit_mesg! {
    /// Per-lap summary of a segment attempt (global 142).
    SegmentLapMsg, SegmentLap, SEGMENT_LAP_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, timestamp, DateTime, 253, time_utc),
        (2, event, u8, 0, enum),
        (3, event_type, u8, 1, enum),
        (4, start_time, DateTime, 2, time_utc),
        (5, start_position_lat, Latitude, 3, lat),
        (6, start_position_long, Longitude, 4, lng),
        (7, end_position_lat, Latitude, 5, lat),
        (8, end_position_long, Longitude, 6, lng),
        (9, total_elapsed_time, u32, 7, uint32),
        (10, total_timer_time, u32, 8, uint32),
        (11, total_distance, u32, 9, uint32),
        (12, total_calories, u16, 11, uint16),
    }
}

fit_mesg! {
    /// Segment identification (global 148).
    SegmentIdMsg, SegmentId, SEGMENT_ID_FIELDS {
        (0, name, String, 0, string 32),
        (1, uuid, String, 1, string 36),
        (2, sport, u8, 2, enum),
        (3, enabled, u8, 3, enum),
        (4, user_profile_primary_key, u32, 4, uint32),
        (5, device_id, u32, 5, uint32),
        (6, default_race_leader, u8, 6, uint8),
        (7, delete_status, u8, 7, enum),
        (8, selection_type, u8, 8, enum),
    }
}

fit_mesg! {
    /// One leaderboard entry of a segment (global 149).
    SegmentLeaderboardEntryMsg, SegmentLeaderboardEntry, SEGMENT_LEADERBOARD_ENTRY_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, name, String, 0, string 16),
        (2, entry_type, u8, 1, enum),
        (3, group_primary_key, u32, 2, uint32),
        (4, activity_id, u32, 3, uint32),
        (5, segment_time, u32, 4, uint32),
    }
}

fit_mesg! {
    /// One point along a segment (global 150).
    SegmentPointMsg, SegmentPoint, SEGMENT_POINT_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, position_lat, Latitude, 1, lat),
        (2, position_long, Longitude, 2, lng),
        (3, distance, u32, 3, uint32),
        (4, altitude, u16, 4, uint16),
    }
}

fit_mesg! {
    /// Reference to a stored segment file (global 151).
    SegmentFileMsg, SegmentFile, SEGMENT_FILE_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, file_uuid, String, 1, string 36),
        (2, enabled, u8, 3, enum),
        (3, user_profile_primary_key, u32, 4, uint32),
        (4, leader_type, u8, 7, enum),
    }
}

fit_mesg! {
    /// Course header (global 31).
    CourseMsg, Course, COURSE_FIELDS {
        (0, sport, u8, 4, enum),
        (1, name, String, 5, string 16),
        (2, capabilities, u32, 6, uint32z),
        (3, sub_sport, u8, 7, enum),
    }
}

fit_mesg! {
    /// Waypoint of a course (global 32).
    CoursePointMsg, CoursePoint, COURSE_POINT_FIELDS {
        (0, message_index, u16, 254, uint16),
        (1, timestamp, DateTime, 1, time_utc),
        (2, position_lat, Latitude, 2, lat),
        (3, position_long, Longitude, 3, lng),
        (4, distance, u32, 4, uint32),
        (5, point_type, u8, 5, enum),
        (6, name, String, 6, string 16),
    }
}

/// Descriptor table for `mesg`, or `None` for numbers without one.
pub(crate) fn descriptor_table(mesg: MesgNum) -> Option<&'static [FieldDescriptor]> {
    match mesg {
        MesgNum::FileId => Some(FILE_ID_FIELDS),
        MesgNum::Capabilities => Some(CAPABILITIES_FIELDS),
        MesgNum::DeviceSettings => Some(DEVICE_SETTINGS_FIELDS),
        MesgNum::UserProfile => Some(USER_PROFILE_FIELDS),
        MesgNum::HrmProfile => Some(HRM_PROFILE_FIELDS),
        MesgNum::SdmProfile => Some(SDM_PROFILE_FIELDS),
        MesgNum::BikeProfile => Some(BIKE_PROFILE_FIELDS),
        MesgNum::ZonesTarget => Some(ZONES_TARGET_FIELDS),
        MesgNum::HrZone => Some(HR_ZONE_FIELDS),
        MesgNum::PowerZone => Some(POWER_ZONE_FIELDS),
        MesgNum::MetZone => Some(MET_ZONE_FIELDS),
        MesgNum::Sport => Some(SPORT_FIELDS),
        MesgNum::Goal => Some(GOAL_FIELDS),
        MesgNum::Session => Some(SESSION_FIELDS),
        MesgNum::Lap => Some(LAP_FIELDS),
        MesgNum::Record => Some(RECORD_FIELDS),
        MesgNum::Event => Some(EVENT_FIELDS),
        MesgNum::DeviceInfo => Some(DEVICE_INFO_FIELDS),
        MesgNum::Workout => Some(WORKOUT_FIELDS),
        MesgNum::WorkoutStep => Some(WORKOUT_STEP_FIELDS),
        MesgNum::Schedule => Some(SCHEDULE_FIELDS),
        MesgNum::WeightScale => Some(WEIGHT_SCALE_FIELDS),
        MesgNum::Course => Some(COURSE_FIELDS),
        MesgNum::CoursePoint => Some(COURSE_POINT_FIELDS),
        MesgNum::Totals => Some(TOTALS_FIELDS),
        MesgNum::Activity => Some(ACTIVITY_FIELDS),
        MesgNum::Software => Some(SOFTWARE_FIELDS),
        MesgNum::FileCapabilities => Some(FILE_CAPABILITIES_FIELDS),
        MesgNum::MesgCapabilities => Some(MESG_CAPABILITIES_FIELDS),
        MesgNum::FieldCapabilities => Some(FIELD_CAPABILITIES_FIELDS),
        MesgNum::FileCreator => Some(FILE_CREATOR_FIELDS),
        MesgNum::BloodPressure => Some(BLOOD_PRESSURE_FIELDS),
        MesgNum::SpeedZone => Some(SPEED_ZONE_FIELDS),
        MesgNum::Monitoring => Some(MONITORING_FIELDS),
        MesgNum::Length => Some(LENGTH_FIELDS),
        MesgNum::MonitoringInfo => Some(MONITORING_INFO_FIELDS),
        MesgNum::CadenceZone => Some(CADENCE_ZONE_FIELDS),
        MesgNum::SegmentLap => Some(SEGMENT_LAP_FIELDS),
        MesgNum::SegmentId => Some(SEGMENT_ID_FIELDS),
        MesgNum::SegmentLeaderboardEntry => Some(SEGMENT_LEADERBOARD_ENTRY_FIELDS),
        MesgNum::SegmentPoint => Some(SEGMENT_POINT_FIELDS),
        MesgNum::SegmentFile => Some(SEGMENT_FILE_FIELDS),
        MesgNum::TimestampCorrelation => Some(TIMESTAMP_CORRELATION_FIELDS),
        MesgNum::Invalid => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_number_has_a_table() {
        for raw in 0u16..=200 {
            if let Ok(mesg) = MesgNum::try_from(raw) {
                assert!(
                    descriptor_table(mesg).is_some(),
                    "{mesg:?} has no descriptor table"
                );
            }
        }
        assert!(descriptor_table(MesgNum::Invalid).is_none());
    }

    #[test]
    fn test_file_id_values_follow_struct_fields() {
        let mut file_id = FileIdMsg::new();
        file_id.file_type = FileType::Activity;
        file_id.manufacturer = 1;
        file_id.product_name = "edge".to_owned();

        let values = file_id.field_values();
        assert_eq!(values[0], Value::Uint8(FileType::Activity as u8));
        assert_eq!(values[1], Value::Uint16(1));
        assert_eq!(values[4], Value::DateTime(DateTime::INVALID));
        assert_eq!(values[6], Value::String("edge".to_owned()));
    }

    #[test]
    fn test_mesg_num_impls() {
        assert_eq!(RecordMsg::new().mesg_num(), MesgNum::Record);
        assert_eq!(FileIdMsg::new().mesg_num(), MesgNum::FileId);
        assert_eq!(
            TimestampCorrelationMsg::new().mesg_num(),
            MesgNum::TimestampCorrelation
        );
    }
}
