//! Property tests over generated inputs: CRC laws, value round trips, and
//! the architecture byte.

mod common;

use fitwire::{
    checksum, encode, ActivityFile, ByteOrder, Crc16, DateTime, File, FilePayload, Latitude,
    Longitude, RecordMsg,
};
use proptest::prelude::*;

/// One generated record sample; every record of a generated file populates
/// the same field set so the list shares one definition.
#[derive(Debug, Clone)]
struct Sample {
    secs: u32,
    lat: i32,
    lng: i32,
    heart_rate: u8,
    power: u16,
}

fn arb_sample() -> impl Strategy<Value = Sample> {
    (
        0u32..u32::MAX,
        i32::MIN..i32::MAX,
        i32::MIN..i32::MAX,
        0u8..u8::MAX,
        0u16..u16::MAX,
    )
        .prop_map(|(secs, lat, lng, heart_rate, power)| Sample {
            secs,
            lat,
            lng,
            heart_rate,
            power,
        })
}

fn file_of(samples: &[Sample]) -> File {
    let mut activity = ActivityFile::default();
    activity.records = samples
        .iter()
        .map(|s| {
            let mut record = RecordMsg::new();
            record.timestamp = DateTime::from_fit_secs(s.secs);
            record.position_lat = Latitude::from_semicircles(s.lat);
            record.position_long = Longitude::from_semicircles(s.lng);
            record.heart_rate = s.heart_rate;
            record.power = s.power;
            record
        })
        .collect();

    let mut file = File::new(FilePayload::Activity(activity));
    file.file_id.manufacturer = 255;
    file.file_id.time_created = DateTime::from_fit_secs(1);
    file
}

proptest! {
    #[test]
    fn crc_concatenation_law(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        split in any::<prop::sample::Index>(),
    ) {
        let split = split.index(data.len() + 1);
        let mut crc = Crc16::new();
        crc.update(&data[..split]);
        crc.update(&data[split..]);
        prop_assert_eq!(crc.sum(), checksum(&data));
    }

    #[test]
    fn trailer_is_crc_of_everything_before(samples in proptest::collection::vec(arb_sample(), 1..8)) {
        let mut out = Vec::new();
        encode(&mut out, &mut file_of(&samples), ByteOrder::LittleEndian).unwrap();

        let trailer = u16::from_le_bytes(out[out.len() - 2..].try_into().unwrap());
        prop_assert_eq!(trailer, checksum(&out[..out.len() - 2]));
    }

    #[test]
    fn record_fields_round_trip(
        samples in proptest::collection::vec(arb_sample(), 1..8),
        big_endian in any::<bool>(),
    ) {
        let order = if big_endian { ByteOrder::BigEndian } else { ByteOrder::LittleEndian };
        let mut out = Vec::new();
        encode(&mut out, &mut file_of(&samples), order).unwrap();

        let decoded = common::decode(&out);
        let records = decoded.records_of(20);
        prop_assert_eq!(records.len(), samples.len());

        for (record, sample) in records.iter().zip(&samples) {
            prop_assert_eq!(record.field(253).unwrap().as_u32(), sample.secs);
            prop_assert_eq!(record.field(0).unwrap().as_i32(), sample.lat);
            prop_assert_eq!(record.field(1).unwrap().as_i32(), sample.lng);
            prop_assert_eq!(record.field(3).unwrap().as_u8(), sample.heart_rate);
            prop_assert_eq!(record.field(7).unwrap().as_u16(), sample.power);
            // fields left at their sentinel stay absent
            prop_assert!(record.field(2).is_none());
            prop_assert!(record.field(4).is_none());
        }
    }

    #[test]
    fn architecture_byte_matches_byte_order(
        samples in proptest::collection::vec(arb_sample(), 1..4),
        big_endian in any::<bool>(),
    ) {
        let order = if big_endian { ByteOrder::BigEndian } else { ByteOrder::LittleEndian };
        let mut out = Vec::new();
        encode(&mut out, &mut file_of(&samples), order).unwrap();

        let decoded = common::decode(&out);
        prop_assert!(!decoded.records.is_empty());
        for record in &decoded.records {
            prop_assert_eq!(record.big_endian, big_endian);
        }
    }
}
