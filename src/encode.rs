//! Record encoding and file assembly.
//!
//! A FIT stream is a header, a run of records, and a little-endian CRC-16
//! trailer. Every data record is laid out per the definition record
//! emitted immediately before it:
//!
//! ```text
//! ┌────────────┬─────────────────────────────────────┬──────────┐
//! │ FileHeader │ def ‖ data ‖ def ‖ data ‖ data ‖ …  │ crc16 le │
//! └────────────┴─────────────────────────────────────┴──────────┘
//! ```
//!
//! The whole file is known up front, so there is no local-message-type
//! interleaving: every message uses local type 0 and gets a fresh
//! definition before its first data record. A message list shares the
//! definition derived from its first element.
//!
//! Fields holding their base type's invalid sentinel are omitted from both
//! the definition and the data record; whatever remains is encoded in the
//! byte order the caller picked, except for the global message number and
//! the trailer CRC, which the format fixes as little-endian.

use std::io::Write;

use tracing::{debug, trace};
use zerocopy::AsBytes;

use crate::crc::Crc16;
use crate::file::{File, FilePayload};
use crate::profile::{self, FieldDescriptor, FieldKind, Mesg, MesgNum};
use crate::types::{write_scalar, BaseType, ByteOrder, Value};
use crate::{EncodeError, Result};

/// Definition-record flag in the record header byte.
const DEFINITION_FLAG: u8 = 1 << 6;
/// Local message type mask in the record header byte.
const LOCAL_MESG_MASK: u8 = 0x0F;

/// One field entry of a definition record, as laid out on the wire.
#[repr(C)]
#[derive(Debug, Clone, Copy, AsBytes)]
struct FieldDef {
    num: u8,
    size: u8,
    base_type: u8,
}

/// Transient definition for one message instance: the descriptors of every
/// field holding a non-invalid value, in `sindex` order.
#[derive(Debug)]
struct DefinitionMessage {
    mesg_num: MesgNum,
    local: u8,
    fields: Vec<&'static FieldDescriptor>,
}

impl DefinitionMessage {
    /// Build the definition describing `values` of message type `mesg_num`.
    fn build(mesg_num: MesgNum, values: &[Value], local: u8) -> Result<Self> {
        let table = profile::fields(mesg_num).ok_or(EncodeError::FieldCountMismatch {
            mesg: mesg_num,
            got: values.len(),
            want: 0,
        })?;
        if table.len() != values.len() {
            return Err(EncodeError::FieldCountMismatch {
                mesg: mesg_num,
                got: values.len(),
                want: table.len(),
            });
        }

        let fields = table
            .iter()
            .zip(values)
            .filter(|(field, value)| !field.is_invalid(value))
            .map(|(field, _)| field)
            .collect();

        Ok(DefinitionMessage {
            mesg_num,
            local,
            fields,
        })
    }

    fn field_nums(&self) -> impl Iterator<Item = u8> + '_ {
        self.fields.iter().map(|field| field.num)
    }
}

/// Writes definition and data records to a sink in a fixed byte order.
struct RecordEncoder<W> {
    w: W,
    order: ByteOrder,
}

impl<W: Write> RecordEncoder<W> {
    fn new(w: W, order: ByteOrder) -> Self {
        Self { w, order }
    }

    /// Emit one definition record.
    fn write_definition(&mut self, def: &DefinitionMessage) -> Result<()> {
        self.w.write_all(&[
            DEFINITION_FLAG | (def.local & LOCAL_MESG_MASK),
            0x00,
            self.order.arch_byte(),
        ])?;
        // The global message number is little-endian whatever the record
        // byte order; the format fixes it.
        self.w.write_all(&(def.mesg_num as u16).to_le_bytes())?;
        self.w.write_all(&[def.fields.len() as u8])?;

        for field in &def.fields {
            if field.array {
                return Err(EncodeError::Unsupported("array fields"));
            }
            let entry = FieldDef {
                num: field.num,
                size: field.wire_size(),
                base_type: field.base.wire_tag(),
            };
            self.w.write_all(entry.as_bytes())?;
        }

        trace!(mesg = ?def.mesg_num, fields = def.fields.len(), "definition record");
        Ok(())
    }

    /// Emit one data record laid out per `def`.
    fn write_data(&mut self, values: &[Value], def: &DefinitionMessage) -> Result<()> {
        self.w.write_all(&[def.local & LOCAL_MESG_MASK])?;
        for field in &def.fields {
            self.write_field(&values[usize::from(field.sindex)], field)?;
        }
        trace!(mesg = ?def.mesg_num, "data record");
        Ok(())
    }

    /// Encode one field value per its profile descriptor.
    fn write_field(&mut self, value: &Value, field: &FieldDescriptor) -> Result<()> {
        if field.array {
            return Err(EncodeError::Unsupported("array fields"));
        }
        match (field.kind, value) {
            (FieldKind::TimeUtc, Value::DateTime(t)) => write_scalar(
                &mut self.w,
                &Value::Uint32(t.fit_secs()),
                BaseType::Uint32,
                self.order,
            ),
            (FieldKind::TimeLocal, _) => Err(EncodeError::Unsupported("local timestamps")),
            (FieldKind::Lat, Value::Latitude(pos)) => write_scalar(
                &mut self.w,
                &Value::Sint32(pos.semicircles()),
                BaseType::Sint32,
                self.order,
            ),
            (FieldKind::Lng, Value::Longitude(pos)) => write_scalar(
                &mut self.w,
                &Value::Sint32(pos.semicircles()),
                BaseType::Sint32,
                self.order,
            ),
            (FieldKind::Native, Value::String(s)) if field.base == BaseType::String => {
                let buf = encode_string(s, field.length)?;
                self.w.write_all(&buf)?;
                Ok(())
            }
            (FieldKind::Native, value) => write_scalar(&mut self.w, value, field.base, self.order),
            (_, value) => Err(EncodeError::TypeMismatch {
                base: field.base,
                value: value.clone(),
            }),
        }
    }

    /// Definition plus data record for one message, at local type 0.
    fn write_mesg<M: Mesg>(&mut self, mesg: &M) -> Result<()> {
        let values = mesg.field_values();
        let def = DefinitionMessage::build(mesg.mesg_num(), &values, 0)?;
        self.write_definition(&def)?;
        self.write_data(&values, &def)
    }

    fn write_mesg_opt<M: Mesg>(&mut self, mesg: &Option<M>) -> Result<()> {
        match mesg {
            Some(mesg) => self.write_mesg(mesg),
            None => Ok(()),
        }
    }

    /// One definition derived from the first element, then a data record
    /// per element.
    ///
    /// The shared definition only describes elements whose non-invalid
    /// field set matches the first element's; any other element is
    /// rejected rather than encoded wrongly.
    fn write_mesg_list<M: Mesg>(&mut self, mesgs: &[M]) -> Result<()> {
        if mesgs.is_empty() {
            return Ok(());
        }

        let values = mesgs[0].field_values();
        let def = DefinitionMessage::build(mesgs[0].mesg_num(), &values, 0)?;
        self.write_definition(&def)?;
        self.write_data(&values, &def)?;

        for mesg in &mesgs[1..] {
            let values = mesg.field_values();
            let elem = DefinitionMessage::build(mesg.mesg_num(), &values, 0)?;
            if !elem.field_nums().eq(def.field_nums()) {
                return Err(EncodeError::NonUniformList { mesg: def.mesg_num });
            }
            self.write_data(&values, &def)?;
        }
        Ok(())
    }
}

/// Fit `s` into a zero-initialized buffer of `size` bytes.
///
/// At most `size - 1` bytes of `s` are copied, so the final byte is always
/// a null terminator. The whole buffer must remain valid UTF-8; a copy cut
/// inside a multi-byte character is not.
fn encode_string(s: &str, size: u8) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; usize::from(size)];
    let n = s.len().min(usize::from(size).saturating_sub(1));
    buf[..n].copy_from_slice(&s.as_bytes()[..n]);
    if std::str::from_utf8(&buf).is_err() {
        return Err(EncodeError::InvalidUtf8(s.to_owned()));
    }
    Ok(buf)
}

/// Emit the payload's messages in declared aggregate order.
fn encode_payload<W: Write>(enc: &mut RecordEncoder<W>, payload: &FilePayload) -> Result<()> {
    match payload {
        FilePayload::Activity(f) => {
            enc.write_mesg_opt(&f.activity)?;
            enc.write_mesg_list(&f.sessions)?;
            enc.write_mesg_list(&f.laps)?;
            enc.write_mesg_list(&f.lengths)?;
            enc.write_mesg_list(&f.records)?;
            enc.write_mesg_list(&f.events)
        }
        FilePayload::Device(f) => {
            enc.write_mesg_list(&f.softwares)?;
            enc.write_mesg_list(&f.capabilities)?;
            enc.write_mesg_list(&f.file_capabilities)?;
            enc.write_mesg_list(&f.mesg_capabilities)?;
            enc.write_mesg_list(&f.field_capabilities)
        }
        FilePayload::Settings(f) => {
            enc.write_mesg_list(&f.user_profiles)?;
            enc.write_mesg_list(&f.hrm_profiles)?;
            enc.write_mesg_list(&f.sdm_profiles)?;
            enc.write_mesg_list(&f.bike_profiles)?;
            enc.write_mesg_list(&f.device_settings)
        }
        FilePayload::Sport(f) => {
            enc.write_mesg_opt(&f.sport)?;
            enc.write_mesg_opt(&f.zones_target)?;
            enc.write_mesg_list(&f.hr_zones)?;
            enc.write_mesg_list(&f.power_zones)?;
            enc.write_mesg_list(&f.met_zones)?;
            enc.write_mesg_list(&f.speed_zones)?;
            enc.write_mesg_list(&f.cadence_zones)
        }
        FilePayload::Workout(f) => {
            enc.write_mesg_opt(&f.workout)?;
            enc.write_mesg_list(&f.workout_steps)
        }
        FilePayload::Course(f) => {
            enc.write_mesg_opt(&f.course)?;
            enc.write_mesg_list(&f.laps)?;
            enc.write_mesg_list(&f.course_points)?;
            enc.write_mesg_list(&f.records)?;
            enc.write_mesg_list(&f.events)
        }
        FilePayload::Schedules(f) => enc.write_mesg_list(&f.schedules),
        FilePayload::Weight(f) => {
            enc.write_mesg_opt(&f.user_profile)?;
            enc.write_mesg_list(&f.weight_scales)?;
            enc.write_mesg_list(&f.device_infos)
        }
        FilePayload::Totals(f) => enc.write_mesg_list(&f.totals),
        FilePayload::Goals(f) => enc.write_mesg_list(&f.goals),
        FilePayload::BloodPressure(f) => {
            enc.write_mesg_opt(&f.user_profile)?;
            enc.write_mesg_list(&f.blood_pressures)?;
            enc.write_mesg_list(&f.device_infos)
        }
        FilePayload::MonitoringA(f) => {
            enc.write_mesg_opt(&f.monitoring_info)?;
            enc.write_mesg_list(&f.monitorings)
        }
        FilePayload::ActivitySummary(f) => {
            enc.write_mesg_opt(&f.activity)?;
            enc.write_mesg_list(&f.sessions)?;
            enc.write_mesg_list(&f.laps)
        }
        FilePayload::MonitoringDaily(f) => enc.write_mesg_list(&f.monitorings),
        FilePayload::MonitoringB(f) => {
            enc.write_mesg_opt(&f.monitoring_info)?;
            enc.write_mesg_list(&f.monitorings)?;
            enc.write_mesg_list(&f.device_infos)
        }
        FilePayload::Segment(f) => {
            enc.write_mesg_opt(&f.segment_id)?;
            enc.write_mesg_list(&f.leaderboard_entries)?;
            enc.write_mesg_list(&f.points)?;
            enc.write_mesg_list(&f.laps)
        }
        FilePayload::SegmentList(f) => enc.write_mesg_list(&f.segment_files),
    }
}

/// Encode `file` into `w` as a complete FIT byte stream.
///
/// The body is assembled into a scratch buffer first so the header can
/// carry the final data size; the trailer is the Dynastream CRC-16 of
/// header plus body, written little-endian. On success
/// `file.header.data_size`, `file.header.crc` and `file.crc` hold the
/// values written.
///
/// `file.file_id.file_type` must match the populated payload variant, and
/// must not be invalid or manufacturer specific.
pub fn encode<W: Write>(w: &mut W, file: &mut File, order: ByteOrder) -> Result<()> {
    let actual = file.file_id.file_type;
    let requested = file.payload.file_type();
    if actual.is_manufacturer_specific() {
        return Err(EncodeError::Unsupported("manufacturer specific file types"));
    }
    if actual != requested {
        return Err(EncodeError::WrongFileType { actual, requested });
    }

    debug!(file_type = ?actual, byte_order = ?order, "encoding fit file");

    let mut body = Vec::new();
    {
        let mut enc = RecordEncoder::new(&mut body, order);
        enc.write_mesg(&file.file_id)?;
        enc.write_mesg_opt(&file.file_creator)?;
        enc.write_mesg_opt(&file.timestamp_correlation)?;
        enc.write_mesg_opt(&file.device_info)?;
        encode_payload(&mut enc, &file.payload)?;
    }

    file.header.data_size = body.len() as u32;
    let header = file.header.marshal()?;

    let mut crc = Crc16::new();
    crc.update(&header);
    crc.update(&body);
    file.crc = crc.sum();

    w.write_all(&header)?;
    w.write_all(&body)?;
    w.write_all(&file.crc.to_le_bytes())?;

    debug!(data_size = body.len(), crc = file.crc, "fit file encoded");
    Ok(())
}
