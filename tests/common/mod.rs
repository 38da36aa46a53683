//! Test-side decoder: just enough of the FIT format to read back what the
//! encoder writes.
//!
//! Panics on malformed input; these are assertions, not a decoder API.

use std::collections::HashMap;

/// A decoded data record with the metadata of its governing definition.
#[derive(Debug, Clone)]
pub struct DecodedRecord {
    pub global: u16,
    pub big_endian: bool,
    pub fields: Vec<DecodedField>,
}

impl DecodedRecord {
    /// Field by wire number, if the definition declared it.
    pub fn field(&self, num: u8) -> Option<&DecodedField> {
        self.fields.iter().find(|f| f.num == num)
    }
}

/// One field slice of a data record.
#[derive(Debug, Clone)]
pub struct DecodedField {
    pub num: u8,
    pub base_type: u8,
    pub big_endian: bool,
    pub bytes: Vec<u8>,
}

impl DecodedField {
    pub fn as_u8(&self) -> u8 {
        assert_eq!(self.bytes.len(), 1);
        self.bytes[0]
    }

    pub fn as_u16(&self) -> u16 {
        let raw: [u8; 2] = self.bytes.as_slice().try_into().unwrap();
        if self.big_endian {
            u16::from_be_bytes(raw)
        } else {
            u16::from_le_bytes(raw)
        }
    }

    pub fn as_u32(&self) -> u32 {
        let raw: [u8; 4] = self.bytes.as_slice().try_into().unwrap();
        if self.big_endian {
            u32::from_be_bytes(raw)
        } else {
            u32::from_le_bytes(raw)
        }
    }

    pub fn as_i32(&self) -> i32 {
        self.as_u32() as i32
    }

    /// String contents up to the first null byte.
    pub fn as_str(&self) -> &str {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.bytes.len());
        std::str::from_utf8(&self.bytes[..end]).unwrap()
    }
}

/// A decoded file: header fields, trailer CRC, and the data records in
/// stream order.
#[derive(Debug)]
pub struct DecodedFile {
    pub header_size: u8,
    pub protocol_version: u8,
    pub profile_version: u16,
    pub data_size: u32,
    pub trailer_crc: u16,
    pub records: Vec<DecodedRecord>,
}

impl DecodedFile {
    /// All data records of one global message number, in stream order.
    pub fn records_of(&self, global: u16) -> Vec<&DecodedRecord> {
        self.records.iter().filter(|r| r.global == global).collect()
    }
}

#[derive(Debug, Clone)]
struct Definition {
    global: u16,
    big_endian: bool,
    entries: Vec<(u8, u8, u8)>, // (num, size, base_type)
}

/// Decode an encoded FIT byte stream.
pub fn decode(bytes: &[u8]) -> DecodedFile {
    let header_size = bytes[0];
    assert!(header_size == 12 || header_size == 14, "bad header size");
    assert_eq!(&bytes[8..12], b".FIT", "bad data type tag");
    let data_size = u32::from_le_bytes(bytes[4..8].try_into().unwrap());

    let body_start = usize::from(header_size);
    let body_end = bytes.len() - 2;
    assert_eq!(body_end - body_start, data_size as usize, "data size");
    let trailer_crc = u16::from_le_bytes(bytes[body_end..].try_into().unwrap());

    let mut definitions: HashMap<u8, Definition> = HashMap::new();
    let mut records = Vec::new();
    let mut pos = body_start;

    while pos < body_end {
        let header = bytes[pos];
        pos += 1;
        let local = header & 0x0F;

        if header & 0x40 != 0 {
            // definition record
            assert_eq!(bytes[pos], 0, "reserved byte");
            let arch = bytes[pos + 1];
            assert!(arch <= 1, "architecture byte");
            // the global message number is little-endian in either
            // architecture
            let global = u16::from_le_bytes(bytes[pos + 2..pos + 4].try_into().unwrap());
            let count = usize::from(bytes[pos + 4]);
            pos += 5;

            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                entries.push((bytes[pos], bytes[pos + 1], bytes[pos + 2]));
                pos += 3;
            }
            definitions.insert(
                local,
                Definition {
                    global,
                    big_endian: arch == 1,
                    entries,
                },
            );
        } else {
            // data record
            let def = definitions
                .get(&local)
                .unwrap_or_else(|| panic!("data record without definition, local {local}"));
            let mut fields = Vec::with_capacity(def.entries.len());
            for &(num, size, base_type) in &def.entries {
                let size = usize::from(size);
                fields.push(DecodedField {
                    num,
                    base_type,
                    big_endian: def.big_endian,
                    bytes: bytes[pos..pos + size].to_vec(),
                });
                pos += size;
            }
            records.push(DecodedRecord {
                global: def.global,
                big_endian: def.big_endian,
                fields,
            });
        }
    }
    assert_eq!(pos, body_end, "trailing bytes in body");

    DecodedFile {
        header_size,
        protocol_version: bytes[1],
        profile_version: u16::from_le_bytes(bytes[2..4].try_into().unwrap()),
        data_size,
        trailer_crc,
        records,
    }
}
