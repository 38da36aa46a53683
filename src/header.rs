//! FIT file header.
//!
//! The header precedes the record stream and is always little-endian,
//! whatever byte order the records use:
//!
//! ```text
//! byte  0      header size (12 or 14)
//! byte  1      protocol version
//! bytes 2-3    profile version
//! bytes 4-7    data size (record stream length, excluding header and CRC)
//! bytes 8-11   ".FIT"
//! bytes 12-13  header CRC over bytes 0-11 (14-byte form only)
//! ```

use crate::crc::checksum;
use crate::{EncodeError, Result, PROFILE_VERSION, PROTOCOL_VERSION};

/// Magic data-type tag, bytes 8-11 of every header.
pub const FIT_DATA_TYPE: [u8; 4] = *b".FIT";

/// The FIT file header.
///
/// [`encode`](crate::encode) rewrites `data_size` to the length of the body
/// it produced and refreshes `crc` while marshalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// On-wire header length; 14 with the trailing CRC, 12 without.
    pub size: u8,
    pub protocol_version: u8,
    pub profile_version: u16,
    /// Length of the record stream in bytes.
    pub data_size: u32,
    /// Dynastream CRC-16 of the first 12 header bytes; absent from the
    /// 12-byte form.
    pub crc: u16,
}

impl FileHeader {
    /// Header length with the trailing CRC.
    pub const SIZE: u8 = 14;
    /// Header length of the legacy CRC-less form.
    pub const LEGACY_SIZE: u8 = 12;

    /// New 14-byte header at the crate's protocol and profile versions,
    /// with a zero data size.
    pub fn new() -> Self {
        FileHeader {
            size: Self::SIZE,
            protocol_version: PROTOCOL_VERSION,
            profile_version: PROFILE_VERSION,
            data_size: 0,
            crc: 0,
        }
    }

    /// Serialize to bytes, refreshing `crc` for the 14-byte form.
    pub fn marshal(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(usize::from(self.size));
        out.push(self.size);
        out.push(self.protocol_version);
        out.extend_from_slice(&self.profile_version.to_le_bytes());
        out.extend_from_slice(&self.data_size.to_le_bytes());
        out.extend_from_slice(&FIT_DATA_TYPE);
        match self.size {
            Self::LEGACY_SIZE => {}
            Self::SIZE => {
                self.crc = checksum(&out);
                out.extend_from_slice(&self.crc.to_le_bytes());
            }
            size => return Err(EncodeError::InvalidHeader { size }),
        }
        Ok(out)
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        FileHeader::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marshal_14_byte_form() {
        let mut header = FileHeader::new();
        header.data_size = 0x0102_0304;
        let bytes = header.marshal().unwrap();

        assert_eq!(bytes.len(), 14);
        assert_eq!(bytes[0], 14);
        assert_eq!(bytes[1], PROTOCOL_VERSION);
        assert_eq!(&bytes[2..4], &PROFILE_VERSION.to_le_bytes());
        assert_eq!(&bytes[4..8], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&bytes[8..12], b".FIT");
        assert_eq!(&bytes[12..14], &checksum(&bytes[..12]).to_le_bytes());
        assert_eq!(header.crc, checksum(&bytes[..12]));
    }

    #[test]
    fn test_marshal_legacy_form() {
        let mut header = FileHeader::new();
        header.size = FileHeader::LEGACY_SIZE;
        let bytes = header.marshal().unwrap();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[8..12], b".FIT");
    }

    #[test]
    fn test_marshal_rejects_other_sizes() {
        let mut header = FileHeader::new();
        header.size = 13;
        assert!(matches!(
            header.marshal(),
            Err(EncodeError::InvalidHeader { size: 13 })
        ));
    }
}
