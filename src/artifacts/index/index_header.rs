use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::errors::{Result, StatusError};
use byteorder::{ByteOrder, NetworkEndian};
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub marker: String,
    pub version: u32,
    pub entries_count: u32,
}

impl IndexHeader {
    /// Decode the fixed 12-byte header
    ///
    /// Signature and version are carried along but not validated.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let header = data
            .get(..HEADER_SIZE)
            .ok_or_else(|| StatusError::undefined("index header"))?;

        Ok(IndexHeader {
            marker: String::from_utf8_lossy(&header[0..4]).into_owned(),
            version: NetworkEndian::read_u32(&header[4..8]),
            entries_count: NetworkEndian::read_u32(&header[8..12]),
        })
    }

    pub fn is_supported(&self) -> bool {
        self.marker == SIGNATURE && self.version == VERSION
    }
}
