//! Index entry representation
//!
//! Each entry in the index represents a staged file. Only the fields the status reader
//! needs are decoded: the file mode, the content hash and the path. Timestamps, device
//! and inode numbers are skipped.

use crate::artifacts::objects::OBJECT_ID_BYTES;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, StatusError};
use byteorder::{ByteOrder, NetworkEndian};
use derive_new::new;

/// Block size for entry alignment (8 bytes)
pub const ENTRY_BLOCK: usize = 8;

/// Size of the metadata block preceding the path
pub const ENTRY_METADATA_SIZE: usize = 62;

/// Offset of the object ID within an entry
pub const ENTRY_OID_OFFSET: usize = 40;

/// Offset of the mode within an entry
const ENTRY_MODE_OFFSET: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub name: String,
    /// SHA-1 hash of file content
    pub oid: ObjectId,
    /// File mode as stored in the index
    pub mode: u32,
}

impl IndexEntry {
    /// Decode the entry starting at `offset` in the index file
    ///
    /// # Returns
    ///
    /// The decoded entry and the offset of the following entry.
    ///
    /// # Errors
    ///
    /// `UndefinedField` when the metadata block, the hash or the path terminator lies
    /// past the end of the data.
    pub fn decode(data: &[u8], offset: usize) -> Result<(IndexEntry, usize)> {
        let metadata = data
            .get(offset..offset + ENTRY_METADATA_SIZE)
            .ok_or_else(|| StatusError::undefined(format!("index entry at offset {offset}")))?;

        let mode = NetworkEndian::read_u32(&metadata[ENTRY_MODE_OFFSET..ENTRY_MODE_OFFSET + 4]);
        let oid = ObjectId::from_raw(
            &metadata[ENTRY_OID_OFFSET..ENTRY_OID_OFFSET + OBJECT_ID_BYTES],
        )?;

        let path_start = offset + ENTRY_METADATA_SIZE;
        let path_len = data[path_start..]
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| {
                StatusError::undefined(format!("index entry path at offset {path_start}"))
            })?;
        let name = String::from_utf8_lossy(&data[path_start..path_start + path_len]).into_owned();

        Ok((
            IndexEntry { name, oid, mode },
            offset + Self::padded_len(path_len),
        ))
    }

    /// Length of an entry with a path of `path_len` bytes, padding included
    ///
    /// At least one NUL byte always follows the path, so an unpadded length that is
    /// already a multiple of 8 gets a full block of padding.
    pub fn padded_len(path_len: usize) -> usize {
        let len = ENTRY_METADATA_SIZE + path_len;
        len + (ENTRY_BLOCK - len % ENTRY_BLOCK)
    }
}
