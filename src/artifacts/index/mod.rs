//! Git index file format
//!
//! The index (also called staging area or cache) records what is staged for the next
//! commit.
//!
//! ## File Format (Version 2)
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "DIRC" (4 bytes)
//!   - Version: 2 (4 bytes)
//!   - Entry count (4 bytes, big-endian)
//!
//! Entries (variable length):
//!   - 62 bytes of metadata, the object ID at offset 40
//!   - NUL-terminated path at offset 62
//!   - Padded with NUL bytes to an 8-byte boundary
//!
//! Checksum (20 bytes):
//!   - SHA-1 of all preceding bytes (not verified by this reader)
//! ```

pub mod index_entry;
pub mod index_header;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 12;

/// Magic signature identifying index files
pub const SIGNATURE: &str = "DIRC";

/// Index file format version
pub const VERSION: u32 = 2;
