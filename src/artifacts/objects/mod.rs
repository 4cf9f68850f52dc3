//! Git object types and operations
//!
//! Git stores all content as objects identified by SHA-1 hashes. The status reader
//! deals with three of them:
//!
//! - **Blob**: File content (raw bytes), only ever hashed, never fetched
//! - **Tree**: Flat directory listing (names, modes, and object IDs)
//! - **Commit**: Snapshot pointing at a tree
//!
//! Every object is framed as `<type> <size>\0<content>` before hashing and storage.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in binary format
pub const OBJECT_ID_BYTES: usize = OBJECT_ID_LENGTH / 2;
