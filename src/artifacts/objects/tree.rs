//! Git tree object
//!
//! Trees represent directory snapshots. Only flat trees of regular files are supported:
//! every entry must carry mode `100644`.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`

use crate::artifacts::objects::OBJECT_ID_BYTES;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::status::snapshot::PathSnapshot;
use crate::errors::{Result, StatusError};
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::Write;

/// Mode of a regular, non-executable file
pub const REGULAR_FILE_MODE: &str = "100644";

const ENTRY_PREFIX: &str = "100644 ";

/// Single `(mode, path, oid)` record of a tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: String,
    pub path: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    /// Decode the entry starting at `offset` in a tree payload
    ///
    /// # Returns
    ///
    /// The decoded entry and the offset of the following entry.
    ///
    /// # Errors
    ///
    /// - `UndefinedField` when the name terminator or the hash bytes are missing
    /// - `UnsupportedMode` when the entry is not a regular file
    pub fn decode(data: &[u8], offset: usize) -> Result<(TreeEntry, usize)> {
        let rest = data
            .get(offset..)
            .ok_or_else(|| StatusError::undefined("tree entry"))?;
        let name_len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| StatusError::undefined("tree entry name terminator"))?;

        let mode_and_path = String::from_utf8_lossy(&rest[..name_len]);
        let path = match mode_and_path.strip_prefix(ENTRY_PREFIX) {
            Some(path) => path.to_string(),
            None => {
                let (mode, path) = mode_and_path
                    .split_once(' ')
                    .unwrap_or((&*mode_and_path, ""));
                return Err(StatusError::UnsupportedMode {
                    mode: mode.to_string(),
                    path: path.to_string(),
                });
            }
        };

        let oid_start = name_len + 1;
        let oid_bytes = rest
            .get(oid_start..oid_start + OBJECT_ID_BYTES)
            .ok_or_else(|| StatusError::undefined(format!("tree entry hash for {path:?}")))?;
        let oid = ObjectId::from_raw(oid_bytes)?;

        let next_offset = offset + oid_start + OBJECT_ID_BYTES;
        Ok((
            TreeEntry::new(REGULAR_FILE_MODE.to_string(), path, oid),
            next_offset,
        ))
    }
}

/// Flat tree of regular files keyed by path
#[derive(Debug, Clone, Default)]
pub struct Tree {
    entries: BTreeMap<String, TreeEntry>,
}

impl Tree {
    /// Decode a full tree object, header included
    ///
    /// Everything up to the first zero byte is the object header and is discarded.
    pub fn decode(object: &[u8]) -> Result<Self> {
        let header_end = object
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| StatusError::undefined("tree header terminator"))?;

        Self::parse(&object[header_end + 1..])
    }

    /// Decode the entries of a tree payload
    ///
    /// A path that appears twice keeps the later entry.
    pub fn parse(payload: &[u8]) -> Result<Self> {
        let mut tree = Tree::default();
        let mut offset = 0;

        while offset < payload.len() {
            let (entry, next_offset) = TreeEntry::decode(payload, offset)?;
            tree.insert(entry);
            offset = next_offset;
        }

        Ok(tree)
    }

    pub fn insert(&mut self, entry: TreeEntry) {
        self.entries.insert(entry.path.clone(), entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_snapshot(self) -> PathSnapshot {
        self.entries
            .into_values()
            .map(|entry| (entry.path, entry.oid))
            .collect()
    }
}

impl FromIterator<TreeEntry> for Tree {
    fn from_iter<T: IntoIterator<Item = TreeEntry>>(iter: T) -> Self {
        let mut tree = Tree::default();
        iter.into_iter().for_each(|entry| tree.insert(entry));
        tree
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn content(&self) -> Result<Bytes> {
        let mut content = Vec::new();

        for entry in self.entries.values() {
            write!(content, "{} {}", entry.mode, entry.path)?;
            content.push(0);
            entry.oid.write_h40_to(&mut content)?;
        }

        Ok(Bytes::from(content))
    }

    fn display(&self) -> String {
        self.entries
            .values()
            .map(|entry| {
                format!(
                    "{} {} {}\t{}",
                    entry.mode,
                    ObjectType::Blob,
                    entry.oid,
                    entry.path
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
