//! Git index (staging area)
//!
//! Reads `.git/index` into a path snapshot. The file is only ever read, under a shared
//! lock so that a concurrent writer holding an exclusive lock is never observed
//! mid-write. The trailing checksum is not verified.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::status::snapshot::PathSnapshot;
use crate::errors::Result;
use std::io::Read;
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.git/index`)
    path: Box<Path>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index { path }
    }

    /// Load every entry of the index file
    ///
    /// A missing or empty index file has no entries.
    pub fn load_entries(&self) -> Result<Vec<IndexEntry>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no index file");
            return Ok(Vec::new());
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(&self.path)?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut data = Vec::new();
        lock.deref_mut().read_to_end(&mut data)?;

        if data.is_empty() {
            return Ok(Vec::new());
        }

        Self::parse_entries(&data)
    }

    /// Staged snapshot: path to the hash recorded in the index
    pub fn snapshot(&self) -> Result<PathSnapshot> {
        let snapshot = self
            .load_entries()?
            .into_iter()
            .map(|entry| (entry.name, entry.oid))
            .collect::<PathSnapshot>();

        tracing::debug!(entries = snapshot.len(), "loaded index snapshot");
        Ok(snapshot)
    }

    /// Decode the header and the entries it announces
    pub fn parse_entries(data: &[u8]) -> Result<Vec<IndexEntry>> {
        let header = IndexHeader::decode(data)?;

        if !header.is_supported() {
            tracing::warn!(
                signature = %header.marker,
                version = header.version,
                "unexpected index format, entries may decode incorrectly"
            );
        }

        let mut entries = Vec::new();
        let mut offset = HEADER_SIZE;

        for _ in 0..header.entries_count {
            let (entry, next_offset) = IndexEntry::decode(data, offset)?;
            tracing::trace!(path = %entry.name, oid = %entry.oid, offset, "decoded index entry");

            entries.push(entry);
            offset = next_offset;
        }

        Ok(entries)
    }
}
