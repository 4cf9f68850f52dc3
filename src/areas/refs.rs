//! Git references (branches, HEAD)
//!
//! References are text files containing either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references (e.g. HEAD -> refs/heads/master)
//!
//! A reference without a loose file is looked up in `packed-refs`, where each line
//! reads `<hash> <refname>`. Only reading is supported. A branch without commits yet
//! resolves to no object.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Result, StatusError};
use derive_new::new;
use std::path::Path;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// File holding references packed out of `refs/`
const PACKED_REFS: &str = "packed-refs";

/// Bound on symbolic reference chains
const MAX_SYMREF_DEPTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref, relative to `.git`
    SymRef(String),
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(content.trim())
    }

    fn parse(content: &str) -> Result<Option<SymRefOrOid>> {
        if content.is_empty() {
            return Ok(None);
        }

        match regex::Regex::new(SYMREF_REGEX)?.captures(content) {
            Some(symref_match) => Ok(Some(SymRefOrOid::SymRef(symref_match[1].to_string()))),
            None => Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(content)?))),
        }
    }
}

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Object ID HEAD resolves to, following symbolic references
    ///
    /// # Returns
    ///
    /// None when the current branch has no commits yet.
    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        self.read_ref(HEAD_REF_NAME)
    }

    /// Name of the reference HEAD ultimately points at (e.g. `refs/heads/master`)
    pub fn current_ref(&self) -> Result<String> {
        self.resolve(HEAD_REF_NAME).map(|(name, _)| name)
    }

    /// Resolve a reference relative to the git directory
    pub fn read_ref(&self, name: &str) -> Result<Option<ObjectId>> {
        self.resolve(name).map(|(_, oid)| oid)
    }

    /// Follow symbolic references from `name` to the last reference in the chain
    fn resolve(&self, name: &str) -> Result<(String, Option<ObjectId>)> {
        let mut current = name.to_string();

        for _ in 0..MAX_SYMREF_DEPTH {
            match SymRefOrOid::read_symref_or_oid(&self.path.join(&current))? {
                Some(SymRefOrOid::SymRef(target)) => {
                    tracing::trace!(from = %current, to = %target, "following symbolic ref");
                    current = target;
                }
                Some(SymRefOrOid::Oid(oid)) => return Ok((current, Some(oid))),
                None => {
                    let oid = self.read_packed_ref(&current)?;
                    return Ok((current, oid));
                }
            }
        }

        Err(StatusError::undefined(format!(
            "reference chain from {name} deeper than {MAX_SYMREF_DEPTH}"
        )))
    }

    /// Hash recorded for `name` in `packed-refs`, if the file lists it
    fn read_packed_ref(&self, name: &str) -> Result<Option<ObjectId>> {
        let packed_refs_path = self.path.join(PACKED_REFS);
        if !packed_refs_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(packed_refs_path)?;
        for line in content.lines() {
            // header comments and peeled tag lines (`^<hash>`)
            if line.starts_with('#') || line.starts_with('^') {
                continue;
            }

            if let Some((oid, ref_name)) = line.split_once(' ')
                && ref_name == name
            {
                tracing::trace!(name, "found packed ref");
                return ObjectId::try_parse(oid).map(Some);
            }
        }

        Ok(None)
    }
}
