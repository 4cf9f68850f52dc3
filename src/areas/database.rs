//! Loose object database
//!
//! Objects live under `.git/objects/<2-char bucket>/<38-char remainder>`, each one a
//! zlib stream of `<type> <size>\0<content>`. Pack files are not read.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::status::snapshot::PathSnapshot;
use crate::errors::{Result, StatusError};
use bytes::Bytes;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source of decompressed objects addressed by their hash
///
/// The commit and tree decoding only depend on this capability, so another storage
/// backend can stand in for the loose object reader.
pub trait ObjectStore {
    /// Load the full decompressed object, header included
    fn lookup(&self, object_id: &ObjectId) -> Result<Bytes>;

    fn parse_object(&self, object_id: &ObjectId) -> Result<ObjectBox> {
        ObjectBox::parse(object_id, &self.lookup(object_id)?)
    }

    /// Decode the commit stored under `object_id`
    fn load_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        let data = self.lookup(object_id)?;
        let (object_type, payload) = ObjectType::parse_header(&data)?;

        if object_type != ObjectType::Commit {
            tracing::warn!(oid = %object_id, %object_type, "decoding non-commit object as commit");
        }

        Commit::parse(object_id, payload)
    }

    /// Decode the tree stored under `object_id`
    fn load_tree(&self, object_id: &ObjectId) -> Result<Tree> {
        Tree::decode(&self.lookup(object_id)?)
    }

    /// Snapshot of the tree a commit points at
    fn commit_snapshot(&self, commit_id: &ObjectId) -> Result<PathSnapshot> {
        let commit = self.load_commit(commit_id)?;
        let tree = self.load_tree(commit.tree_oid())?;

        tracing::debug!(
            commit = %commit_id.to_short_oid(),
            tree = %commit.tree_oid().to_short_oid(),
            entries = tree.len(),
            "loaded commit tree"
        );

        Ok(tree.into_snapshot())
    }
}

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> Result<Bytes> {
        let object_content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StatusError::ObjectNotFound(object_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Self::decompress(object_id, &object_content)
    }

    fn decompress(object_id: &ObjectId, data: &[u8]) -> Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|source| StatusError::DecompressionError {
                oid: object_id.to_string(),
                source,
            })?;

        Ok(decompressed_content.into())
    }
}

impl ObjectStore for Database {
    fn lookup(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());
        tracing::trace!(oid = %object_id, path = %object_path.display(), "reading loose object");

        self.read_object(object_id, object_path)
    }
}
