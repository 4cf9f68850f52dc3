//! Git commit object
//!
//! ## Format
//!
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Only the tree reference on the first line matters to the status reader; the rest of
//! the text is kept verbatim for display.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Result, StatusError};
use bytes::Bytes;

const TREE_MARKER: &str = "tree ";

#[derive(Debug, Clone)]
pub struct Commit {
    tree_oid: ObjectId,
    text: String,
}

impl Commit {
    /// Decode a commit payload (the bytes following the object header)
    ///
    /// # Errors
    ///
    /// `MalformedCommit` when the first line is not a `tree <hash>` reference.
    pub fn parse(oid: &ObjectId, payload: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(payload).into_owned();
        let tree_oid = Self::first_line_tree(&text)
            .ok_or_else(|| StatusError::MalformedCommit(oid.to_string()))?;

        Ok(Commit { tree_oid, text })
    }

    fn first_line_tree(text: &str) -> Option<ObjectId> {
        let first_line = text.lines().next()?;
        let tree_oid = first_line.strip_prefix(TREE_MARKER)?;

        ObjectId::try_parse(tree_oid.trim_end()).ok()
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn content(&self) -> Result<Bytes> {
        Ok(Bytes::from(self.text.clone()))
    }

    fn display(&self) -> String {
        self.text.clone()
    }
}
