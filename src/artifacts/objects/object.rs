use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::Write;

pub trait Object {
    fn object_type(&self) -> ObjectType;

    /// Raw payload, without the `<type> <size>\0` header
    fn content(&self) -> Result<Bytes>;

    fn display(&self) -> String;

    /// Payload framed with its type tag and byte length
    fn serialize(&self) -> Result<Bytes> {
        let content = self.content()?;

        let mut object_bytes = Vec::with_capacity(content.len() + 32);
        let header = format!("{} {}\0", self.object_type().as_str(), content.len());
        object_bytes.write_all(header.as_bytes())?;
        object_bytes.write_all(&content)?;

        Ok(Bytes::from(object_bytes))
    }

    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }
}

/// A stored object decoded according to its header
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    /// Decode a decompressed object record
    pub fn parse(oid: &ObjectId, data: &[u8]) -> Result<Self> {
        let (object_type, payload) = ObjectType::parse_header(data)?;

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::new(
                Bytes::copy_from_slice(payload),
            )))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::parse(payload)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::parse(oid, payload)?))),
        }
    }

    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}
