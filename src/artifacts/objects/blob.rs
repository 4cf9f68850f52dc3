//! Git blob object
//!
//! Blobs store file content. On disk: `blob <size>\0<content>`, where the size is the
//! number of content bytes. Content is kept as raw bytes so that non-UTF-8 files hash
//! exactly like git hashes them.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::Result;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct Blob {
    content: Bytes,
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn content(&self) -> Result<Bytes> {
        Ok(self.content.clone())
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
