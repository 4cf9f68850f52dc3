use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use bytes::Bytes;
use std::path::Path;

impl Repository {
    /// Print the blob ID a file would be stored under; nothing is written
    ///
    /// Relative paths are taken from the repository root.
    pub fn hash_object(&self, file_path: &Path) -> anyhow::Result<()> {
        let file_path = self.path().join(file_path);
        let data = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read {}", file_path.display()))?;
        let object_id = Blob::new(Bytes::from(data)).object_id()?;

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
