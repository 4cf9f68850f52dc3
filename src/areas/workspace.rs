use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::snapshot::PathSnapshot;
use crate::errors::{Result, StatusError};
use bytes::Bytes;
use std::path::{Path, PathBuf};

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

/// Flat working directory at the repository root
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Top-level files, relative to the workspace root, sorted by name
    ///
    /// # Errors
    ///
    /// `UnsupportedSubdirectory` for any entry that is not a plain file.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&self.path)? {
            let entry = entry?;
            let file_name = PathBuf::from(entry.file_name());

            if Self::is_ignored(&file_name) {
                tracing::trace!(path = %file_name.display(), "skipping reserved entry");
                continue;
            }

            if !entry.path().is_file() {
                return Err(StatusError::UnsupportedSubdirectory(file_name));
            }

            files.push(file_name);
        }

        files.sort();
        Ok(files)
    }

    pub fn parse_blob(&self, path: &Path) -> Result<Blob> {
        let data = self.read_file(path)?;
        Ok(Blob::new(data))
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Bytes> {
        let content = std::fs::read(self.path.join(file_path))?;

        Ok(Bytes::from(content))
    }

    /// Working tree snapshot: each file's path to the hash it would have as a blob
    pub fn snapshot(&self) -> Result<PathSnapshot> {
        let mut snapshot = PathSnapshot::new();

        for file in self.list_files()? {
            let oid = self.parse_blob(&file)?.object_id()?;
            snapshot.insert(file.to_string_lossy(), oid);
        }

        tracing::debug!(files = snapshot.len(), "hashed working tree");
        Ok(snapshot)
    }

    fn is_ignored(file_name: &Path) -> bool {
        IGNORED_PATHS
            .iter()
            .any(|ignored| file_name == Path::new(ignored))
    }
}
