use crate::areas::repository::Repository;
use anyhow::Context;

// Terminology:
// - untracked files: files in the workspace that have no index entry
// - changes to be committed: index entries that differ from the HEAD tree
// - changes not staged: index entries that differ from the workspace
impl Repository {
    pub fn status_report(&self, color: bool) -> anyhow::Result<()> {
        let status = self
            .status()
            .with_context(|| format!("Unable to compute status of {}", self.path().display()))?;

        status.render(&mut *self.writer(), color)?;

        Ok(())
    }
}
