use crate::areas::repository::Repository;

impl Repository {
    /// List index paths, or `<mode> <oid> 0\t<path>` lines with `stage`
    pub fn ls_files(&self, stage: bool) -> anyhow::Result<()> {
        for entry in self.index().load_entries()? {
            if stage {
                writeln!(self.writer(), "{:o} {} 0\t{}", entry.mode, entry.oid, entry.name)?;
            } else {
                writeln!(self.writer(), "{}", entry.name)?;
            }
        }

        Ok(())
    }
}
