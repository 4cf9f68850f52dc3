use crate::areas::database::ObjectStore;
use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::REGULAR_FILE_MODE;

impl Repository {
    /// List the tree of a commit, HEAD by default
    pub fn ls_tree(&self, revision: Option<&str>) -> anyhow::Result<()> {
        let revision = revision.unwrap_or(HEAD_REF_NAME);

        let commit_oid = if revision == HEAD_REF_NAME {
            match self.refs().read_head()? {
                Some(oid) => oid,
                None => anyhow::bail!(
                    "HEAD does not point to a commit yet ({})",
                    self.refs().current_ref()?
                ),
            }
        } else {
            ObjectId::try_parse(revision)?
        };

        let snapshot = self.database().commit_snapshot(&commit_oid)?;

        for (path, oid) in snapshot.iter() {
            writeln!(
                self.writer(),
                "{REGULAR_FILE_MODE} {} {oid}\t{path}",
                ObjectType::Blob
            )?;
        }

        Ok(())
    }
}
