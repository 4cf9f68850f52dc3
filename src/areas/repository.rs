use crate::areas::database::{Database, ObjectStore};
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::snapshot::PathSnapshot;
use crate::artifacts::status::status_info::StatusInfo;
use crate::errors::{Result, StatusError};
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub const GIT_DIR: &str = ".git";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Index,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose working tree is rooted at `path`
    ///
    /// # Errors
    ///
    /// `NotARepository` when `path` has no `.git` directory.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let path = path.canonicalize()?;
        let git_path = path.join(GIT_DIR);

        if !git_path.is_dir() {
            return Err(StatusError::NotARepository(path));
        }

        let index = Index::new(git_path.join("index").into_boxed_path());
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index,
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Snapshot of the tree HEAD points at, empty when the branch has no commits
    pub fn head_snapshot(&self) -> Result<PathSnapshot> {
        match self.refs.read_head()? {
            Some(head_oid) => self.database.commit_snapshot(&head_oid),
            None => {
                tracing::debug!(branch = %self.refs.current_ref()?, "no commits yet");
                Ok(PathSnapshot::new())
            }
        }
    }

    /// Build the three snapshots and reconcile them
    pub fn status(&self) -> Result<StatusInfo> {
        let head = self.head_snapshot()?;
        let index = self.index.snapshot()?;
        let workspace = self.workspace.snapshot()?;

        Ok(StatusInfo::reconcile(&head, &index, &workspace))
    }
}
