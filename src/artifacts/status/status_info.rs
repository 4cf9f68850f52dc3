use crate::artifacts::status::file_change::{ChangeType, Section};
use crate::artifacts::status::snapshot::PathSnapshot;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

pub type ChangeSet = BTreeMap<String, ChangeType>;
pub type FileSet = BTreeSet<String>;

pub const CLEAN_TREE_MESSAGE: &str = "nothing to commit, working tree clean";

/// Outcome of reconciling the HEAD, index and working tree snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) index_changeset: ChangeSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

impl StatusInfo {
    /// Classify every path found in any of the three snapshots
    ///
    /// Untracked paths (no index entry, present in the working tree) are never
    /// classified further. For the rest, the working tree is compared with the index
    /// and, independently, the index with HEAD, so a path can be listed twice.
    pub fn reconcile(head: &PathSnapshot, index: &PathSnapshot, workspace: &PathSnapshot) -> Self {
        let paths = head
            .paths()
            .chain(index.paths())
            .chain(workspace.paths())
            .collect::<BTreeSet<_>>();

        let mut status = StatusInfo::default();

        for path in paths {
            let head_oid = head.get(path);
            let index_oid = index.get(path);
            let workspace_oid = workspace.get(path);

            if index_oid.is_none() && workspace_oid.is_some() {
                status.untracked_files.insert(path.clone());
                continue;
            }

            if index_oid != workspace_oid {
                status.workspace_changeset.insert(
                    path.clone(),
                    ChangeType::classify(head_oid.is_some(), workspace_oid.is_some()),
                );
            }

            if index_oid != head_oid {
                status.index_changeset.insert(
                    path.clone(),
                    ChangeType::classify(head_oid.is_some(), index_oid.is_some()),
                );
            }
        }

        tracing::debug!(
            staged = status.index_changeset.len(),
            unstaged = status.workspace_changeset.len(),
            untracked = status.untracked_files.len(),
            "reconciled snapshots"
        );

        status
    }

    /// Changes between HEAD and the index
    pub fn index_changeset(&self) -> &ChangeSet {
        &self.index_changeset
    }

    /// Changes between the index and the working tree
    pub fn workspace_changeset(&self) -> &ChangeSet {
        &self.workspace_changeset
    }

    pub fn untracked_files(&self) -> &FileSet {
        &self.untracked_files
    }

    pub fn is_clean(&self) -> bool {
        self.index_changeset.is_empty()
            && self.workspace_changeset.is_empty()
            && self.untracked_files.is_empty()
    }

    /// Write the human readable report
    ///
    /// Sections appear in a fixed order and are separated by a blank line; empty
    /// sections are omitted entirely.
    pub fn render(&self, writer: &mut dyn Write, color: bool) -> std::io::Result<()> {
        if self.is_clean() {
            return writeln!(writer, "{CLEAN_TREE_MESSAGE}");
        }

        let sections = [
            (Section::ToBeCommitted, Self::change_lines(&self.index_changeset)),
            (Section::NotStaged, Self::change_lines(&self.workspace_changeset)),
            (
                Section::Untracked,
                self.untracked_files
                    .iter()
                    .map(|path| format!("\t{path}"))
                    .collect(),
            ),
        ];

        let mut first = true;
        for (section, lines) in sections {
            if lines.is_empty() {
                continue;
            }
            if !first {
                writeln!(writer)?;
            }
            first = false;

            writeln!(writer, "{}", section.header())?;
            for line in lines {
                if color {
                    writeln!(writer, "{}", section.paint(line))?;
                } else {
                    writeln!(writer, "{line}")?;
                }
            }
        }

        Ok(())
    }

    fn change_lines(changeset: &ChangeSet) -> Vec<String> {
        changeset
            .iter()
            .map(|(path, change)| format!("{change}:\t{path}"))
            .collect()
    }
}
