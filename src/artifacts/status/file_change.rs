use colored::{ColoredString, Colorize};

/// Classification of a path within one comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
}

impl ChangeType {
    /// Classify a difference between an older and a newer side of a comparison
    ///
    /// Callers only ask once the two sides are known to differ: a missing newer side is
    /// a deletion, a path absent from HEAD is new, anything else is a modification.
    pub fn classify(in_head: bool, in_newer: bool) -> Self {
        match (in_head, in_newer) {
            (_, false) => ChangeType::Deleted,
            (false, true) => ChangeType::Added,
            (true, true) => ChangeType::Modified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Added => "new file",
            ChangeType::Modified => "modified",
            ChangeType::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Report section a path is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    /// Index differs from HEAD
    ToBeCommitted,
    /// Working tree differs from the index
    NotStaged,
    /// Present in the working tree, absent from the index
    Untracked,
}

impl Section {
    pub fn header(&self) -> &'static str {
        match self {
            Section::ToBeCommitted => "Changes to be committed:",
            Section::NotStaged => "Changes not staged for commit:",
            Section::Untracked => "Untracked files:",
        }
    }

    pub fn paint(&self, text: String) -> ColoredString {
        match self {
            Section::ToBeCommitted => text.green(),
            Section::NotStaged | Section::Untracked => text.red(),
        }
    }
}
