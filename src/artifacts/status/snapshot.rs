use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Path to content hash mapping for one area of the repository
///
/// HEAD, index and working tree each produce one snapshot per status query.
/// Inserting an existing path replaces its hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSnapshot(BTreeMap<String, ObjectId>);

impl PathSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, oid: ObjectId) -> Option<ObjectId> {
        self.0.insert(path.into(), oid)
    }

    pub fn get(&self, path: &str) -> Option<&ObjectId> {
        self.0.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<String>> FromIterator<(P, ObjectId)> for PathSnapshot {
    fn from_iter<T: IntoIterator<Item = (P, ObjectId)>>(iter: T) -> Self {
        PathSnapshot(
            iter.into_iter()
                .map(|(path, oid)| (path.into(), oid))
                .collect(),
        )
    }
}
