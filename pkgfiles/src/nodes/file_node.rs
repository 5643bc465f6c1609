use std::cmp::Ordering;

use crate::path::{NameKey, PackagePath};

/// A FileNode is a leaf entry of a directory, remembering the path it was
/// indexed from.
///
/// Identity and ordering are both case-insensitive and keyed on the full
/// path.
#[derive(Debug, Clone)]
pub struct FileNode {
    file_name: String,
    full_path: String,
    key: NameKey,
}

impl FileNode {
    pub fn new(path: &PackagePath) -> Self {
        Self {
            file_name: path.file_name().to_owned(),
            full_path: path.as_str().to_owned(),
            key: NameKey::new(path.as_str()),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The path exactly as it was supplied.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// The case-folded full path, used for ordering.
    pub fn key(&self) -> &NameKey {
        &self.key
    }
}

impl PartialEq for FileNode {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FileNode {}

impl PartialOrd for FileNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
