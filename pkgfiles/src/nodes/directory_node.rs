use std::collections::HashMap;

use super::{DirectoryId, FileNode};
use crate::path::{NameKey, PackagePath};

/// A DirectoryNode represents a single path segment.
///
/// It holds:
///  - at most one child per case-insensitive segment name, kept in the order
///    the children were first created,
///  - at most one file per case-insensitive file name, kept sorted by
///    case-folded full path.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    name: String,
    parent: Option<DirectoryId>,
    depth: usize,

    children: Vec<DirectoryId>,
    children_by_name: HashMap<NameKey, DirectoryId>,

    files: Vec<FileNode>,
    // file name key -> full path key of the entry in `files`.
    files_by_name: HashMap<NameKey, NameKey>,
}

impl DirectoryNode {
    pub(crate) fn root() -> Self {
        Self::new(String::new(), None, 0)
    }

    pub(crate) fn new(name: String, parent: Option<DirectoryId>, depth: usize) -> Self {
        Self {
            name,
            parent,
            depth,
            children: Vec::new(),
            children_by_name: HashMap::new(),
            files: Vec::new(),
            files_by_name: HashMap::new(),
        }
    }

    /// The segment this node represents, empty for the root.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<DirectoryId> {
        self.parent
    }

    /// Number of segments between the root and this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Allows iterating over the children, in first-seen order.
    pub fn children(&self) -> impl Iterator<Item = DirectoryId> + '_ {
        self.children.iter().copied()
    }

    /// Allows iterating over the files directly contained, ordered by their
    /// case-folded full path.
    pub fn files(&self) -> impl Iterator<Item = &FileNode> + '_ {
        self.files.iter()
    }

    pub fn child(&self, name: &str) -> Option<DirectoryId> {
        self.children_by_name.get(&NameKey::new(name)).copied()
    }

    /// Looks up a file directly contained in this directory by its name,
    /// ignoring case.
    pub fn file(&self, file_name: &str) -> Option<&FileNode> {
        let key = self.files_by_name.get(&NameKey::new(file_name))?;
        self.files
            .binary_search_by(|f| f.key().cmp(key))
            .ok()
            .map(|pos| &self.files[pos])
    }

    /// Records `id` as the child for `name`.
    /// The caller must have checked [DirectoryNode::child] first.
    pub(crate) fn link_child(&mut self, name: &str, id: DirectoryId) {
        debug_assert!(self.child(name).is_none(), "child {name} linked twice");
        self.children_by_name.insert(NameKey::new(name), id);
        self.children.push(id);
    }

    /// Adds a file, preserving sorted entries.
    ///
    /// Returns false and leaves the directory untouched if a file with the
    /// same name (ignoring case) is already present.
    pub(crate) fn add_file(&mut self, path: &PackagePath) -> bool {
        let name_key = NameKey::new(path.file_name());
        if self.files_by_name.contains_key(&name_key) {
            return false;
        }

        let node = FileNode::new(path);

        // This assumes `files` is sorted, since it's only ever extended here.
        let pos = match self.files.binary_search(&node) {
            Ok(pos) | Err(pos) => pos,
        };

        self.files_by_name.insert(name_key, node.key().clone());
        self.files.insert(pos, node);
        true
    }
}
