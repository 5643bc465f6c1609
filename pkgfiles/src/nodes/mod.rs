//! This holds the node types making up a [crate::FilesGroup] tree.
//!
//! All [DirectoryNode]s live in one arena owned by the [crate::FilesGroup] and
//! refer to each other by [DirectoryId]. Parents own their children only
//! through that arena, the parent link is a plain lookup.
mod directory_node;
mod file_node;

pub use directory_node::DirectoryNode;
pub use file_node::FileNode;

/// Handle of a [DirectoryNode] inside its owning arena.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirectoryId(pub(crate) usize);

impl DirectoryId {
    /// The root directory, which every tree has.
    pub const ROOT: DirectoryId = DirectoryId(0);

    pub(crate) fn index(self) -> usize {
        self.0
    }
}
