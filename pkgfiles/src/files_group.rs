use tracing::{debug, instrument, trace};

use crate::nodes::{DirectoryId, DirectoryNode, FileNode};
use crate::path::PackagePath;
use crate::traverse::BreadthFirst;
use crate::Error;

/// An index over the files of a package folder, arranged as a directory tree.
///
/// It is built once from one or more batches of full paths and then queried.
/// Directory and file names are matched ignoring case; the paths handed back
/// are always the ones originally supplied.
#[derive(Debug, Clone)]
pub struct FilesGroup {
    // Index 0 is the root. Nodes are only ever appended.
    directories: Vec<DirectoryNode>,
    file_count: usize,
}

/// The result of [FilesGroup::find].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch<'a> {
    /// The path the file was indexed from.
    pub full_path: &'a str,
    /// Handle of the containing directory, see [FilesGroup::directory].
    pub directory_id: DirectoryId,
    /// The containing directory, as reconstructed from the tree, joined by `/`.
    /// Empty for files at the root.
    pub directory: String,
    /// Number of segments between the root and the containing directory.
    pub depth: usize,
}

impl Default for FilesGroup {
    fn default() -> Self {
        Self {
            directories: vec![DirectoryNode::root()],
            file_count: 0,
        }
    }
}

impl FilesGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds each of the given full paths, if not already present.
    ///
    /// Paths are split on both `/` and `\`, empty segments are dropped, and
    /// the file is attached to the directory reached by walking the
    /// remaining segments from the root, creating directories as needed.
    /// If that directory already holds a file with the same name (ignoring
    /// case), the first one is kept.
    ///
    /// Fails with [Error::InvalidArgument] if no collection is passed.
    #[instrument(skip_all, err)]
    pub fn add_files<I, S>(&mut self, paths: Option<I>) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = paths.ok_or_else(|| Error::InvalidArgument("paths must be given".into()))?;

        let mut added = 0usize;
        let mut offered = 0usize;
        for path in paths {
            offered += 1;
            if self.add_file(path.as_ref()) {
                added += 1;
            }
        }

        debug!(offered, added, files = self.file_count, "added files");
        Ok(())
    }

    /// Adds a single path, returning whether a new file entry was created.
    /// A path ending in a separator is indexed with an empty file name.
    fn add_file(&mut self, path: &str) -> bool {
        let path = PackagePath::new(path);

        let mut directory = DirectoryId::ROOT;
        for component in path.components() {
            directory = self.add_child(directory, component);
        }

        let added = self.directories[directory.index()].add_file(&path);
        if added {
            self.file_count += 1;
        } else {
            trace!(%path, "file already present, keeping existing entry");
        }
        added
    }

    /// Returns the child of `parent` named `name` (ignoring case), creating
    /// it if it doesn't exist yet.
    fn add_child(&mut self, parent: DirectoryId, name: &str) -> DirectoryId {
        let parent_node = &self.directories[parent.index()];
        if let Some(id) = parent_node.child(name) {
            return id;
        }

        let depth = parent_node.depth() + 1;
        let id = DirectoryId(self.directories.len());
        self.directories
            .push(DirectoryNode::new(name.to_owned(), Some(parent), depth));
        self.directories[parent.index()].link_child(name, id);

        trace!(name, depth, "created directory");
        id
    }

    /// Looks up the full path of a file by its name (ignoring case).
    ///
    /// If several directories contain such a file, the one closest to the
    /// root wins; among equally shallow ones, the one created first.
    /// Returns `None` if no directory contains it.
    pub fn get_full_file_path(&self, file_name: &str) -> Option<&str> {
        self.find(file_name).map(|m| m.full_path)
    }

    /// Like [FilesGroup::get_full_file_path], but also reports where the
    /// match was found.
    pub fn find(&self, file_name: &str) -> Option<FileMatch<'_>> {
        self.breadth_first().find_map(|(id, directory)| {
            directory.file(file_name).map(|file| FileMatch {
                full_path: file.full_path(),
                directory_id: id,
                directory: self.directory_path(id),
                depth: directory.depth(),
            })
        })
    }

    /// Returns the full path of every indexed file.
    ///
    /// Directories are visited level by level, children in the order they
    /// were first created; within a directory, files come sorted by their
    /// full path, ignoring case.
    /// Each call walks the tree anew, so the order is stable as long as no
    /// files are added in between.
    pub fn get_all_file_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.breadth_first()
            .flat_map(|(_, directory)| directory.files().map(FileNode::full_path))
    }

    /// Reconstructs the path of a directory by following parent links up to
    /// the root.
    pub fn directory_path(&self, id: DirectoryId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let node = &self.directories[id.index()];
            if node.parent().is_some() {
                segments.push(node.name());
            }
            current = node.parent();
        }

        segments.reverse();
        segments.join("/")
    }

    /// Returns the directory node behind a handle, if it belongs to this tree.
    pub fn directory(&self, id: DirectoryId) -> Option<&DirectoryNode> {
        self.directories.get(id.index())
    }

    /// Number of distinct files indexed.
    pub fn len(&self) -> usize {
        self.file_count
    }

    pub fn is_empty(&self) -> bool {
        self.file_count == 0
    }

    /// Number of directories, including the root.
    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub(crate) fn directories(&self) -> &[DirectoryNode] {
        &self.directories
    }

    fn breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst::new(&self.directories, DirectoryId::ROOT)
    }
}

impl<S: AsRef<str>> Extend<S> for FilesGroup {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for path in iter {
            self.add_file(path.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FilesGroup {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut group = Self::new();
        group.extend(iter);
        group
    }
}
