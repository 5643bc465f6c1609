use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::nodes::{DirectoryId, DirectoryNode};

/// Walks a directory arena breadth-first, starting at the given directory.
///
/// A directory's children are enqueued, in first-seen order, when the
/// directory itself is yielded. All directories at depth `d` therefore come
/// out before any directory at depth `d + 1`.
pub struct BreadthFirst<'a> {
    directories: &'a [DirectoryNode],
    // The next element is picked from the front, new elements are enqueued
    // at the back.
    worklist: VecDeque<DirectoryId>,
}

impl<'a> BreadthFirst<'a> {
    pub(crate) fn new(directories: &'a [DirectoryNode], start: DirectoryId) -> Self {
        Self {
            directories,
            worklist: VecDeque::from([start]),
        }
    }
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = (DirectoryId, &'a DirectoryNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.worklist.pop_front()?;
        let directories = self.directories;
        let directory = &directories[id.index()];
        self.worklist.extend(directory.children());

        Some((id, directory))
    }
}

impl FusedIterator for BreadthFirst<'_> {}
