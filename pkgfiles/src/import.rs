//! Imports that deal with a real filesystem.
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use crate::{Error, FilesGroup};

/// File extensions of managed assemblies, compared ignoring case.
pub const ASSEMBLY_EXTENSIONS: &[&str] = &["dll", "exe", "winmd"];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

fn walk(root: &Path) -> impl Iterator<Item = Result<DirEntry, Error>> + '_ {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(move |entry| entry.map_err(|e| Error::UnableToWalk(root.to_path_buf(), e)))
}

/// Ingests every file below `root` whose extension is one of `extensions`
/// into `group`, keyed by its full host path.
///
/// Symlinks are not followed. Returns the number of matching files found,
/// whether or not they were already present in `group`.
#[instrument(skip_all, fields(root = %root.as_ref().display()), err)]
pub fn ingest_path<P>(group: &mut FilesGroup, root: P, extensions: &[&str]) -> Result<usize, Error>
where
    P: AsRef<Path>,
{
    let mut paths = Vec::new();
    for entry in walk(root.as_ref()) {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }

        let path = entry
            .path()
            .to_str()
            .ok_or_else(|| Error::NonUtf8Path(entry.path().to_path_buf()))?;
        paths.push(path.to_owned());
    }

    let found = paths.len();
    group.add_files(Some(paths))?;

    debug!(found, "ingested path");
    Ok(found)
}

/// Returns each of `roots`, and every directory below them, that directly
/// contains at least one file with one of the given extensions.
///
/// Roots that don't exist are skipped.
#[instrument(skip_all, err)]
pub fn subdirectories_with_match<I, P>(roots: I, extensions: &[&str]) -> Result<Vec<PathBuf>, Error>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut matches: Vec<PathBuf> = Vec::new();
    // directories already in `matches`.
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for root in roots {
        let root = root.as_ref();
        if !root.is_dir() {
            debug!(root = %root.display(), "skipping missing directory");
            continue;
        }

        for entry in walk(root) {
            let entry = entry?;
            if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
                continue;
            }

            if let Some(parent) = entry.path().parent() {
                if seen.insert(parent.to_path_buf()) {
                    matches.push(parent.to_path_buf());
                }
            }
        }
    }

    Ok(matches)
}
