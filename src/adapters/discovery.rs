use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Lazily yield every file with `extension` under each root, in root order.
///
/// Entries are sorted by file name within a directory so repeated runs see
/// the same order. Symlinks are followed. Missing roots yield nothing.
pub fn discover<'a>(
    roots: &'a [PathBuf],
    extension: &'a str,
) -> impl Iterator<Item = PathBuf> + 'a {
    roots
        .iter()
        .filter(|root| {
            let exists = root.is_dir();
            if !exists {
                debug!(root = %root.display(), "Skipping missing source root");
            }
            exists
        })
        .flat_map(move |root| walk_root(root, extension))
}

fn walk_root<'a>(root: &'a Path, extension: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Failed to read directory entry: {}", err);
                None
            }
        })
        .filter(move |entry| is_source_file(entry, extension))
        .map(DirEntry::into_path)
}

fn is_source_file(entry: &DirEntry, extension: &str) -> bool {
    entry.file_type().is_file() && entry.path().extension() == Some(OsStr::new(extension))
}
