//! Expansion of scan arguments into file lists.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expands `paths` into the list of files to scan.
///
/// Directories contribute their regular files, sorted by name; with
/// `recursive` their subdirectories are walked too. Symlinks to
/// directories are not followed. Other arguments are kept as given so
/// that missing files still show up in the report, and so does a
/// directory argument that cannot be listed. Entries below an argument
/// that fail to read are logged and skipped.
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, recursive, &mut files);
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn walk_dir(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(if recursive { usize::MAX } else { 1 })
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if e.path() == Some(dir) {
                    tracing::warn!(path = %dir.display(), error = %e, "Cannot list directory");
                    files.push(dir.to_path_buf());
                } else {
                    tracing::warn!(error = %e, "Skipping unreadable entry");
                }
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
            files.push(entry.into_path());
        } else if file_type.is_dir() && !recursive {
            tracing::debug!(path = %entry.path().display(), "Skipping subdirectory");
        }
    }
}
