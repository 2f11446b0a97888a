use crate::classifier::ImageClassifier;
use crate::filter::PathFilter;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Collects image files under `root`, depth-first with each directory's
/// entries in file-name order. Directory symlinks are never followed and
/// excluded directories are never listed.
pub fn walk_images(
    root: &Path,
    filter: &PathFilter,
    classifier: &ImageClassifier,
) -> Vec<PathBuf> {
    log::info!("Starting file discovery in {:?}", root);

    let mut found = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, filter));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !is_regular_file(&entry) {
            log::trace!("Skipping non-file entry: {:?}", entry.path());
            continue;
        }

        let path = entry.path();
        log::trace!("Discovered file: {:?}", path);
        if classifier.is_image(entry.file_name()) {
            log::debug!("Found image file: {:?}", path);
            found.push(path.to_path_buf());
        } else {
            log::trace!("Skipping file due to unsupported extension: {:?}", path);
        }
    }

    log::info!("File discovery complete, {} images found.", found.len());
    found
}

fn is_excluded_dir(entry: &DirEntry, filter: &PathFilter) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let excluded = entry
        .file_name()
        .to_str()
        .is_some_and(|name| filter.is_excluded(name));
    if excluded {
        log::debug!("Skipping excluded directory: {:?}", entry.path());
    }
    excluded
}

// Symlinks count only when they resolve to a regular file.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
