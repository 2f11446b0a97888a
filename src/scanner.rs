use crate::classifier::{Capabilities, ImageClassifier};
use crate::error::ScanError;
use crate::filter::PathFilter;
use crate::metadata::{ImageRecord, ScanInfo, ScanResult};
use crate::walker;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Everything one scan needs. Built once per invocation.
#[derive(Debug, Clone)]
pub struct ScanConfiguration {
    pub root_path: PathBuf,
    pub excluded_names: HashSet<String>,
    pub capabilities: Capabilities,
}

/// Scans `config.root_path` and assembles the index.
///
/// Only an invalid root fails the scan. Unreadable entries are skipped and
/// files that cannot be decoded are recorded without dimensions.
pub fn scan(config: &ScanConfiguration) -> Result<ScanResult, ScanError> {
    let root = resolve_root(&config.root_path)?;
    log::info!("Scanning: {}", root.display());

    let filter = PathFilter::new(config.excluded_names.clone());
    let classifier = ImageClassifier::new(config.capabilities);

    let images: Vec<ImageRecord> = walker::walk_images(&root, &filter, &classifier)
        .into_iter()
        .filter_map(|path| build_record(&root, &path, &classifier))
        .collect();

    let scan_info = ScanInfo {
        scan_date: chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
        total_images: images.len(),
        scan_directory: root.to_string_lossy().into_owned(),
    };
    log::info!("Scan complete: {} images", scan_info.total_images);

    Ok(ScanResult { scan_info, images })
}

fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    match root.canonicalize() {
        Ok(resolved) if resolved.is_dir() => Ok(resolved),
        _ => Err(ScanError::InvalidRoot(root.to_path_buf())),
    }
}

fn build_record(root: &Path, path: &Path, classifier: &ImageClassifier) -> Option<ImageRecord> {
    let relative = match path.strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) => {
            log::warn!("Skipping {:?}: not under {:?}", path, root);
            return None;
        }
    };
    let relative_path = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let filename = path.file_name()?.to_string_lossy().into_owned();

    let dimensions = classifier.try_get_dimensions(path);
    Some(ImageRecord {
        filename,
        relative_path,
        width: dimensions.map(|(w, _)| w),
        height: dimensions.map(|(_, h)| h),
    })
}
